use crate::foundation::error::{BlochError, BlochResult};

pub use kurbo::Point;

/// Polar/azimuthal angle pair of a unit vector.
///
/// `theta` is the polar angle measured from +z in `[0, pi]`; `phi` is the
/// azimuthal angle in the xy-plane. Produced fresh each frame by a
/// trajectory; never retained.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SphericalAngle {
    pub theta: f64,
    pub phi: f64,
}

impl SphericalAngle {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Standard spherical-to-Cartesian map onto the unit sphere.
    pub fn to_cartesian(self) -> Point3 {
        Point3 {
            x: self.theta.sin() * self.phi.cos(),
            y: self.theta.sin() * self.phi.sin(),
            z: self.theta.cos(),
        }
    }
}

/// A point on (or near) the unit sphere. kurbo is 2D-only, so the 3D
/// drawable surface speaks this type instead.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Parking position for a dot before the first frame: straight down,
    /// visually hidden at the sphere's south pole.
    pub const OFF_SPHERE: Self = Self::new(0.0, 0.0, -1.0);

    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Straight (non-premultiplied) RGB with components in `[0, 1]`.
///
/// Deserializes from `{"r": .., "g": .., "b": ..}`, `{"h": .., "s": ..,
/// "v": ..}` (hue normalized to `[0, 1]`), or `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Obj { r: f64, g: f64, b: f64 },
            Hsv { h: f64, s: f64, v: f64 },
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Obj { r, g, b } => Ok(Self { r, g, b }),
            Repr::Hsv { h, s, v } => Ok(Self::from_hsv(h, s, v)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Self::new(v[0], v[1], v[2]))
                } else {
                    Err(serde::de::Error::custom("rgb array must have len 3"))
                }
            }
        }
    }
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn validate(self) -> BlochResult<()> {
        for c in [self.r, self.g, self.b] {
            if !(0.0..=1.0).contains(&c) {
                return Err(BlochError::configuration(format!(
                    "color component {c} outside [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// HSV -> RGB with `h`, `s`, `v` in `[0, 1]`.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let h = (h.rem_euclid(1.0)) * 6.0;
        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);
        let (r, g, b) = match i as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self { r, g, b }
    }
}

impl Lerp for Rgb {
    /// Component-wise `a*(1-t) + b*t`. Callers guarantee `t` in `[0, 1]`;
    /// no clamping happens here.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: a.r * (1.0 - t) + b.r * t,
            g: a.g * (1.0 - t) + b.g * t,
            b: a.b * (1.0 - t) + b.b * t,
        }
    }
}
