use std::f64::consts::{FRAC_PI_4, PI, TAU};

use crate::curve::sampler::sample_closed;
use crate::foundation::core::SphericalAngle;
use crate::foundation::error::{BlochError, BlochResult};

/// Shape parameters mapping a normalized closed curve into the
/// `(theta, phi)` domain.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoopShape {
    /// Number of discrete samples over one revolution. Must be >= 3.
    pub samples: usize,
    /// Azimuthal span scale applied to the normalized x-sequence.
    pub width: f64,
    /// Polar span scale applied to the normalized y-sequence.
    pub height: f64,
    /// Azimuthal anchor the curve is centered on.
    pub phi_center: f64,
}

impl Default for LoopShape {
    fn default() -> Self {
        Self {
            samples: 200,
            width: 1.25,
            height: 1.05,
            phi_center: FRAC_PI_4 + TAU / 3.0,
        }
    }
}

impl LoopShape {
    pub fn validate(&self) -> BlochResult<()> {
        if self.samples < 3 {
            return Err(BlochError::configuration(
                "loop shape needs at least 3 samples",
            ));
        }
        for (name, v) in [
            ("width", self.width),
            ("height", self.height),
            ("phi_center", self.phi_center),
        ] {
            if !v.is_finite() {
                return Err(BlochError::configuration(format!(
                    "loop shape {name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// A closed, arc-reparameterized reference curve on the sphere, stored as
/// two equal-length sample sequences over one revolution.
///
/// Built once and immutable afterwards; both animation paths may share it
/// read-only. Index 0 is canonical: the build rotates the raw sequences so
/// the global minimum of the y-sequence starts the loop, which pins where
/// an animation enters the curve regardless of the generator's own phase.
#[derive(Clone, Debug, PartialEq)]
pub struct LoopCurve {
    theta: Vec<f64>,
    phi: Vec<f64>,
}

impl LoopCurve {
    /// Build the canonical closed curve: the classic cardioid-like heart,
    /// `x = 16 sin^3 t`, `y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`.
    pub fn build(shape: &LoopShape) -> BlochResult<Self> {
        Self::build_with(
            shape,
            |t| 16.0 * t.sin().powi(3),
            |t| 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos(),
        )
    }

    /// Build from a caller-supplied pair of periodic generators sampled at
    /// `shape.samples` equally spaced angles in `[0, 2*pi)`.
    ///
    /// Deterministic: identical inputs produce identical output.
    pub fn build_with<Fx, Fy>(shape: &LoopShape, fx: Fx, fy: Fy) -> BlochResult<Self>
    where
        Fx: Fn(f64) -> f64,
        Fy: Fn(f64) -> f64,
    {
        shape.validate()?;
        let n = shape.samples;

        let mut xs = Vec::with_capacity(n);
        let mut ys = Vec::with_capacity(n);
        for i in 0..n {
            let t = TAU * (i as f64) / (n as f64);
            xs.push(fx(t));
            ys.push(fy(t));
        }

        // Normalize x by peak amplitude, y into [0, 1] by range.
        let x_peak = xs.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        if x_peak == 0.0 || !x_peak.is_finite() {
            return Err(BlochError::configuration(
                "loop x-generator has degenerate amplitude",
            ));
        }
        let (y_min, y_max) = ys
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let y_span = y_max - y_min;
        if y_span == 0.0 || !y_span.is_finite() {
            return Err(BlochError::configuration("loop y-generator has flat range"));
        }
        for x in &mut xs {
            *x /= x_peak;
        }
        for y in &mut ys {
            *y = (*y - y_min) / y_span;
        }

        // Canonical start: rotate so the global y-minimum becomes index 0.
        let start = ys
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);
        xs.rotate_left(start);
        ys.rotate_left(start);

        let theta = ys.iter().map(|y| PI - shape.height * y).collect();
        let phi = xs.iter().map(|x| shape.phi_center + shape.width * x).collect();

        tracing::debug!(samples = n, start_index = start, "loop curve built");
        Ok(Self { theta, phi })
    }

    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    pub fn theta_samples(&self) -> &[f64] {
        &self.theta
    }

    pub fn phi_samples(&self) -> &[f64] {
        &self.phi
    }

    /// Interpolated angle pair at `u` in `[0, 2*pi]`. Queries near the
    /// seam blend across it; `u = 2*pi` lands back on index 0; anything
    /// outside the range is a sampling error.
    pub fn sample(&self, u: f64) -> BlochResult<SphericalAngle> {
        Ok(SphericalAngle::new(
            sample_closed(&self.theta, u)?,
            sample_closed(&self.phi, u)?,
        ))
    }
}
