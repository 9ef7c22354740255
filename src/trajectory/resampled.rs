use std::f64::consts::TAU;

use crate::curve::builder::LoopCurve;
use crate::foundation::core::SphericalAngle;
use crate::foundation::error::{BlochError, BlochResult};

/// Trajectory that replays a prebuilt [`LoopCurve`] at a speed multiplier.
///
/// The sweep is `u = min(speed * lambda, 2*pi)`: with `speed > 1` the
/// curve completes before the animation does and the point rests at the
/// loop's seam for the remaining frames. This saturation is terminal, not
/// cyclic.
#[derive(Clone, Debug)]
pub struct LoopTrajectory {
    curve: LoopCurve,
    speed: f64,
}

impl LoopTrajectory {
    pub fn new(curve: LoopCurve, speed: f64) -> BlochResult<Self> {
        if speed <= 0.0 || !speed.is_finite() {
            return Err(BlochError::configuration("loop speed must be > 0"));
        }
        Ok(Self { curve, speed })
    }

    pub fn curve(&self) -> &LoopCurve {
        &self.curve
    }

    /// Saturated sweep angle for `lambda` in `[0, 2*pi]`.
    pub fn sweep(&self, lambda: f64) -> f64 {
        (self.speed * lambda).min(TAU)
    }

    pub fn angle_at(&self, lambda: f64) -> BlochResult<SphericalAngle> {
        self.curve.sample(self.sweep(lambda))
    }
}
