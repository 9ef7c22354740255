pub mod analytic;
pub mod resampled;

use std::f64::consts::TAU;

use crate::foundation::core::SphericalAngle;
use crate::foundation::error::{BlochError, BlochResult};

pub use analytic::AnalyticForm;
pub use resampled::LoopTrajectory;

/// A time-parameterized path on the unit sphere, evaluated once per frame.
#[derive(Clone, Debug)]
pub enum Trajectory {
    Analytic(AnalyticForm),
    Loop(LoopTrajectory),
}

impl Trajectory {
    fn lambda(k: u64, frames: u64) -> f64 {
        TAU * (k as f64) / (frames as f64)
    }

    /// Angle pair at frame `k` of an `frames`-frame animation.
    pub fn angle_at(&self, k: u64, frames: u64) -> BlochResult<SphericalAngle> {
        let lambda = Self::lambda(k.min(frames), frames);
        match self {
            Self::Analytic(form) => Ok(form.angle_at(lambda)),
            Self::Loop(traj) => traj.angle_at(lambda),
        }
    }

    /// Normalized progress in `[0, 1]` used for phase mapping.
    ///
    /// Analytic paths progress with the frame counter; loop paths progress
    /// with their (possibly saturated) sweep, so a fast loop reports 1.0
    /// as soon as it reaches the seam.
    pub fn progress(&self, k: u64, frames: u64) -> f64 {
        match self {
            Self::Analytic(_) => {
                if frames <= 1 {
                    1.0
                } else {
                    ((k as f64) / ((frames - 1) as f64)).min(1.0)
                }
            }
            Self::Loop(traj) => traj.sweep(Self::lambda(k.min(frames), frames)) / TAU,
        }
    }
}

/// Optional stop-at-fraction policy: past `floor(stop_fraction * frames)`
/// the path freezes at its stop-frame angle and its trail stops growing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StopPolicy {
    stop_frame: u64,
}

impl StopPolicy {
    pub fn at_fraction(stop_fraction: f64, frames: u64) -> BlochResult<Self> {
        if !stop_fraction.is_finite() || stop_fraction <= 0.0 || stop_fraction > 1.0 {
            return Err(BlochError::configuration(
                "stop_fraction must lie in (0, 1]",
            ));
        }
        Ok(Self {
            stop_frame: (stop_fraction * (frames as f64)).floor() as u64,
        })
    }

    /// Frame actually fed to the trajectory at step `k`.
    pub fn effective_frame(&self, k: u64) -> u64 {
        k.min(self.stop_frame)
    }

    /// Whether the trail history is frozen at step `k`.
    pub fn frozen(&self, k: u64) -> bool {
        k > self.stop_frame
    }
}
