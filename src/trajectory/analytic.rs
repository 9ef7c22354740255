use std::f64::consts::{FRAC_PI_2, PI};

use crate::foundation::core::SphericalAngle;
use crate::foundation::error::{BlochError, BlochResult};

/// Closed-form trajectory shapes, each a pure function of the sweep angle
/// `lambda` in `[0, 2*pi]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnalyticForm {
    /// Polar descent with a sinusoidal azimuthal wobble:
    /// `theta = pi - sin(lambda/2)^theta_power * (pi - theta_min)`,
    /// `phi = phi_center + phi_amplitude * sin(lambda)`.
    PolarWobble {
        theta_min: f64,
        theta_power: f64,
        phi_center: f64,
        phi_amplitude: f64,
    },
    /// One revolution around the equator: `theta = pi/2`, `phi = lambda`.
    Equator,
}

impl AnalyticForm {
    /// The polar-wobble shape of the reference animation.
    pub fn wobble_default() -> Self {
        Self::PolarWobble {
            theta_min: 0.55,
            theta_power: 3.2,
            phi_center: -FRAC_PI_2,
            phi_amplitude: 0.65,
        }
    }

    pub fn validate(&self) -> BlochResult<()> {
        match *self {
            Self::PolarWobble {
                theta_min,
                theta_power,
                phi_center,
                phi_amplitude,
            } => {
                if !(0.0..=PI).contains(&theta_min) {
                    return Err(BlochError::configuration(
                        "theta_min must lie in [0, pi]",
                    ));
                }
                if theta_power <= 0.0 || !theta_power.is_finite() {
                    return Err(BlochError::configuration("theta_power must be > 0"));
                }
                if !phi_center.is_finite() || !phi_amplitude.is_finite() {
                    return Err(BlochError::configuration(
                        "phi_center and phi_amplitude must be finite",
                    ));
                }
                Ok(())
            }
            Self::Equator => Ok(()),
        }
    }

    /// Evaluate at sweep angle `lambda`.
    ///
    /// `sin(lambda/2)` is non-negative over `[0, 2*pi]`, so the power-law
    /// squash is well defined for fractional exponents.
    pub fn angle_at(&self, lambda: f64) -> SphericalAngle {
        match *self {
            Self::PolarWobble {
                theta_min,
                theta_power,
                phi_center,
                phi_amplitude,
            } => {
                let squash = (lambda / 2.0).sin().powf(theta_power);
                SphericalAngle::new(
                    PI - squash * (PI - theta_min),
                    phi_center + phi_amplitude * lambda.sin(),
                )
            }
            Self::Equator => SphericalAngle::new(FRAC_PI_2, lambda),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn wobble_starts_and_ends_at_the_south_pole() {
        let form = AnalyticForm::wobble_default();
        assert!((form.angle_at(0.0).theta - PI).abs() < 1e-12);
        assert!((form.angle_at(TAU).theta - PI).abs() < 1e-9);
    }

    #[test]
    fn wobble_peaks_at_theta_min_mid_sweep() {
        let form = AnalyticForm::wobble_default();
        let mid = form.angle_at(PI);
        assert!((mid.theta - 0.55).abs() < 1e-12);
    }

    #[test]
    fn equator_is_a_flat_circle() {
        for k in 0..10 {
            let lambda = TAU * (k as f64) / 10.0;
            let a = AnalyticForm::Equator.angle_at(lambda);
            assert_eq!(a.theta, FRAC_PI_2);
            assert_eq!(a.phi, lambda);
            assert!(a.to_cartesian().z.abs() < 1e-12);
        }
    }

    #[test]
    fn validate_rejects_bad_wobble_parameters() {
        let bad = AnalyticForm::PolarWobble {
            theta_min: -0.1,
            theta_power: 3.2,
            phi_center: 0.0,
            phi_amplitude: 0.0,
        };
        assert!(bad.validate().is_err());

        let bad = AnalyticForm::PolarWobble {
            theta_min: 0.5,
            theta_power: 0.0,
            phi_center: 0.0,
            phi_amplitude: 0.0,
        };
        assert!(bad.validate().is_err());
    }
}
