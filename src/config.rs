use std::f64::consts::{PI, TAU};

use crate::curve::builder::{LoopCurve, LoopShape};
use crate::foundation::core::Rgb;
use crate::foundation::error::{BlochError, BlochResult};
use crate::trajectory::{AnalyticForm, LoopTrajectory, Trajectory};

/// Full animation configuration, resolved once before any frame runs.
///
/// Everything the engine draws with lives here (including every color
/// constant); nothing is read from the environment or the CLI. The
/// default value reproduces the reference two-sphere scenario: an
/// analytic polar-wobble path on the left, a resampled heart loop on the
/// right, and a 3-pi phase bar.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Total frame count `N`. The counter runs `0..N`.
    pub frames: u64,
    /// Pacing pause between frames, in seconds.
    pub frame_delay_secs: f64,
    /// Pause after parking the dots off-sphere, before frame 0.
    pub initial_delay_secs: f64,
    pub fade: FadeConfig,
    pub phase_bar: PhaseBarConfig,
    pub paths: Vec<PathConfig>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: 200,
            frame_delay_secs: 0.05,
            initial_delay_secs: 0.5,
            fade: FadeConfig::default(),
            phase_bar: PhaseBarConfig::default(),
            paths: vec![
                PathConfig {
                    trajectory: TrajectoryConfig::Analytic(AnalyticForm::wobble_default()),
                    stop_fraction: None,
                    color: Rgb::new(1.0, 0.0, 0.0),
                    line_width: 3.0,
                    dot_size: 60.0,
                    phase_scale: TAU,
                    marker_x: 105.0,
                },
                PathConfig {
                    trajectory: TrajectoryConfig::Loop {
                        shape: LoopShape::default(),
                        speed: 1.5,
                    },
                    stop_fraction: None,
                    color: Rgb::new(0.0, 0.0, 1.0),
                    line_width: 3.0,
                    dot_size: 60.0,
                    phase_scale: 3.0 * PI,
                    marker_x: 195.0,
                },
            ],
        }
    }
}

impl AnimationConfig {
    /// The reference single-revolution scenario: two equatorial paths that
    /// halt at 70% and 40% of the animation.
    pub fn equatorial_pair() -> Self {
        let mut config = Self::default();
        config.paths = vec![
            PathConfig {
                trajectory: TrajectoryConfig::Analytic(AnalyticForm::Equator),
                stop_fraction: Some(0.7),
                color: Rgb::new(1.0, 0.0, 0.0),
                line_width: 3.0,
                dot_size: 60.0,
                phase_scale: TAU,
                marker_x: 105.0,
            },
            PathConfig {
                trajectory: TrajectoryConfig::Analytic(AnalyticForm::Equator),
                stop_fraction: Some(0.4),
                color: Rgb::new(0.0, 0.0, 1.0),
                line_width: 3.0,
                dot_size: 60.0,
                phase_scale: TAU,
                marker_x: 195.0,
            },
        ];
        config
    }

    pub fn from_json(json: &str) -> BlochResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| BlochError::configuration(format!("invalid config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BlochResult<()> {
        if self.frames < 3 {
            return Err(BlochError::configuration("frames must be >= 3"));
        }
        for (name, v) in [
            ("frame_delay_secs", self.frame_delay_secs),
            ("initial_delay_secs", self.initial_delay_secs),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(BlochError::configuration(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        self.fade.validate()?;
        self.phase_bar.validate()?;
        if self.paths.is_empty() {
            return Err(BlochError::configuration("at least one path is required"));
        }
        for path in &self.paths {
            path.validate()?;
        }
        Ok(())
    }
}

/// Fading-trail parameters shared by all paths.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Number of overlay segments per frame.
    pub steps: usize,
    /// History points truncated per overlay step.
    pub length: usize,
    /// Color of the newest covered portion of the trail.
    pub young: Rgb,
    /// Color the oldest portion fades toward.
    pub old: Rgb,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            length: 1,
            young: Rgb::new(1.0, 0.5, 0.0),
            old: Rgb::new(0.6, 0.0, 0.8),
        }
    }
}

impl FadeConfig {
    pub fn validate(&self) -> BlochResult<()> {
        if self.steps < 1 {
            return Err(BlochError::configuration("fade steps must be >= 1"));
        }
        if self.length < 1 {
            return Err(BlochError::configuration("fade length must be >= 1"));
        }
        self.young.validate()?;
        self.old.validate()?;
        Ok(())
    }
}

/// Geometry of the vertical gradient bar the phase markers move on.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PhaseBarConfig {
    pub height_px: f64,
    /// Phase value mapped to the top of the bar.
    pub phase_max: f64,
}

impl Default for PhaseBarConfig {
    fn default() -> Self {
        Self {
            height_px: 300.0,
            phase_max: 3.0 * PI,
        }
    }
}

impl PhaseBarConfig {
    pub fn validate(&self) -> BlochResult<()> {
        if !self.height_px.is_finite() || self.height_px <= 0.0 {
            return Err(BlochError::configuration("phase bar height must be > 0"));
        }
        if !self.phase_max.is_finite() || self.phase_max <= 0.0 {
            return Err(BlochError::configuration("phase_max must be > 0"));
        }
        Ok(())
    }
}

/// Per-path settings: which trajectory, how it is drawn, and how its
/// progress maps onto the phase bar.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PathConfig {
    pub trajectory: TrajectoryConfig,
    /// Freeze the path (angle and trail) once the counter passes this
    /// fraction of the total frames.
    #[serde(default)]
    pub stop_fraction: Option<f64>,
    /// Base color of the full trail and the moving dot.
    pub color: Rgb,
    pub line_width: f64,
    pub dot_size: f64,
    /// Phase accumulated over the path's full progress. One revolution is
    /// `2*pi`; the reference loop path accumulates `3*pi`.
    pub phase_scale: f64,
    /// Fixed x pixel position of this path's phase-bar marker.
    pub marker_x: f64,
}

impl PathConfig {
    pub fn validate(&self) -> BlochResult<()> {
        self.trajectory.validate()?;
        if let Some(f) = self.stop_fraction {
            if !f.is_finite() || f <= 0.0 || f > 1.0 {
                return Err(BlochError::configuration(
                    "stop_fraction must lie in (0, 1]",
                ));
            }
        }
        self.color.validate()?;
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(BlochError::configuration("line_width must be > 0"));
        }
        if !self.dot_size.is_finite() || self.dot_size <= 0.0 {
            return Err(BlochError::configuration("dot_size must be > 0"));
        }
        if !self.phase_scale.is_finite() || self.phase_scale < 0.0 {
            return Err(BlochError::configuration("phase_scale must be >= 0"));
        }
        if !self.marker_x.is_finite() {
            return Err(BlochError::configuration("marker_x must be finite"));
        }
        Ok(())
    }
}

/// Serializable trajectory choice; custom loop generators stay an API-only
/// feature ([`LoopCurve::build_with`]), the config always builds the
/// canonical heart.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum TrajectoryConfig {
    Analytic(AnalyticForm),
    Loop { shape: LoopShape, speed: f64 },
}

impl TrajectoryConfig {
    pub fn validate(&self) -> BlochResult<()> {
        match self {
            Self::Analytic(form) => form.validate(),
            Self::Loop { shape, speed } => {
                shape.validate()?;
                if !speed.is_finite() || *speed <= 0.0 {
                    return Err(BlochError::configuration("loop speed must be > 0"));
                }
                Ok(())
            }
        }
    }

    /// Resolve into a runtime trajectory, building the loop curve once.
    pub fn build(&self) -> BlochResult<Trajectory> {
        match self {
            Self::Analytic(form) => {
                form.validate()?;
                Ok(Trajectory::Analytic(*form))
            }
            Self::Loop { shape, speed } => {
                let curve = LoopCurve::build(shape)?;
                Ok(Trajectory::Loop(LoopTrajectory::new(curve, *speed)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        AnimationConfig::default().validate().unwrap();
        AnimationConfig::equatorial_pair().validate().unwrap();
    }

    #[test]
    fn rejects_tiny_frame_counts_and_bad_fades() {
        let mut config = AnimationConfig::default();
        config.frames = 2;
        assert!(config.validate().is_err());

        let mut config = AnimationConfig::default();
        config.fade.steps = 0;
        assert!(config.validate().is_err());

        let mut config = AnimationConfig::default();
        config.fade.young = Rgb::new(1.5, 0.0, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_path_settings() {
        let mut config = AnimationConfig::default();
        config.paths[0].stop_fraction = Some(0.0);
        assert!(config.validate().is_err());

        let mut config = AnimationConfig::default();
        config.paths[1].trajectory = TrajectoryConfig::Loop {
            shape: LoopShape::default(),
            speed: -1.0,
        };
        assert!(config.validate().is_err());

        let mut config = AnimationConfig::default();
        config.paths.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_round_trip_preserves_defaults() {
        let config = AnimationConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = AnimationConfig::from_json(&json).unwrap();
        assert_eq!(back.frames, 200);
        assert_eq!(back.paths.len(), 2);
        assert_eq!(back.fade.steps, 20);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = AnimationConfig::from_json(r#"{"frames": 50}"#).unwrap();
        assert_eq!(config.frames, 50);
        assert_eq!(config.paths.len(), 2);
        assert_eq!(config.fade.length, 1);
    }

    #[test]
    fn colors_accept_objects_and_arrays() {
        let config = AnimationConfig::from_json(
            r#"{"fade": {"young": {"r": 1.0, "g": 0.5, "b": 0.0}, "old": [0.6, 0.0, 0.8]}}"#,
        )
        .unwrap();
        assert_eq!(config.fade.young, Rgb::new(1.0, 0.5, 0.0));
        assert_eq!(config.fade.old, Rgb::new(0.6, 0.0, 0.8));
    }

    #[test]
    fn colors_accept_hsv_objects() {
        let config = AnimationConfig::from_json(
            r#"{"fade": {"young": {"h": 0.0, "s": 1.0, "v": 1.0}}}"#,
        )
        .unwrap();
        assert_eq!(config.fade.young, Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn trajectory_config_builds_runtime_kinds() {
        let analytic = TrajectoryConfig::Analytic(AnalyticForm::Equator)
            .build()
            .unwrap();
        assert!(matches!(analytic, Trajectory::Analytic(_)));

        let looped = TrajectoryConfig::Loop {
            shape: LoopShape::default(),
            speed: 1.5,
        }
        .build()
        .unwrap();
        assert!(matches!(looped, Trajectory::Loop(_)));
    }
}
