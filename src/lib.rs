//! Blochtrail animates points moving on the surface of unit spheres.
//!
//! Two independent time-parameterized paths (one closed-form analytic, one
//! resampled from a closed reference curve) are evaluated once per frame,
//! their recent history drawn as a trail that fades between two colors,
//! while a phase-bar marker tracks each path's accumulated phase on a
//! vertical gradient.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`AnimationConfig`] (validated up front) describes the
//!    frame count, trajectories, fade gradient, and phase bar.
//! 2. **Build**: loop trajectories resolve their [`LoopCurve`] once; it is
//!    immutable and shared read-only afterwards.
//! 3. **Step**: [`Animator`] advances a monotone frame counter, extends the
//!    per-path trail histories, rebuilds the transient fade overlays, and
//!    moves the dots and phase markers.
//! 4. **Draw**: everything goes through the [`RenderSurface`] trait; the
//!    engine never renders a sphere, axis, or label itself.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: every frame is a pure function of the configuration
//!   and the frame counter; nothing is retried because retrying a pure
//!   computation cannot change its result.
//! - **Fail-fast**: any error mid-frame aborts the remaining animation;
//!   frames already drawn stay on screen.
#![forbid(unsafe_code)]

mod config;
mod curve;
mod engine;
mod foundation;
mod trajectory;

pub use config::{AnimationConfig, FadeConfig, PathConfig, PhaseBarConfig, TrajectoryConfig};
pub use curve::builder::{LoopCurve, LoopShape};
pub use engine::animator::Animator;
pub use engine::phase::PhaseBar;
pub use engine::surface::{DrawableId, RecordingSurface, RenderSurface, SurfaceOp};
pub use engine::trail::{FadeOverlay, plan_overlays};
pub use foundation::core::{Lerp, Point, Point3, Rgb, SphericalAngle};
pub use foundation::error::{BlochError, BlochResult};
pub use trajectory::{AnalyticForm, LoopTrajectory, StopPolicy, Trajectory};
