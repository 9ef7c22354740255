use kurbo::Point;

use crate::config::AnimationConfig;
use crate::engine::phase::PhaseBar;
use crate::engine::surface::{DrawableId, RenderSurface};
use crate::engine::trail::plan_overlays;
use crate::foundation::core::{Point3, Rgb};
use crate::foundation::error::{BlochError, BlochResult};
use crate::trajectory::{StopPolicy, Trajectory};

/// Runtime state of one animated path.
struct PathRunner {
    trajectory: Trajectory,
    stop: Option<StopPolicy>,
    color: Rgb,
    line_width: f64,
    phase_scale: f64,
    marker_x: f64,
    /// Append-only trail; grows by one point per unfrozen frame.
    history: Vec<Point3>,
    dot: DrawableId,
    base_line: Option<DrawableId>,
    /// Previous frame's fade overlays, disposed before each redraw.
    overlays: Vec<DrawableId>,
    bar_marker: Option<DrawableId>,
}

/// Single-threaded frame-step engine.
///
/// Owns the progress counter (monotone, never rewound) and all per-path
/// trail state. Each step evaluates every trajectory, extends the trails,
/// rebuilds the fade overlays, moves the dots, and synchronizes the
/// phase-bar markers, then yields through the surface's `pause`. Any
/// surface or sampling error aborts the remaining animation; frames
/// already drawn stay on screen.
pub struct Animator<S: RenderSurface> {
    surface: S,
    config: AnimationConfig,
    bar: PhaseBar,
    paths: Vec<PathRunner>,
    next_frame: u64,
}

impl<S: RenderSurface> Animator<S> {
    /// Validate the configuration, build the trajectories, and park every
    /// dot at the off-sphere sentinel.
    pub fn new(mut surface: S, config: AnimationConfig) -> BlochResult<Self> {
        config.validate()?;

        let mut paths = Vec::with_capacity(config.paths.len());
        for path in &config.paths {
            let trajectory = path.trajectory.build()?;
            let stop = path
                .stop_fraction
                .map(|f| StopPolicy::at_fraction(f, config.frames))
                .transpose()?;
            let dot = surface.draw_point_3d(Point3::OFF_SPHERE, path.color, path.dot_size)?;
            paths.push(PathRunner {
                trajectory,
                stop,
                color: path.color,
                line_width: path.line_width,
                phase_scale: path.phase_scale,
                marker_x: path.marker_x,
                history: Vec::new(),
                dot,
                base_line: None,
                overlays: Vec::new(),
                bar_marker: None,
            });
        }

        let bar = PhaseBar::new(&config.phase_bar);
        Ok(Self {
            surface,
            config,
            bar,
            paths,
            next_frame: 0,
        })
    }

    /// Attach an externally created 2D marker (a dot on the phase bar) to
    /// the path at `index`. Paths without a marker skip phase sync.
    pub fn attach_bar_marker(&mut self, index: usize, marker: DrawableId) -> BlochResult<()> {
        let runner = self.paths.get_mut(index).ok_or_else(|| {
            BlochError::configuration(format!("no path at index {index}"))
        })?;
        runner.bar_marker = Some(marker);
        Ok(())
    }

    /// Frame the next call to [`step`](Self::step) will draw.
    pub fn frame(&self) -> u64 {
        self.next_frame
    }

    pub fn is_finished(&self) -> bool {
        self.next_frame >= self.config.frames
    }

    /// Trail history of the path at `index` (for inspection).
    pub fn history(&self, index: usize) -> Option<&[Point3]> {
        self.paths.get(index).map(|p| p.history.as_slice())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Drive the animation to its terminal frame.
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) -> BlochResult<()> {
        while self.step()? {}
        tracing::debug!(frames = self.config.frames, "animation finished");
        Ok(())
    }

    /// Compute and draw one frame, then yield for the frame delay.
    ///
    /// Returns `false` once the terminal frame has been drawn; further
    /// calls are no-ops so the final frame stays displayed.
    pub fn step(&mut self) -> BlochResult<bool> {
        if self.is_finished() {
            return Ok(false);
        }
        if self.next_frame == 0 {
            // Dots sit at the sentinel during this settling pause.
            self.surface.pause(self.config.initial_delay_secs)?;
        }

        let k = self.next_frame;
        let frames = self.config.frames;
        let surface = &mut self.surface;

        for runner in &mut self.paths {
            let k_eff = runner.stop.map_or(k, |s| s.effective_frame(k));
            let frozen = runner.stop.is_some_and(|s| s.frozen(k));

            let angle = runner.trajectory.angle_at(k_eff, frames)?;
            let point = angle.to_cartesian();
            if !frozen {
                runner.history.push(point);
            }

            // The previous frame's trail art is disposed wholesale and
            // rebuilt; overlays have no identity across frames.
            for id in runner.overlays.drain(..) {
                surface.remove_drawable(id)?;
            }
            if let Some(id) = runner.base_line.take() {
                surface.remove_drawable(id)?;
            }

            let base =
                surface.draw_polyline_3d(&runner.history, runner.color, runner.line_width)?;
            runner.base_line = Some(base);

            for overlay in plan_overlays(runner.history.len(), &self.config.fade) {
                let id = surface.draw_polyline_3d(
                    &runner.history[..overlay.keep],
                    overlay.color,
                    runner.line_width,
                )?;
                runner.overlays.push(id);
            }

            surface.set_marker_position_3d(runner.dot, point)?;

            if let Some(marker) = runner.bar_marker {
                let progress = runner.trajectory.progress(k_eff, frames);
                let phase = progress * runner.phase_scale;
                let y = self.bar.phase_to_y(phase);
                surface.set_marker_position_2d(marker, Point::new(runner.marker_x, y))?;
            }
        }

        surface.pause(self.config.frame_delay_secs)?;
        self.next_frame += 1;
        Ok(!self.is_finished())
    }
}
