use std::collections::BTreeSet;

use kurbo::Point;

use crate::foundation::core::{Point3, Rgb};
use crate::foundation::error::{BlochError, BlochResult};

/// Opaque handle to a drawable owned by the rendering surface.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DrawableId(pub u64);

/// The drawing contract the animation engine consumes.
///
/// The engine never renders a sphere, axis, or label itself; the external
/// scene owns all of that and hands the engine these primitives plus a
/// pacing `pause`. Implementations decide what a handle means; the engine
/// only creates, moves, and removes them.
pub trait RenderSurface {
    fn draw_point_3d(&mut self, point: Point3, color: Rgb, size: f64) -> BlochResult<DrawableId>;

    fn draw_polyline_3d(
        &mut self,
        points: &[Point3],
        color: Rgb,
        width: f64,
    ) -> BlochResult<DrawableId>;

    fn remove_drawable(&mut self, id: DrawableId) -> BlochResult<()>;

    /// Reposition a 3D point drawable to a new immutable location.
    fn set_marker_position_3d(&mut self, id: DrawableId, point: Point3) -> BlochResult<()>;

    /// Reposition a 2D marker (phase-bar dot) in pixel coordinates.
    fn set_marker_position_2d(&mut self, id: DrawableId, position: Point) -> BlochResult<()>;

    /// Yield for pacing between frames. Purely cosmetic; never used for
    /// synchronization.
    fn pause(&mut self, secs: f64) -> BlochResult<()>;
}

/// One recorded surface operation, in call order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum SurfaceOp {
    Point3 {
        id: DrawableId,
        point: Point3,
        color: Rgb,
        size: f64,
    },
    Polyline3 {
        id: DrawableId,
        points: Vec<Point3>,
        color: Rgb,
        width: f64,
    },
    Remove(DrawableId),
    Marker3 {
        id: DrawableId,
        point: Point3,
    },
    Marker2 {
        id: DrawableId,
        x: f64,
        y: f64,
    },
    Pause(f64),
}

/// In-memory [`RenderSurface`] that logs every call and tracks live
/// handles. Used by the test suite and for headless runs; doubles as a
/// reference for what a real backend must uphold (removing or moving a
/// dead handle is an error, not a no-op).
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u64,
    live: BTreeSet<DrawableId>,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a drawable created outside the engine (e.g. a phase-bar
    /// marker dot owned by the chart scaffolding).
    pub fn register_external_marker(&mut self) -> DrawableId {
        let id = self.alloc();
        self.live.insert(id);
        id
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn into_ops(self) -> Vec<SurfaceOp> {
        self.ops
    }

    fn alloc(&mut self) -> DrawableId {
        let id = DrawableId(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_live(&self, id: DrawableId) -> BlochResult<()> {
        if self.live.contains(&id) {
            Ok(())
        } else {
            Err(BlochError::animation(format!(
                "drawable {} is not live",
                id.0
            )))
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_point_3d(&mut self, point: Point3, color: Rgb, size: f64) -> BlochResult<DrawableId> {
        let id = self.alloc();
        self.live.insert(id);
        self.ops.push(SurfaceOp::Point3 {
            id,
            point,
            color,
            size,
        });
        Ok(id)
    }

    fn draw_polyline_3d(
        &mut self,
        points: &[Point3],
        color: Rgb,
        width: f64,
    ) -> BlochResult<DrawableId> {
        let id = self.alloc();
        self.live.insert(id);
        self.ops.push(SurfaceOp::Polyline3 {
            id,
            points: points.to_vec(),
            color,
            width,
        });
        Ok(id)
    }

    fn remove_drawable(&mut self, id: DrawableId) -> BlochResult<()> {
        self.check_live(id)?;
        self.live.remove(&id);
        self.ops.push(SurfaceOp::Remove(id));
        Ok(())
    }

    fn set_marker_position_3d(&mut self, id: DrawableId, point: Point3) -> BlochResult<()> {
        self.check_live(id)?;
        self.ops.push(SurfaceOp::Marker3 { id, point });
        Ok(())
    }

    fn set_marker_position_2d(&mut self, id: DrawableId, position: Point) -> BlochResult<()> {
        self.check_live(id)?;
        self.ops.push(SurfaceOp::Marker2 {
            id,
            x: position.x,
            y: position.y,
        });
        Ok(())
    }

    fn pause(&mut self, secs: f64) -> BlochResult<()> {
        self.ops.push(SurfaceOp::Pause(secs));
        Ok(())
    }
}
