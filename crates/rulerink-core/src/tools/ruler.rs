//! Ruler handler: straight two-point strokes with optional snapping.

use crate::snap::{self, SnapContext};
use crate::stroke::Stroke;
use kurbo::Point;

/// Turns pointer motion into a straight line from the stroke's anchor.
///
/// Lives for a single drag gesture and owns the stroke being drawn.
#[derive(Debug, Clone)]
pub struct RulerHandler {
    stroke: Stroke,
}

impl RulerHandler {
    /// Create a handler drawing into `stroke`.
    pub fn new(stroke: Stroke) -> Self {
        Self { stroke }
    }

    /// Start a ruler gesture at `anchor`.
    pub fn begin(anchor: Point) -> Self {
        Self::new(Stroke::with_anchor(anchor))
    }

    /// The stroke being drawn.
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// Finish the gesture and hand the stroke back.
    pub fn into_stroke(self) -> Stroke {
        self.stroke
    }

    /// Snap `point` to a grid intersection if grid snapping is enabled.
    pub fn snap_to_grid(ctx: &impl SnapContext, point: Point) -> Point {
        if !ctx.is_grid_snapping() {
            return point;
        }
        let result = snap::snap_to_grid(point, snap::GRID_SIZE, snap::GRID_SNAP_TOLERANCE);
        if result.is_snapped() {
            log::trace!("Grid snap {:?} -> {:?}", point, result.point);
        }
        result.point
    }

    /// Snap `point` onto the nearest multiple of 45 degrees around the anchor.
    pub fn snap_rotation(&self, point: Point) -> Point {
        let Some(anchor) = self.stroke.first_point() else {
            return point;
        };
        let result = snap::snap_rotation(anchor, point, snap::ROTATION_SNAP_EPSILON);
        if let Some(direction) = result.direction {
            log::trace!("Rotation snap {:?} -> {:?} ({:?})", point, result.point, direction);
        }
        result.point
    }

    /// Update the stroke for a pointer move to `current`.
    ///
    /// Holding shift disables snapping for both the anchor and the endpoint.
    pub fn draw_shape(&mut self, ctx: &impl SnapContext, current: Point, shift_down: bool) {
        // The anchor is re-snapped on every move, not just the first one
        if !shift_down && ctx.is_grid_snapping() {
            if let Some(anchor) = self.stroke.first_point() {
                let snapped = Self::snap_to_grid(ctx, anchor);
                self.stroke.set_first_point(snapped);
            }
        }

        let mut point = current;
        if self.stroke.point_count() < 2 {
            self.stroke.add_point(current);
        } else if !shift_down {
            if ctx.is_rotation_snapping() {
                point = self.snap_rotation(point);
            }
            point = Self::snap_to_grid(ctx, point);
        }

        self.stroke.set_last_point(point);
    }
}
