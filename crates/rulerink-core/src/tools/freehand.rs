//! Freehand handler: records every pointer sample as drawn.

use crate::stroke::Stroke;
use kurbo::Point;

/// Appends pointer samples to a stroke without snapping.
#[derive(Debug, Clone)]
pub struct FreehandHandler {
    stroke: Stroke,
}

impl FreehandHandler {
    /// Start a freehand gesture at `anchor`.
    pub fn begin(anchor: Point) -> Self {
        Self {
            stroke: Stroke::with_anchor(anchor),
        }
    }

    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn into_stroke(self) -> Stroke {
        self.stroke
    }

    /// Record a pointer sample as is.
    pub fn draw_point(&mut self, point: Point) {
        self.stroke.add_point(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_samples() {
        let mut handler = FreehandHandler::begin(Point::new(0.0, 0.0));
        handler.draw_point(Point::new(5.0, 1.0));
        handler.draw_point(Point::new(9.0, 3.0));
        assert_eq!(
            handler.stroke().points(),
            &[Point::new(0.0, 0.0), Point::new(5.0, 1.0), Point::new(9.0, 3.0)]
        );
    }

    #[test]
    fn test_keeps_close_samples() {
        let mut handler = FreehandHandler::begin(Point::new(0.0, 0.0));
        handler.draw_point(Point::new(0.2, 0.0));
        assert_eq!(handler.stroke().point_count(), 2);
        assert_eq!(handler.stroke().last_point(), Some(Point::new(0.2, 0.0)));
    }
}
