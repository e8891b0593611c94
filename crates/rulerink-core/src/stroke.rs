//! Stroke container owned by the active drawing gesture.

use kurbo::{Line, Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// Stroke errors.
#[derive(Debug, Error)]
pub enum StrokeError {
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// An ordered sequence of points drawn in a single gesture.
///
/// Ruler strokes hold at most two meaningful points: the anchor and the
/// moving endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Point>,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new()
    }
}

impl Stroke {
    /// Create an empty stroke.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            points: Vec::new(),
        }
    }

    /// Create a stroke starting at `anchor`.
    pub fn with_anchor(anchor: Point) -> Self {
        let mut stroke = Self::new();
        stroke.add_point(anchor);
        stroke
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the point at `index`.
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Append a point to the end of the stroke.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Replace the first point. Does nothing on an empty stroke.
    pub fn set_first_point(&mut self, point: Point) {
        if let Some(first) = self.points.first_mut() {
            *first = point;
        }
    }

    /// Replace the last point. Does nothing on an empty stroke.
    pub fn set_last_point(&mut self, point: Point) {
        if let Some(last) = self.points.last_mut() {
            *last = point;
        }
    }

    /// Distance between the first and last point.
    pub fn length(&self) -> f64 {
        match (self.first_point(), self.last_point()) {
            (Some(first), Some(last)) => first.distance(last),
            _ => 0.0,
        }
    }

    /// The straight segment from the first to the last point.
    pub fn as_line(&self) -> Option<Line> {
        if self.points.len() < 2 {
            return None;
        }
        Some(Line::new(self.first_point()?, self.last_point()?))
    }

    /// Bounding box of all points.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.first_point()?;
        let rect = self
            .points
            .iter()
            .fold(Rect::from_points(first, first), |rect, p| rect.union_pt(*p));
        Some(rect)
    }

    /// Serialize the stroke to JSON.
    pub fn to_json(&self) -> Result<String, StrokeError> {
        serde_json::to_string(self).map_err(|e| StrokeError::Serialization(e.to_string()))
    }

    /// Deserialize a stroke from JSON.
    pub fn from_json(json: &str) -> Result<Self, StrokeError> {
        serde_json::from_str(json).map_err(|e| StrokeError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_endpoints() {
        let mut stroke = Stroke::with_anchor(Point::new(0.0, 0.0));
        stroke.add_point(Point::new(5.0, 5.0));
        stroke.add_point(Point::new(10.0, 0.0));

        stroke.set_first_point(Point::new(1.0, 1.0));
        stroke.set_last_point(Point::new(20.0, 0.0));

        assert_eq!(stroke.point(0), Some(Point::new(1.0, 1.0)));
        assert_eq!(stroke.point(1), Some(Point::new(5.0, 5.0)));
        assert_eq!(stroke.point(2), Some(Point::new(20.0, 0.0)));
        assert_eq!(stroke.point(3), None);
    }

    #[test]
    fn test_setters_on_empty_stroke() {
        let mut stroke = Stroke::new();
        stroke.set_first_point(Point::new(1.0, 1.0));
        stroke.set_last_point(Point::new(2.0, 2.0));
        assert!(stroke.is_empty());
        assert_eq!(stroke.length(), 0.0);
        assert!(stroke.bounds().is_none());
    }

    #[test]
    fn test_single_point_shares_first_and_last() {
        let mut stroke = Stroke::with_anchor(Point::new(3.0, 4.0));
        stroke.set_last_point(Point::new(6.0, 8.0));
        assert_eq!(stroke.first_point(), Some(Point::new(6.0, 8.0)));
        assert!(stroke.as_line().is_none());
    }

    #[test]
    fn test_length_and_line() {
        let mut stroke = Stroke::with_anchor(Point::new(0.0, 0.0));
        stroke.add_point(Point::new(3.0, 4.0));
        assert!((stroke.length() - 5.0).abs() < f64::EPSILON);

        let line = stroke.as_line().unwrap();
        assert_eq!(line.p0, Point::new(0.0, 0.0));
        assert_eq!(line.p1, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_bounds() {
        let mut stroke = Stroke::with_anchor(Point::new(10.0, 80.0));
        stroke.add_point(Point::new(50.0, 20.0));
        let bounds = stroke.bounds().unwrap();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_json_keeps_id() {
        let mut stroke = Stroke::with_anchor(Point::new(1.5, 2.5));
        stroke.add_point(Point::new(7.0, 2.5));

        let json = stroke.to_json().unwrap();
        let restored = Stroke::from_json(&json).unwrap();
        assert_eq!(restored, stroke);
        assert!(Stroke::from_json("{").is_err());
    }
}
