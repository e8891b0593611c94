//! Snap functionality for aligning ruler endpoints to the grid and to common angles.

use kurbo::Point;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

/// Grid cell size for snapping (matches the page grid background).
pub const GRID_SIZE: f64 = 14.17;

/// Distance from a grid line within which a coordinate is pulled onto it.
pub const GRID_SNAP_TOLERANCE: f64 = 2.5;

/// Angular tolerance in radians for rotation snapping.
pub const ROTATION_SNAP_EPSILON: f64 = 0.1;

/// Live snapping configuration, queried on every event.
///
/// Implemented by whatever owns the user's snapping toggles. Handlers never
/// cache the answers, so flipping a toggle mid-gesture takes effect on the
/// next pointer move.
pub trait SnapContext {
    /// Whether points should be pulled onto grid intersections.
    fn is_grid_snapping(&self) -> bool;

    /// Whether ruler angles should be pulled onto multiples of 45 degrees.
    fn is_rotation_snapping(&self) -> bool;
}

impl<T: SnapContext + ?Sized> SnapContext for &T {
    fn is_grid_snapping(&self) -> bool {
        (**self).is_grid_snapping()
    }

    fn is_rotation_snapping(&self) -> bool {
        (**self).is_rotation_snapping()
    }
}

/// Result of a grid snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSnapResult {
    /// The (possibly) snapped point.
    pub point: Point,
    /// Whether the X coordinate was near a vertical grid line.
    pub near_x: bool,
    /// Whether the Y coordinate was near a horizontal grid line.
    pub near_y: bool,
}

impl GridSnapResult {
    /// Check if the point was moved onto a grid intersection.
    ///
    /// Only true when both axes were near a grid line.
    pub fn is_snapped(&self) -> bool {
        self.near_x && self.near_y
    }
}

/// Snap candidate for a single axis, if the coordinate lies near a grid line.
fn axis_candidate(value: f64, grid_size: f64, tolerance: f64) -> Option<f64> {
    // `%` keeps the sign of `value`, so negative coordinates round toward zero.
    let rem = value % grid_size;
    let mut candidate = None;
    if rem < tolerance {
        candidate = Some(value - rem);
    }
    if rem > grid_size - tolerance {
        candidate = Some(value + (grid_size - rem));
    }
    candidate
}

/// Snap a point to the nearest grid intersection.
///
/// A point only moves when BOTH coordinates are within `tolerance` of a grid
/// line. A point that is close to a line on one axis only is returned as is.
pub fn snap_to_grid(point: Point, grid_size: f64, tolerance: f64) -> GridSnapResult {
    let x = axis_candidate(point.x, grid_size, tolerance);
    let y = axis_candidate(point.y, grid_size, tolerance);

    match (x, y) {
        (Some(x), Some(y)) => GridSnapResult {
            point: Point::new(x, y),
            near_x: true,
            near_y: true,
        },
        (x, y) => GridSnapResult {
            point,
            near_x: x.is_some(),
            near_y: y.is_some(),
        },
    }
}

/// Canonical ruler direction relative to the anchor point.
///
/// Directions are in document space, where Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapDirection {
    /// 0 rad.
    Right,
    /// pi/4.
    DownRight,
    /// 3pi/4.
    DownLeft,
    /// -pi/4.
    UpRight,
    /// -3pi/4.
    UpLeft,
    /// +/- pi.
    Left,
    /// pi/2.
    Down,
    /// -pi/2.
    Up,
}

impl SnapDirection {
    /// Directions in the order they are tested. The first match wins.
    pub const ORDER: [SnapDirection; 8] = [
        SnapDirection::Right,
        SnapDirection::DownRight,
        SnapDirection::DownLeft,
        SnapDirection::UpRight,
        SnapDirection::UpLeft,
        SnapDirection::Left,
        SnapDirection::Down,
        SnapDirection::Up,
    ];

    /// Whether `angle` (radians, as returned by `atan2`) is within `epsilon`
    /// of this direction.
    pub fn matches(self, angle: f64, epsilon: f64) -> bool {
        let target = match self {
            SnapDirection::Right => 0.0,
            SnapDirection::DownRight => FRAC_PI_4,
            SnapDirection::DownLeft => 3.0 * FRAC_PI_4,
            SnapDirection::UpRight => -FRAC_PI_4,
            SnapDirection::UpLeft => -3.0 * FRAC_PI_4,
            // atan2 returns both -pi and pi for the negative X axis
            SnapDirection::Left => return (angle.abs() - PI).abs() < epsilon,
            SnapDirection::Down => FRAC_PI_2,
            SnapDirection::Up => -FRAC_PI_2,
        };
        (angle - target).abs() < epsilon
    }

    /// Point at `distance` from `anchor` along this direction.
    pub fn project(self, anchor: Point, distance: f64) -> Point {
        let diag = distance / SQRT_2;
        let (dx, dy) = match self {
            SnapDirection::Right => (distance, 0.0),
            SnapDirection::DownRight => (diag, diag),
            SnapDirection::DownLeft => (-diag, diag),
            SnapDirection::UpRight => (diag, -diag),
            SnapDirection::UpLeft => (-diag, -diag),
            SnapDirection::Left => (-distance, 0.0),
            SnapDirection::Down => (0.0, distance),
            SnapDirection::Up => (0.0, -distance),
        };
        Point::new(anchor.x + dx, anchor.y + dy)
    }
}

/// Result of a rotation snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSnapResult {
    /// The (possibly) snapped endpoint.
    pub point: Point,
    /// The direction the endpoint was snapped to, if any.
    pub direction: Option<SnapDirection>,
    /// Original angle from the anchor in radians, in (-pi, pi].
    pub angle: f64,
    /// Distance from the anchor (preserved by snapping).
    pub distance: f64,
}

impl RotationSnapResult {
    /// Check if snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.direction.is_some()
    }
}

/// Snap a ruler endpoint to the nearest multiple of 45 degrees around `anchor`.
///
/// The distance from the anchor is preserved. Points whose angle is not
/// within `epsilon` of any canonical direction pass through unchanged.
pub fn snap_rotation(anchor: Point, point: Point, epsilon: f64) -> RotationSnapResult {
    let dx = point.x - anchor.x;
    let dy = point.y - anchor.y;
    let distance = dx.hypot(dy);
    let angle = dy.atan2(dx);

    let direction = SnapDirection::ORDER
        .into_iter()
        .find(|dir| dir.matches(angle, epsilon));

    RotationSnapResult {
        point: direction.map_or(point, |dir| dir.project(anchor, distance)),
        direction,
        angle,
        distance,
    }
}
