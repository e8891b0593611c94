//! RulerInk Core - straight ruler strokes for pen-based canvases.
//!
//! Converts pointer motion into two-point strokes, optionally snapping the
//! endpoints to a fixed grid and to multiples of 45 degrees.

pub mod config;
pub mod input;
pub mod snap;
pub mod stroke;
pub mod tools;

pub use config::{ConfigError, ConfigResult, SnapSettings};
pub use input::{Modifiers, MouseButton, PointerEvent};
pub use snap::{GridSnapResult, RotationSnapResult, SnapContext, SnapDirection};
pub use stroke::{Stroke, StrokeError, StrokeId};
pub use tools::{DrawHandler, FreehandHandler, RulerHandler, ToolKind, ToolManager};
