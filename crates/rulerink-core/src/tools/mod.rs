//! Drawing handlers and the gesture lifecycle that drives them.

mod freehand;
mod ruler;

pub use freehand::FreehandHandler;
pub use ruler::RulerHandler;

use crate::input::{Modifiers, MouseButton, PointerEvent};
use crate::snap::SnapContext;
use crate::stroke::Stroke;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Ruler,
    Freehand,
}

/// Handler for the gesture in progress.
#[derive(Debug, Clone)]
pub enum DrawHandler {
    Ruler(RulerHandler),
    Freehand(FreehandHandler),
}

impl DrawHandler {
    /// Create the handler for `tool`, anchored at `point`.
    pub fn begin(tool: ToolKind, point: Point) -> Self {
        match tool {
            ToolKind::Ruler => DrawHandler::Ruler(RulerHandler::begin(point)),
            ToolKind::Freehand => DrawHandler::Freehand(FreehandHandler::begin(point)),
        }
    }

    /// Feed a pointer move to the handler.
    pub fn motion(&mut self, ctx: &impl SnapContext, point: Point, modifiers: Modifiers) {
        match self {
            DrawHandler::Ruler(ruler) => ruler.draw_shape(ctx, point, modifiers.shift),
            DrawHandler::Freehand(freehand) => freehand.draw_point(point),
        }
    }

    pub fn stroke(&self) -> &Stroke {
        match self {
            DrawHandler::Ruler(ruler) => ruler.stroke(),
            DrawHandler::Freehand(freehand) => freehand.stroke(),
        }
    }

    pub fn into_stroke(self) -> Stroke {
        match self {
            DrawHandler::Ruler(ruler) => ruler.into_stroke(),
            DrawHandler::Freehand(freehand) => freehand.into_stroke(),
        }
    }
}

/// Manages the current tool and the gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Handler for the active gesture, if any.
    handler: Option<DrawHandler>,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool. Aborts any gesture in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.cancel();
        self.current_tool = tool;
    }

    /// Begin a gesture at `point`.
    pub fn begin(&mut self, point: Point) {
        log::debug!("Begin {:?} gesture at {:?}", self.current_tool, point);
        self.handler = Some(DrawHandler::begin(self.current_tool, point));
    }

    /// Update the active gesture. Ignored when idle.
    pub fn motion(&mut self, ctx: &impl SnapContext, point: Point, modifiers: Modifiers) {
        if let Some(handler) = &mut self.handler {
            handler.motion(ctx, point, modifiers);
        }
    }

    /// End the active gesture and return the stroke if it has a visible extent.
    pub fn end(&mut self) -> Option<Stroke> {
        let stroke = self.handler.take()?.into_stroke();
        if stroke.point_count() < 2 {
            log::debug!("Discarding single-point {:?} stroke", self.current_tool);
            return None;
        }
        log::debug!(
            "Finished {:?} stroke with {} points",
            self.current_tool,
            stroke.point_count()
        );
        Some(stroke)
    }

    /// Abort the active gesture without producing a stroke.
    pub fn cancel(&mut self) {
        if self.handler.take().is_some() {
            log::debug!("Cancelled {:?} gesture", self.current_tool);
        }
    }

    /// Check if a gesture is active.
    pub fn is_active(&self) -> bool {
        self.handler.is_some()
    }

    /// The stroke of the active gesture, for rendering a preview.
    pub fn preview(&self) -> Option<&Stroke> {
        self.handler.as_ref().map(DrawHandler::stroke)
    }

    /// Route a pointer event. Returns the finished stroke on release.
    pub fn handle_pointer(
        &mut self,
        ctx: &impl SnapContext,
        event: PointerEvent,
        modifiers: Modifiers,
    ) -> Option<Stroke> {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => {
                self.begin(position);
                None
            }
            PointerEvent::Move { position } => {
                self.motion(ctx, position, modifiers);
                None
            }
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => self.end(),
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => None,
        }
    }
}
