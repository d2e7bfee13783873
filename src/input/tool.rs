//! Drawing tool selection.

use crate::draw::{ShapeKind, StrokeKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines what a left-button drag produces. Tools are
/// picked from the toolbar or with the number keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - follows the pointer (default)
    #[default]
    Pencil,
    /// Straight line between press and release points
    Line,
    /// Rectangle outline from corner to corner
    Rectangle,
    /// Circle outline from the center outward
    Circle,
    /// Clears the canvas on the next press instead of drawing
    Clear,
}

impl Tool {
    /// Tools shown as toolbar buttons, in order.
    pub const ALL: [Tool; 5] = [
        Tool::Pencil,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Clear,
    ];

    /// What a drag with this tool produces. `None` for the clear pseudo-tool.
    pub fn stroke_kind(self) -> Option<StrokeKind> {
        match self {
            Tool::Pencil => Some(StrokeKind::Freehand),
            Tool::Line => Some(StrokeKind::Shape(ShapeKind::Line)),
            Tool::Rectangle => Some(StrokeKind::Shape(ShapeKind::Rectangle)),
            Tool::Circle => Some(StrokeKind::Shape(ShapeKind::Circle)),
            Tool::Clear => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Clear => "Clear",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pencil" | "pen" => Ok(Tool::Pencil),
            "line" => Ok(Tool::Line),
            "rectangle" | "rect" => Ok(Tool::Rectangle),
            "circle" => Ok(Tool::Circle),
            "clear" => Ok(Tool::Clear),
            other => Err(format!(
                "unknown tool '{other}' (expected pencil, line, rectangle, circle or clear)"
            )),
        }
    }
}
