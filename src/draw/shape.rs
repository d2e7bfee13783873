//! Shape definitions for the drawing canvas.

use super::color::Color;
use crate::util::{self, Point, Rect};

/// Geometric primitive produced by the shape tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
        }
    }
}

/// What a pointer gesture produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    /// Pencil: each pointer move commits a short line segment.
    Freehand,
    /// Rubber-banded shape, committed once on release.
    Shape(ShapeKind),
}

/// A drawable shape.
///
/// `anchor` is where the gesture started and `cursor` is where it currently is
/// (or ended). Circles use the anchor as center and the cursor as a point on
/// the circumference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub anchor: Point,
    pub cursor: Point,
    pub color: Color,
    /// Previews render dashed and never enter the committed history.
    pub preview: bool,
}

/// Kind-specific geometry resolved from a [`Shape`]'s two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    Line { from: Point, to: Point },
    Rectangle(Rect),
    Circle { center: Point, radius: i32, bounds: Rect },
}

impl Shape {
    /// Creates a finished shape for the committed history.
    pub fn committed(kind: ShapeKind, anchor: Point, cursor: Point, color: Color) -> Self {
        Self {
            kind,
            anchor,
            cursor,
            color,
            preview: false,
        }
    }

    /// Creates an in-flight preview shape.
    pub fn preview(kind: ShapeKind, anchor: Point, cursor: Point, color: Color) -> Self {
        Self {
            kind,
            anchor,
            cursor,
            color,
            preview: true,
        }
    }

    /// Returns the committed version of this shape.
    pub fn into_committed(self) -> Self {
        Self {
            preview: false,
            ..self
        }
    }

    /// Resolves the geometry the renderer strokes.
    pub fn outline(&self) -> Outline {
        match self.kind {
            ShapeKind::Line => Outline::Line {
                from: self.anchor,
                to: self.cursor,
            },
            ShapeKind::Rectangle => {
                Outline::Rectangle(util::bounding_rectangle(self.anchor, self.cursor))
            }
            ShapeKind::Circle => Outline::Circle {
                center: self.anchor,
                radius: util::circle_radius(self.anchor, self.cursor),
                bounds: util::circle_bounds(self.anchor, self.cursor),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn constructors_set_preview_flag() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert!(!Shape::committed(ShapeKind::Line, a, b, RED).preview);
        assert!(Shape::preview(ShapeKind::Line, a, b, RED).preview);
        assert!(
            !Shape::preview(ShapeKind::Line, a, b, RED)
                .into_committed()
                .preview
        );
    }

    #[test]
    fn rectangle_outline_is_normalized() {
        let shape = Shape::committed(
            ShapeKind::Rectangle,
            Point::new(50, 40),
            Point::new(10, 10),
            BLUE,
        );
        assert_eq!(shape.outline(), Outline::Rectangle(Rect::new(10, 10, 40, 30)));
    }

    #[test]
    fn circle_outline_uses_anchor_as_center() {
        let shape = Shape::committed(
            ShapeKind::Circle,
            Point::new(100, 100),
            Point::new(100, 130),
            RED,
        );
        match shape.outline() {
            Outline::Circle {
                center,
                radius,
                bounds,
            } => {
                assert_eq!(center, Point::new(100, 100));
                assert_eq!(radius, 30);
                assert_eq!(bounds, Rect::new(70, 70, 60, 60));
            }
            other => panic!("unexpected outline {other:?}"),
        }
    }

    #[test]
    fn line_outline_keeps_direction() {
        let shape = Shape::committed(ShapeKind::Line, Point::new(9, 9), Point::new(1, 2), RED);
        assert_eq!(
            shape.outline(),
            Outline::Line {
                from: Point::new(9, 9),
                to: Point::new(1, 2)
            }
        );
    }
}
