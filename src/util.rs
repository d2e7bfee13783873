//! Utility functions for geometry and palette names.
//!
//! This module provides:
//! - Integer pixel [`Point`] and [`Rect`] types
//! - Bounding rectangle and circle box calculations used by the renderer
//! - Name-to-palette mapping for the config file and command line

use crate::draw::PaletteColor;

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Integer pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with non-negative size.
///
/// Zero-sized rectangles are valid: they come out of degenerate drags and
/// must still render (as nothing or a single point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Negative sizes are clamped to zero.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Returns true if the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment test (left/top inclusive, right/bottom exclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Center of the rectangle, rounded towards the top-left.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Computes the rectangle spanned by two opposite corners.
///
/// The top-left corner is `(min x, min y)` and the size is the absolute
/// difference along each axis, so the drag direction does not matter.
/// Spans wider than `i32::MAX` saturate.
pub fn bounding_rectangle(p1: Point, p2: Point) -> Rect {
    Rect::new(
        p1.x.min(p2.x),
        p1.y.min(p2.y),
        saturating_span(p1.x, p2.x),
        saturating_span(p1.y, p2.y),
    )
}

fn saturating_span(a: i32, b: i32) -> i32 {
    i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX)
}

/// Computes the bounding square of a circle given its center and a point on it.
///
/// The radius is the rounded Euclidean distance between the two points; the
/// result is `(cx - r, cy - r, 2r, 2r)`.
pub fn circle_bounds(center: Point, radius_point: Point) -> Rect {
    let radius = circle_radius(center, radius_point);
    Rect::new(center.x - radius, center.y - radius, radius * 2, radius * 2)
}

/// Rounded radius used by [`circle_bounds`].
pub fn circle_radius(center: Point, radius_point: Point) -> i32 {
    center.distance_to(radius_point).round() as i32
}

// ============================================================================
// Palette Mapping
// ============================================================================

/// Maps color name strings to palette entries.
///
/// Used by the configuration system and the command line.
///
/// # Supported Names (case-insensitive)
/// - "black", "red", "green", "blue", "yellow"
pub fn name_to_color(name: &str) -> Option<PaletteColor> {
    match name.trim().to_lowercase().as_str() {
        "black" => Some(PaletteColor::Black),
        "red" => Some(PaletteColor::Red),
        "green" => Some(PaletteColor::Green),
        "blue" => Some(PaletteColor::Blue),
        "yellow" => Some(PaletteColor::Yellow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_rectangle_normalizes_drag_direction() {
        let forward = bounding_rectangle(Point::new(10, 10), Point::new(50, 40));
        let backward = bounding_rectangle(Point::new(50, 40), Point::new(10, 10));
        assert_eq!(forward, Rect::new(10, 10, 40, 30));
        assert_eq!(forward, backward);

        let mixed = bounding_rectangle(Point::new(30, -5), Point::new(-10, 25));
        assert_eq!(mixed, Rect::new(-10, -5, 40, 30));
    }

    #[test]
    fn bounding_rectangle_matches_axis_deltas() {
        let samples = [
            (Point::new(0, 0), Point::new(0, 0)),
            (Point::new(3, 9), Point::new(-4, 2)),
            (Point::new(-7, -7), Point::new(-1, -20)),
            (Point::new(100, 5), Point::new(5, 100)),
        ];

        for (p1, p2) in samples {
            let rect = bounding_rectangle(p1, p2);
            assert_eq!(rect.width, (p1.x - p2.x).abs());
            assert_eq!(rect.height, (p1.y - p2.y).abs());
            assert_eq!((rect.x, rect.y), (p1.x.min(p2.x), p1.y.min(p2.y)));
        }
    }

    #[test]
    fn bounding_rectangle_saturates_for_extreme_points() {
        let rect = bounding_rectangle(Point::new(i32::MIN, 0), Point::new(i32::MAX, 7));
        assert_eq!((rect.x, rect.y), (i32::MIN, 0));
        assert_eq!((rect.width, rect.height), (i32::MAX, 7));

        let far = Point::new(i32::MIN, i32::MIN).distance_to(Point::new(i32::MAX, i32::MIN));
        assert!((far - u32::MAX as f64).abs() < 1.0);
    }

    #[test]
    fn degenerate_rectangle_is_zero_sized_at_point() {
        let rect = bounding_rectangle(Point::new(12, 34), Point::new(12, 34));
        assert_eq!(rect, Rect::new(12, 34, 0, 0));
        assert!(rect.is_empty());
    }

    #[test]
    fn circle_bounds_is_centered_square() {
        let rect = circle_bounds(Point::new(100, 100), Point::new(100, 130));
        assert_eq!(rect, Rect::new(70, 70, 60, 60));
        assert_eq!(rect.center(), Point::new(100, 100));
    }

    #[test]
    fn circle_bounds_rounds_distance() {
        // distance = sqrt(2*2 + 3*3) = 3.605..., rounds to 4
        let rect = circle_bounds(Point::new(0, 0), Point::new(2, 3));
        assert_eq!(rect, Rect::new(-4, -4, 8, 8));

        // distance = sqrt(1 + 1) = 1.414..., rounds to 1
        let rect = circle_bounds(Point::new(10, 10), Point::new(11, 11));
        assert_eq!(rect.width, rect.height);
        assert_eq!(rect.width, 2);
    }

    #[test]
    fn zero_radius_circle_collapses_to_center() {
        let rect = circle_bounds(Point::new(5, 6), Point::new(5, 6));
        assert_eq!(rect, Rect::new(5, 6, 0, 0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(0, 0, 10, 5);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(9, 4)));
        assert!(!rect.contains(Point::new(10, 4)));
        assert!(!rect.contains(Point::new(9, 5)));
        assert!(!rect.contains(Point::new(-1, 2)));
    }

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let rect = Rect::new(4, 4, -3, 7);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 7);
    }

    #[test]
    fn palette_names_are_case_insensitive() {
        assert_eq!(name_to_color("Red"), Some(PaletteColor::Red));
        assert_eq!(name_to_color(" yellow "), Some(PaletteColor::Yellow));
        assert_eq!(name_to_color("BLACK"), Some(PaletteColor::Black));
        assert!(name_to_color("chartreuse").is_none());
    }
}
