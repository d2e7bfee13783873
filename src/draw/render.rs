//! Cairo-based rendering of the scene.

use super::color::{Color, WHITE};
use super::scene::Scene;
use super::shape::{Outline, Shape};
use super::DrawError;

/// Stroke parameters shared by committed shapes and previews.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Line width in pixels
    pub stroke_width: f64,
    /// Dash pattern for previews (on, off)
    pub dash: [f64; 2],
    pub antialias: bool,
    /// Canvas background
    pub background: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            dash: [3.0, 3.0],
            antialias: true,
            background: WHITE,
        }
    }
}

/// Replays the whole scene onto `ctx`.
///
/// Paints the background, then either the raster layer or every committed
/// shape in insertion order, then the preview (dashed) on top. The scene is
/// only read, so rendering an unchanged scene twice gives identical pixels.
pub fn render_scene(ctx: &cairo::Context, scene: &Scene) -> Result<(), DrawError> {
    ctx.save()?;
    let painted = paint_scene(ctx, scene);
    ctx.restore()?;
    painted
}

fn paint_scene(ctx: &cairo::Context, scene: &Scene) -> Result<(), DrawError> {
    let style = scene.style();
    let (width, height) = (scene.width() as f64, scene.height() as f64);

    style.background.apply(ctx);
    ctx.rectangle(0.0, 0.0, width, height);
    ctx.fill()?;

    match scene.raster() {
        // The raster may be larger than the visible canvas.
        Some(raster) => {
            ctx.set_source_surface(raster.surface(), 0.0, 0.0)?;
            ctx.rectangle(0.0, 0.0, width, height);
            ctx.fill()?;
        }
        None => render_shapes(ctx, scene.shapes(), style)?,
    }

    if let Some(preview) = scene.preview() {
        render_shape(ctx, preview, style)?;
    }
    Ok(())
}

/// Renders shapes in order (first = bottom).
pub fn render_shapes(
    ctx: &cairo::Context,
    shapes: &[Shape],
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    for shape in shapes {
        render_shape(ctx, shape, style)?;
    }
    Ok(())
}

/// Strokes a single shape with round caps, dashed when it is a preview.
///
/// Zero-length lines and zero-size rectangles are stroked as-is; a circle
/// with zero radius draws nothing.
pub fn render_shape(
    ctx: &cairo::Context,
    shape: &Shape,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    let outline = shape.outline();
    if let Outline::Circle { radius: 0, .. } = outline {
        return Ok(());
    }

    ctx.save()?;
    shape.color.apply(ctx);
    ctx.set_line_width(style.stroke_width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    ctx.set_antialias(if style.antialias {
        cairo::Antialias::Default
    } else {
        cairo::Antialias::None
    });
    if shape.preview {
        ctx.set_dash(&style.dash, 0.0);
    } else {
        ctx.set_dash(&[], 0.0);
    }

    match outline {
        Outline::Line { from, to } => {
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
        }
        Outline::Rectangle(rect) => {
            ctx.rectangle(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }
        Outline::Circle { center, radius, .. } => {
            ctx.new_sub_path();
            ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                2.0 * std::f64::consts::PI,
            );
        }
    }

    let stroked = ctx.stroke();
    ctx.restore()?;
    stroked
}

/// Renders the scene into a fresh `Rgb24` surface of the canvas size.
pub fn render_to_surface(scene: &Scene) -> Result<cairo::ImageSurface, DrawError> {
    let surface =
        cairo::ImageSurface::create(cairo::Format::Rgb24, scene.width(), scene.height())?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_scene(&ctx, scene)?;
    }
    surface.flush();
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::shape::ShapeKind;
    use crate::util::Point;

    fn surface(width: i32, height: i32) -> (cairo::ImageSurface, cairo::Context) {
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height).unwrap();
        let ctx = cairo::Context::new(&surface).unwrap();
        WHITE.apply(&ctx);
        ctx.paint().unwrap();
        (surface, ctx)
    }

    fn rgb_at(surface: &mut cairo::ImageSurface, x: i32, y: i32) -> u32 {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y as usize * stride + x as usize * 4;
        let bytes = [
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ];
        u32::from_ne_bytes(bytes) & 0x00ff_ffff
    }

    #[test]
    fn render_scene_restores_context_state() {
        let mut scene = crate::draw::Scene::new(
            crate::draw::BackingMode::Retained,
            60,
            40,
            RenderStyle::default(),
        )
        .unwrap();
        scene.begin_gesture(
            crate::draw::StrokeKind::Shape(ShapeKind::Rectangle),
            RED,
            Point::new(5, 5),
        );
        scene.update_gesture(Point::new(30, 30));

        let (_surface, ctx) = surface(60, 40);
        ctx.set_line_width(7.0);
        ctx.set_dash(&[], 0.0);
        render_scene(&ctx, &scene).unwrap();

        assert_eq!(ctx.line_width(), 7.0);
        assert_eq!(ctx.dash_count(), 0);
    }

    #[test]
    fn zero_radius_circle_draws_nothing() {
        let (mut target, ctx) = surface(20, 20);
        let dot = Shape::committed(ShapeKind::Circle, Point::new(10, 10), Point::new(10, 10), RED);
        render_shape(&ctx, &dot, &RenderStyle::default()).unwrap();
        drop(ctx);
        assert_eq!(rgb_at(&mut target, 10, 10), 0x00ff_ffff);
    }

    #[test]
    fn degenerate_line_and_rectangle_render_without_error() {
        let (_target, ctx) = surface(20, 20);
        let style = RenderStyle::default();
        let line = Shape::committed(ShapeKind::Line, Point::new(5, 5), Point::new(5, 5), BLUE);
        let rect = Shape::committed(ShapeKind::Rectangle, Point::new(8, 8), Point::new(8, 8), BLUE);
        assert!(render_shape(&ctx, &line, &style).is_ok());
        assert!(render_shape(&ctx, &rect, &style).is_ok());
    }

    #[test]
    fn committed_rectangle_border_is_solid() {
        let (mut target, ctx) = surface(60, 60);
        let rect = Shape::committed(
            ShapeKind::Rectangle,
            Point::new(10, 10),
            Point::new(50, 40),
            RED,
        );
        render_shape(&ctx, &rect, &RenderStyle::default()).unwrap();
        drop(ctx);
        for y in 12..38 {
            assert_eq!(rgb_at(&mut target, 10, y), 0x00ff_0000, "left edge at y={y}");
        }
        assert_eq!(rgb_at(&mut target, 30, 25), 0x00ff_ffff);
    }

    #[test]
    fn preview_rectangle_is_dashed() {
        let (mut target, ctx) = surface(60, 60);
        let rect = Shape::preview(
            ShapeKind::Rectangle,
            Point::new(10, 10),
            Point::new(50, 40),
            RED,
        );
        render_shape(&ctx, &rect, &RenderStyle::default()).unwrap();
        drop(ctx);

        let edge: Vec<u32> = (12..38).map(|y| rgb_at(&mut target, 10, y)).collect();
        assert!(edge.iter().any(|&px| px == 0x00ff_ffff), "gaps expected");
        assert!(edge.iter().any(|&px| px != 0x00ff_ffff), "dashes expected");
    }

    #[test]
    fn circle_is_stroked_on_its_radius() {
        let (mut target, ctx) = surface(200, 200);
        let circle = Shape::committed(
            ShapeKind::Circle,
            Point::new(100, 100),
            Point::new(100, 130),
            BLUE,
        );
        render_shape(&ctx, &circle, &RenderStyle::default()).unwrap();
        drop(ctx);
        let rim = rgb_at(&mut target, 100, 130);
        assert_ne!(rim, 0x00ff_ffff);
        assert_eq!(rim & 0xff, 0xff);
        assert_eq!(rgb_at(&mut target, 100, 100), 0x00ff_ffff);
    }
}
