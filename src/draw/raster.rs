//! Persistent raster layer for burned-in strokes.

use super::color::Color;
use super::render::{self, RenderStyle};
use super::shape::Shape;
use super::DrawError;

/// Opaque pixel buffer that accumulates finished strokes.
///
/// Backed by a Cairo `Rgb24` image surface. Contexts are created per
/// operation and dropped before returning, so the surface is never borrowed
/// across calls.
#[derive(Debug)]
pub struct Raster {
    surface: cairo::ImageSurface,
    background: Color,
}

impl Raster {
    /// Creates a raster of the given size filled with `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, DrawError> {
        let surface = create_filled(width, height, background)?;
        Ok(Self {
            surface,
            background,
        })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Read access for compositing and export.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Resets every pixel to the background color.
    pub fn clear(&mut self) -> Result<(), DrawError> {
        let ctx = cairo::Context::new(&self.surface)?;
        self.background.apply(&ctx);
        ctx.paint()?;
        Ok(())
    }

    /// Strokes `shape` permanently into the raster.
    pub fn burn(&mut self, shape: &Shape, style: &RenderStyle) -> Result<(), DrawError> {
        let ctx = cairo::Context::new(&self.surface)?;
        render::render_shape(&ctx, shape, style)?;
        Ok(())
    }

    /// Grows the raster to cover at least `width` x `height`.
    ///
    /// The surface never shrinks, so content outside a smaller window comes
    /// back when the window grows again. Existing pixels stay anchored
    /// top-left and newly exposed area is filled with the background.
    pub fn ensure_size(&mut self, width: i32, height: i32) -> Result<(), DrawError> {
        let width = width.max(self.width());
        let height = height.max(self.height());
        if width == self.width() && height == self.height() {
            return Ok(());
        }

        let grown = create_filled(width, height, self.background)?;
        {
            let ctx = cairo::Context::new(&grown)?;
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }
        log::debug!(
            "Raster grown {}x{} -> {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        self.surface = grown;
        Ok(())
    }
}

fn create_filled(width: i32, height: i32, background: Color) -> Result<cairo::ImageSurface, DrawError> {
    if width <= 0 || height <= 0 {
        return Err(DrawError::InvalidSize { width, height });
    }
    let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        background.apply(&ctx);
        ctx.paint()?;
    }
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};
    use crate::draw::shape::ShapeKind;
    use crate::util::Point;

    fn pixel(raster: &Raster, x: i32, y: i32) -> u32 {
        let stride = raster.surface().stride() as usize;
        let mut copy = None;
        raster
            .surface()
            .with_data(|data| {
                let offset = y as usize * stride + x as usize * 4;
                let mut bytes = [0u8; 4];
                bytes.copy_from_slice(&data[offset..offset + 4]);
                copy = Some(u32::from_ne_bytes(bytes) & 0x00ff_ffff);
            })
            .unwrap();
        copy.unwrap()
    }

    #[test]
    fn new_raster_is_filled_with_background() {
        let raster = Raster::new(8, 8, WHITE).unwrap();
        assert_eq!(pixel(&raster, 0, 0), 0x00ff_ffff);
        assert_eq!(pixel(&raster, 7, 7), 0x00ff_ffff);
    }

    #[test]
    fn burn_then_clear_restores_background() {
        let mut raster = Raster::new(40, 40, WHITE).unwrap();
        let line = Shape::committed(ShapeKind::Line, Point::new(0, 20), Point::new(39, 20), RED);
        raster.burn(&line, &RenderStyle::default()).unwrap();
        assert_eq!(pixel(&raster, 20, 20), 0x00ff_0000);

        raster.clear().unwrap();
        assert_eq!(pixel(&raster, 20, 20), 0x00ff_ffff);
    }

    #[test]
    fn growing_preserves_top_left_content() {
        let mut raster = Raster::new(20, 20, WHITE).unwrap();
        let line = Shape::committed(ShapeKind::Line, Point::new(2, 5), Point::new(15, 5), RED);
        raster.burn(&line, &RenderStyle::default()).unwrap();

        raster.ensure_size(40, 30).unwrap();
        assert_eq!((raster.width(), raster.height()), (40, 30));
        assert_eq!(pixel(&raster, 8, 5), 0x00ff_0000);
        assert_eq!(pixel(&raster, 35, 25), 0x00ff_ffff);
    }

    #[test]
    fn shrinking_request_keeps_pixels_outside_new_bounds() {
        let mut raster = Raster::new(40, 40, WHITE).unwrap();
        let line = Shape::committed(ShapeKind::Line, Point::new(25, 30), Point::new(39, 30), RED);
        raster.burn(&line, &RenderStyle::default()).unwrap();

        raster.ensure_size(10, 10).unwrap();
        assert_eq!((raster.width(), raster.height()), (40, 40));
        raster.ensure_size(50, 20).unwrap();
        assert_eq!((raster.width(), raster.height()), (50, 40));
        assert_eq!(pixel(&raster, 30, 30), 0x00ff_0000);
        assert_eq!(pixel(&raster, 45, 10), 0x00ff_ffff);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            Raster::new(0, 10, WHITE),
            Err(DrawError::InvalidSize { width: 0, height: 10 })
        ));
    }
}
