//! Rendering primitives and the scene store (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`] and [`PaletteColor`]: RGBA values and the fixed pen palette
//! - [`Shape`]: committed shapes and the rubber-band preview
//! - [`Scene`]: committed history, preview, active gesture and raster layer
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod raster;
pub mod render;
pub mod scene;
pub mod shape;

use thiserror::Error;

// Re-export commonly used types at module level
pub use color::{Color, PaletteColor};
pub use raster::Raster;
pub use render::{RenderStyle, render_scene, render_shape, render_shapes, render_to_surface};
pub use scene::{BackingMode, Scene};
pub use shape::{Outline, Shape, ShapeKind, StrokeKind};
pub use color::RED;

/// Errors raised while drawing into Cairo surfaces.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data is borrowed elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}
