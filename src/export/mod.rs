//! Saving the canvas to image files.
//!
//! The composited canvas (raster or retained shapes plus any preview) is
//! rendered off-screen and encoded as PNG, JPEG or BMP. Results are returned
//! to the caller; the backend turns them into log lines and notifications.

pub mod file;
pub mod types;

pub use file::{ensure_directory_exists, expand_tilde, generate_filename, save_canvas, save_image};
pub use types::{ExportError, ExportFormat, ExportSettings};

use crate::draw::{self, Scene};
use std::path::PathBuf;

/// Renders `scene` exactly as shown and saves it according to `settings`.
pub fn export_scene(scene: &Scene, settings: &ExportSettings) -> Result<PathBuf, ExportError> {
    let surface = draw::render_to_surface(scene)?;
    save_canvas(&surface, settings)
}
