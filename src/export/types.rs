//! Data types for image export.

use crate::draw::DrawError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Encoded file format for saved drawings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Bmp => "bmp",
        }
    }

    /// Short label for the toolbar chip.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::Bmp => "BMP",
        }
    }

    /// PNG → JPEG → BMP → PNG.
    pub fn next(self) -> Self {
        match self {
            ExportFormat::Png => ExportFormat::Jpeg,
            ExportFormat::Jpeg => ExportFormat::Bmp,
            ExportFormat::Bmp => ExportFormat::Png,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where and how the canvas is written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Directory to save drawings to (tilde already expanded).
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    pub format: ExportFormat,
    /// Send a desktop notification with the result.
    pub notify: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("Rasterpad"),
            filename_template: "drawing_%Y-%m-%d_%H%M%S".to_string(),
            format: ExportFormat::Png,
            notify: true,
        }
    }
}

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Canvas pixels unavailable: {0}")]
    Surface(#[from] cairo::BorrowError),

    #[error("Failed to render canvas: {0}")]
    Render(#[from] DrawError),

    #[error("Save path {0} exists and is not a directory")]
    NotADirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_cycle_visits_every_format() {
        let mut format = ExportFormat::default();
        assert_eq!(format, ExportFormat::Png);
        format = format.next();
        assert_eq!(format, ExportFormat::Jpeg);
        format = format.next();
        assert_eq!(format, ExportFormat::Bmp);
        assert_eq!(format.next(), ExportFormat::Png);
    }

    #[test]
    fn default_settings_point_at_pictures() {
        let settings = ExportSettings::default();
        assert_eq!(settings.format.extension(), "png");
        assert!(
            settings
                .save_directory
                .to_string_lossy()
                .contains("Rasterpad")
        );
    }
}
