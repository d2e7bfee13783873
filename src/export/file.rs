//! Writing the canvas to image files.

use super::types::{ExportError, ExportFormat, ExportSettings};
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `extension` - File extension (e.g., "png")
pub fn generate_filename(template: &str, extension: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, extension)
}

/// Picks a path in `directory` for `filename` that does not exist yet.
///
/// On collision a `_N` suffix is inserted before the extension, counting up
/// from 1, so saves within the template's time resolution never overwrite
/// each other.
fn unique_path(directory: &Path, filename: &str) -> PathBuf {
    let candidate = directory.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, extension) = match filename.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{ext}")),
        None => (filename, String::new()),
    };
    (1..u32::MAX)
        .map(|n| directory.join(format!("{stem}_{n}{extension}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path when it can be resolved.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if directory.exists() {
        if !directory.is_dir() {
            return Err(ExportError::NotADirectory(directory.to_path_buf()));
        }
    } else {
        log::info!("Creating save directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Encodes `surface` into `path` using `format`.
///
/// PNG goes through Cairo directly; JPEG and BMP are converted to 8-bit RGB
/// and encoded with the `image` crate.
pub fn save_image(
    surface: &cairo::ImageSurface,
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    surface.flush();
    match format {
        ExportFormat::Png => {
            let mut writer = BufWriter::new(File::create(path)?);
            surface.write_to_png(&mut writer)?;
        }
        ExportFormat::Jpeg | ExportFormat::Bmp => {
            let rgb = surface_to_rgb(surface)?;
            let image_format = match format {
                ExportFormat::Jpeg => image::ImageFormat::Jpeg,
                _ => image::ImageFormat::Bmp,
            };
            rgb.save_with_format(path, image_format)?;
        }
    }
    Ok(())
}

/// Saves the canvas into the configured directory and returns the file path.
pub fn save_canvas(
    surface: &cairo::ImageSurface,
    settings: &ExportSettings,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&settings.save_directory)?;
    let filename = generate_filename(&settings.filename_template, settings.format.extension());
    let file_path = unique_path(&directory, &filename);

    log::info!(
        "Saving {}x{} {} to {}",
        surface.width(),
        surface.height(),
        settings.format,
        file_path.display()
    );
    save_image(surface, &file_path, settings.format)?;

    let written = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written);

    Ok(file_path)
}

/// Copies an `Rgb24`/`ARgb32` Cairo surface into an 8-bit RGB buffer.
fn surface_to_rgb(surface: &cairo::ImageSurface) -> Result<image::RgbImage, ExportError> {
    let width = surface.width().max(0) as u32;
    let height = surface.height().max(0) as u32;
    let stride = surface.stride() as usize;
    let mut rgb = image::RgbImage::new(width, height);

    surface.with_data(|data| {
        for (x, y, pixel) in rgb.enumerate_pixels_mut() {
            let offset = y as usize * stride + x as usize * 4;
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&data[offset..offset + 4]);
            let value = u32::from_ne_bytes(bytes);
            *pixel = image::Rgb([(value >> 16) as u8, (value >> 8) as u8, value as u8]);
        }
    })?;

    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("drawing_%Y%m%d", "jpg");
        assert!(filename.starts_with("drawing_"));
        assert!(filename.ends_with(".jpg"));
        assert_eq!(filename.len(), "drawing_".len() + 8 + ".jpg".len());
    }

    #[test]
    fn unique_path_appends_counter_on_collision() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path();
        assert_eq!(unique_path(dir, "drawing.png"), dir.join("drawing.png"));

        fs::write(dir.join("drawing.png"), b"x").unwrap();
        assert_eq!(unique_path(dir, "drawing.png"), dir.join("drawing_1.png"));

        fs::write(dir.join("drawing_1.png"), b"x").unwrap();
        assert_eq!(unique_path(dir, "drawing.png"), dir.join("drawing_2.png"));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn surface_pixels_convert_to_rgb() {
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, 4, 2).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            ctx.set_source_rgb(0.0, 0.0, 1.0);
            ctx.paint().unwrap();
            ctx.set_source_rgb(1.0, 0.0, 0.0);
            ctx.rectangle(0.0, 0.0, 1.0, 1.0);
            ctx.fill().unwrap();
        }
        surface.flush();

        let rgb = surface_to_rgb(&surface).unwrap();
        assert_eq!(rgb.dimensions(), (4, 2));
        assert_eq!(rgb.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(rgb.get_pixel(3, 1).0, [0, 0, 255]);
    }
}
