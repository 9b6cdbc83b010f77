//! Image export
//!
//! Captures the whole window through an egui screenshot request and writes it
//! as a PNG at a path chosen in a native save dialog.

use std::path::{Path, PathBuf};

use egui::{ColorImage, ViewportCommand};
use thiserror::Error;

/// Errors that can occur while writing an exported image.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("screenshot has {pixels} pixels, expected {width}x{height}")]
    SizeMismatch { width: usize, height: usize, pixels: usize },
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Default extension appended when the chosen path has none
pub const DEFAULT_EXTENSION: &str = "png";

/// Drives save-dialog -> screenshot -> file for the main window
#[derive(Debug, Default)]
pub struct ImageExporter {
    /// Destination waiting for the next screenshot
    pending: Option<PathBuf>,
}

impl ImageExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a screenshot has been requested but not yet saved
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ask for a destination and request a screenshot of the window.
    ///
    /// Cancelling the dialog does nothing.
    pub fn request(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save formation image")
            .add_filter("PNG files", &[DEFAULT_EXTENSION])
            .add_filter("All Files", &["*"])
            .set_file_name("formation.png")
            .save_file()
        else {
            log::debug!("Image export cancelled");
            return;
        };

        self.capture_to(ctx, path);
    }

    /// Request a screenshot that will be written to `path`
    pub fn capture_to(&mut self, ctx: &egui::Context, path: PathBuf) {
        self.pending = Some(with_default_extension(path));
        ctx.send_viewport_cmd(ViewportCommand::Screenshot);
        ctx.request_repaint();
    }

    /// Save the screenshot once it arrives. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        if self.pending.is_none() {
            return;
        }

        let screenshot = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { viewport_id, image, .. }
                    if *viewport_id == egui::ViewportId::ROOT =>
                {
                    Some(image.clone())
                }
                _ => None,
            })
        });

        let Some(captured) = screenshot else { return };
        let Some(path) = self.pending.take() else { return };

        match save_color_image(&captured, &path) {
            Ok(()) => log::info!("Saved image: {}", path.display()),
            Err(e) => log::error!("Failed to save image {}: {}", path.display(), e),
        }
    }
}

/// Append `.png` when `path` has no extension
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Convert an egui screenshot into an RGBA buffer
pub fn color_image_to_rgba(screenshot: &ColorImage) -> Result<image::RgbaImage, ExportError> {
    let [width, height] = screenshot.size;
    if screenshot.pixels.len() != width * height {
        return Err(ExportError::SizeMismatch {
            width,
            height,
            pixels: screenshot.pixels.len(),
        });
    }

    Ok(image::RgbaImage::from_fn(width as u32, height as u32, |x, y| {
        let idx = y as usize * width + x as usize;
        image::Rgba(screenshot.pixels[idx].to_srgba_unmultiplied())
    }))
}

/// Write a screenshot to disk; the format follows the path's extension
pub fn save_color_image(screenshot: &ColorImage, path: &Path) -> Result<(), ExportError> {
    let rgba = color_image_to_rgba(screenshot)?;
    rgba.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_default_extension() {
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/formation")),
            PathBuf::from("/tmp/formation.png")
        );
        assert_eq!(
            with_default_extension(PathBuf::from("/tmp/formation.jpg")),
            PathBuf::from("/tmp/formation.jpg")
        );
    }

    #[test]
    fn test_color_image_conversion() {
        let mut shot = ColorImage::new([3, 2], Color32::WHITE);
        shot.pixels[4] = Color32::from_rgb(200, 10, 20);

        let rgba = color_image_to_rgba(&shot).unwrap();
        assert_eq!(rgba.dimensions(), (3, 2));
        assert_eq!(rgba.get_pixel(1, 1).0, [200, 10, 20, 255]);
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_size_mismatch() {
        let mut shot = ColorImage::new([2, 2], Color32::BLACK);
        shot.pixels.pop();
        assert!(matches!(
            color_image_to_rgba(&shot),
            Err(ExportError::SizeMismatch { pixels: 3, .. })
        ));
    }

    #[test]
    fn test_save_writes_png() {
        let path = std::env::temp_dir().join(format!("formation_export_{}.png", std::process::id()));
        let shot = ColorImage::new([4, 4], Color32::from_rgb(215, 235, 250));

        save_color_image(&shot, &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(2, 3).0, [215, 235, 250, 255]);
    }

    #[test]
    fn test_exporter_starts_idle() {
        let exporter = ImageExporter::new();
        assert!(!exporter.is_pending());
    }
}
