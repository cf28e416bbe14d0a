//! # Image I/O
//!
//! Decoding of raw bytes and files into the analyzer's RGB input, and encoding of
//! the visualization for storage or transport. Malformed input is rejected here,
//! before the analyzer runs.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing;

use crate::errors::{error_logging, AppError, AppResult};
use crate::observability::STAGE_TARGET;

/// Decodes image bytes of any supported format into an 8-bit RGB image.
pub fn decode_image(bytes: &[u8]) -> AppResult<RgbImage> {
    if bytes.is_empty() {
        return Err(AppError::ImageDecode("Image data is empty".to_string()));
    }

    let decoded = image::load_from_memory(bytes).map_err(|e| {
        error_logging::log_image_error(&e, "decode", None, Some(bytes.len()));
        AppError::ImageDecode(format!("Failed to decode image: {}", e))
    })?;

    let rgb = decoded.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(AppError::ImageDecode(format!(
            "Image has no pixels: {}x{}",
            rgb.width(),
            rgb.height()
        )));
    }

    tracing::debug!(
        target: STAGE_TARGET,
        byte_len = bytes.len(),
        width = rgb.width(),
        height = rgb.height(),
        "Decoded input image"
    );
    Ok(rgb)
}

/// Reads and decodes an image file.
pub fn load_image(path: &Path) -> AppResult<RgbImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        error_logging::log_filesystem_error(&e, "read_image", path.to_str());
        AppError::FileSystem(format!("Failed to read '{}': {}", path.display(), e))
    })?;
    decode_image(&bytes)
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> AppResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| AppError::ImageEncode(format!("Failed to encode PNG: {}", e)))?;
    Ok(buffer.into_inner())
}

/// Writes the visualization to `path`; the format follows the file extension.
pub fn save_visualization(path: &Path, image: &RgbImage) -> AppResult<()> {
    ImageFormat::from_path(path).map_err(|_| {
        AppError::Validation(format!(
            "Unsupported output format for '{}'",
            path.display()
        ))
    })?;

    image.save(path).map_err(|e| {
        error_logging::log_image_error(&e, "save_visualization", path.to_str(), None);
        AppError::from(e)
    })
}
