//! # Shared Types for Segmentation
//!
//! Result structs shared by the thresholding and color segmentation stages.

use image::GrayImage;

/// Result of the foreground thresholding stage.
#[derive(Debug, Clone)]
pub struct ThresholdedImageResult {
    /// Binary foreground mask (255 = foreground, 0 = background)
    pub mask: GrayImage,
    /// Threshold used; intensities at or above it are background
    pub threshold: u8,
    /// Number of foreground pixels
    pub foreground_pixels: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u32,
}

/// Result of the seasoned color segmentation stage.
#[derive(Debug, Clone)]
pub struct ColorMaskResult {
    /// Binary mask of seasoned pixels over the whole image
    pub mask: GrayImage,
    /// Number of seasoned pixels in the whole image
    pub seasoned_pixels: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u32,
}

/// A pixel in hue-saturation-value form.
///
/// Hue uses the 8-bit half-degree scale [0, 180); saturation and value use [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsv {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}
