//! # Foreground Thresholding Module
//!
//! Converts the input to a luminance map and separates the (darker) food item
//! from its near-white background with a fixed inverted binary threshold.

use image::{GrayImage, Luma, RgbImage};
use tracing;

use super::types::ThresholdedImageResult;
use crate::observability::STAGE_TARGET;

/// Fixed-point BT.601 luminance weights, scaled by 2^14.
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Converts an RGB image to grayscale using BT.601 luminance weights
/// (0.299 R + 0.587 G + 0.114 B), rounded to the nearest integer.
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    let mut gray = GrayImage::new(image.width(), image.height());

    for (x, y, pixel) in image.enumerate_pixels() {
        gray.put_pixel(x, y, Luma([luminance(pixel.0)]));
    }

    gray
}

/// Luminance of one RGB pixel.
pub fn luminance([r, g, b]: [u8; 3]) -> u8 {
    let weighted = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B;
    ((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT).min(255) as u8
}

/// Applies an inverted binary threshold to an image.
///
/// Pixels whose luminance is below `threshold` become foreground (255); pixels at
/// or above it, such as a white plate, become background (0).
///
/// # Examples
///
/// ```
/// use image::{Rgb, RgbImage};
/// use seasoning_coverage::segmentation::apply_inverse_threshold;
///
/// let mut img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
/// img.put_pixel(1, 1, Rgb([200, 40, 10]));
///
/// let result = apply_inverse_threshold(&img, 240);
/// assert_eq!(result.foreground_pixels, 1);
/// assert_eq!(result.mask.get_pixel(1, 1)[0], 255);
/// ```
pub fn apply_inverse_threshold(image: &RgbImage, threshold: u8) -> ThresholdedImageResult {
    let start_time = std::time::Instant::now();

    let gray = to_grayscale(image);
    let mut mask = GrayImage::new(gray.width(), gray.height());
    let mut foreground_pixels = 0u64;

    for (x, y, pixel) in gray.enumerate_pixels() {
        if pixel[0] < threshold {
            mask.put_pixel(x, y, Luma([255u8]));
            foreground_pixels += 1;
        }
    }

    let processing_time = start_time.elapsed();

    tracing::debug!(
        target: STAGE_TARGET,
        "Foreground thresholding completed in {}ms: threshold={}, foreground_pixels={}, dimensions={}x{}",
        processing_time.as_millis(),
        threshold,
        foreground_pixels,
        gray.width(),
        gray.height()
    );

    ThresholdedImageResult {
        mask,
        threshold,
        foreground_pixels,
        processing_time_ms: processing_time.as_millis() as u32,
    }
}
