//! # Color Segmentation Module
//!
//! HSV conversion on the 8-bit scale (hue in half degrees, [0, 180)) and the
//! seasoned-pixel classifier built on top of it.

use image::{GrayImage, Luma, Rgb, RgbImage};
use tracing;

use super::types::{ColorMaskResult, Hsv};
use crate::config::AnalyzerConfig;
use crate::observability::STAGE_TARGET;

/// Converts one RGB pixel to HSV.
///
/// Value is the largest channel, saturation is the channel spread relative to
/// value, and hue is measured in half degrees so that it fits in a byte.
pub fn rgb_to_hsv(Rgb([r, g, b]): Rgb<u8>) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = (max - min) as f32;

    let saturation = if max == 0 {
        0
    } else {
        (255.0 * diff / max as f32).round() as u8
    };

    let hue = if diff == 0.0 {
        0
    } else {
        let (r, g, b) = (r as f32, g as f32, b as f32);
        let mut h = if max as f32 == r {
            30.0 * (g - b) / diff
        } else if max as f32 == g {
            60.0 + 30.0 * (b - r) / diff
        } else {
            120.0 + 30.0 * (r - g) / diff
        };
        if h < 0.0 {
            h += 180.0;
        }
        let h = h.round() as u8;
        if h >= AnalyzerConfig::HUE_SCALE {
            0
        } else {
            h
        }
    };

    Hsv {
        hue,
        saturation,
        value: max,
    }
}

/// Returns whether an HSV pixel falls in the seasoned (reddish-orange) range.
pub fn is_seasoned(hsv: Hsv, config: &AnalyzerConfig) -> bool {
    (config.hue_min..=config.hue_max).contains(&hsv.hue)
        && hsv.saturation >= config.saturation_min
        && hsv.value >= config.value_min
}

/// Builds the global seasoned color mask for an image.
///
/// The mask covers the whole image and is independent of any detected shape.
pub fn seasoned_color_mask(image: &RgbImage, config: &AnalyzerConfig) -> ColorMaskResult {
    let start_time = std::time::Instant::now();

    let mut mask = GrayImage::new(image.width(), image.height());
    let mut seasoned_pixels = 0u64;

    for (x, y, pixel) in image.enumerate_pixels() {
        if is_seasoned(rgb_to_hsv(*pixel), config) {
            mask.put_pixel(x, y, Luma([255u8]));
            seasoned_pixels += 1;
        }
    }

    let processing_time = start_time.elapsed();

    tracing::debug!(
        target: STAGE_TARGET,
        "Color segmentation completed in {}ms: hue={}..={}, seasoned_pixels={}",
        processing_time.as_millis(),
        config.hue_min,
        config.hue_max,
        seasoned_pixels
    );

    ColorMaskResult {
        mask,
        seasoned_pixels,
        processing_time_ms: processing_time.as_millis() as u32,
    }
}
