//! # Image Segmentation Module
//!
//! Pixel classification stages of the analyzer:
//! - `thresholding`: luminance conversion and inverted fixed threshold (foreground mask)
//! - `color`: HSV conversion and the seasoned color mask
//! - `mask`: binary mask arithmetic and filled-polygon rasterization
//! - `types`: shared result types

pub mod color;
pub mod mask;
pub mod thresholding;
pub mod types;

pub use types::{ColorMaskResult, Hsv, ThresholdedImageResult};

pub use color::{is_seasoned, rgb_to_hsv, seasoned_color_mask};
pub use mask::{count_nonzero, filled_polygon_mask, mask_and, mask_and_not};
pub use thresholding::{apply_inverse_threshold, to_grayscale};
