//! # Seasoning Coverage
//!
//! Measures how much of a roughly triangular food item is covered in seasoning.
//! The analyzer finds the dominant triangle in a photo, classifies each pixel
//! inside it as seasoned (reddish-orange) or unseasoned, and renders an annotated
//! visualization alongside the coverage percentage.
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use seasoning_coverage::analyze;
//!
//! let image = RgbImage::from_pixel(32, 32, Rgb([255, 255, 255]));
//! let result = analyze(&image);
//! assert!(!result.triangle_found());
//! ```

pub mod analyzer;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod image_io;
pub mod observability;
pub mod observability_config;
pub mod report;
pub mod segmentation;
pub mod visualization;

// Re-export types for easier access
pub use analyzer::{analyze, CoverageMeasurement, SeasoningAnalysis, SeasoningAnalyzer, Triangle};
pub use config::{AnalyzerConfig, AppConfig};
pub use errors::{AppError, AppResult};
pub use report::CoverageReport;
