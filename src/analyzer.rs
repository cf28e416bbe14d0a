//! # Seasoning Analyzer
//!
//! Finds the dominant triangle in an image of a food item and measures how much
//! of its surface is seasoned.
//!
//! The pipeline is strictly sequential:
//! 1. inverted fixed threshold → foreground mask
//! 2. external contours of the foreground
//! 3. triangle selection: largest contour whose polygon approximation has 3 vertices
//! 4. seasoned color mask over the whole image
//! 5. restriction to the triangle interior and pixel counting
//! 6. visualization compositing
//!
//! Every call owns its buffers; the analyzer keeps no state between calls.

use image::RgbImage;
use imageproc::point::Point;
use tracing;

use crate::config::AnalyzerConfig;
use crate::geometry::{approximate_polygon, arc_length, find_external_contours, polygon_area, Contour};
use crate::observability::analysis_span;
use crate::segmentation::{
    apply_inverse_threshold, count_nonzero, filled_polygon_mask, mask_and, mask_and_not,
    seasoned_color_mask,
};
use crate::visualization::render_visualization;

/// The selected triangle: a 3-vertex polygon approximation of one contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point<i32>; 3],
    /// Enclosed area of the vertices (shoelace)
    pub area: f64,
}

/// Pixel counts inside the triangle and the derived coverage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageMeasurement {
    pub seasoned_pixels: u64,
    pub triangle_pixels: u64,
    /// Seasoned share of the triangle in percent, 0 when the triangle is empty
    pub coverage: f64,
}

impl CoverageMeasurement {
    pub fn from_counts(seasoned_pixels: u64, triangle_pixels: u64) -> Self {
        let coverage = if triangle_pixels > 0 {
            seasoned_pixels as f64 / triangle_pixels as f64 * 100.0
        } else {
            0.0
        };
        Self {
            seasoned_pixels,
            triangle_pixels,
            coverage,
        }
    }
}

/// Outcome of one analysis call.
#[derive(Debug, Clone)]
pub struct SeasoningAnalysis {
    /// Annotated image; the unmodified input when no triangle was found
    pub visualization: RgbImage,
    /// Seasoned percentage of the triangle, in [0, 100]
    pub coverage: f64,
    /// The selected triangle, if any contour reduced to one
    pub triangle: Option<Triangle>,
}

impl SeasoningAnalysis {
    pub fn triangle_found(&self) -> bool {
        self.triangle.is_some()
    }
}

/// Picks the largest contour whose polygon approximation has exactly 3 vertices.
///
/// Contours are scanned in order and a candidate only replaces the current best
/// when its area is strictly greater, so the first of several equal-area
/// triangles wins. The running best starts at zero area, so degenerate
/// (collinear) triangles are never selected.
pub fn select_triangle(contours: &[Contour], approximation_ratio: f64) -> Option<Triangle> {
    let mut best: Option<Triangle> = None;
    let mut best_area = 0.0;

    for contour in contours {
        let epsilon = approximation_ratio * arc_length(contour);
        let approx = approximate_polygon(contour, epsilon);
        if approx.len() != 3 {
            continue;
        }

        let area = polygon_area(&approx);
        if area > best_area {
            best_area = area;
            best = Some(Triangle {
                vertices: [approx[0], approx[1], approx[2]],
                area,
            });
        }
    }

    best
}

/// Seasoning analyzer with its tuning constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasoningAnalyzer {
    config: AnalyzerConfig,
}

impl SeasoningAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Detects the dominant triangle and measures its seasoning coverage.
    ///
    /// When no contour reduces to a triangle the result carries no triangle, a
    /// coverage of 0 and the original image as its visualization.
    ///
    /// # Examples
    ///
    /// ```
    /// use image::{Rgb, RgbImage};
    /// use seasoning_coverage::SeasoningAnalyzer;
    ///
    /// let plate = RgbImage::from_pixel(64, 64, Rgb([250, 250, 250]));
    /// let result = SeasoningAnalyzer::default().analyze(&plate);
    ///
    /// assert!(result.triangle.is_none());
    /// assert_eq!(result.coverage, 0.0);
    /// assert_eq!(result.visualization, plate);
    /// ```
    pub fn analyze(&self, image: &RgbImage) -> SeasoningAnalysis {
        let span = analysis_span("analyze");
        let _guard = span.enter();
        let start_time = std::time::Instant::now();

        let foreground = apply_inverse_threshold(image, self.config.foreground_threshold);
        let contours = find_external_contours(&foreground.mask);

        let Some(triangle) = select_triangle(&contours, self.config.approximation_ratio) else {
            tracing::info!(
                contours = contours.len(),
                width = image.width(),
                height = image.height(),
                "No triangle found, returning original image"
            );
            return SeasoningAnalysis {
                visualization: image.clone(),
                coverage: 0.0,
                triangle: None,
            };
        };

        let color = seasoned_color_mask(image, &self.config);
        let triangle_mask = filled_polygon_mask(image.width(), image.height(), &triangle.vertices);
        let seasoned = mask_and(&color.mask, &triangle_mask);
        let unseasoned = mask_and_not(&triangle_mask, &color.mask);

        let measurement =
            CoverageMeasurement::from_counts(count_nonzero(&seasoned), count_nonzero(&triangle_mask));

        let visualization = render_visualization(
            &seasoned,
            &unseasoned,
            &triangle.vertices,
            self.config.outline_thickness,
        );

        tracing::info!(
            contours = contours.len(),
            triangle_area = triangle.area,
            seasoned_pixels = measurement.seasoned_pixels,
            triangle_pixels = measurement.triangle_pixels,
            coverage = measurement.coverage,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Seasoning analysis completed"
        );

        SeasoningAnalysis {
            visualization,
            coverage: measurement.coverage,
            triangle: Some(triangle),
        }
    }

    /// Measures coverage inside an arbitrary polygon, bypassing shape detection.
    ///
    /// A polygon with zero enclosed area has no interior pixels and yields 0.
    pub fn measure_coverage(&self, image: &RgbImage, polygon: &[Point<i32>]) -> CoverageMeasurement {
        let color = seasoned_color_mask(image, &self.config);
        let region = filled_polygon_mask(image.width(), image.height(), polygon);
        let seasoned = mask_and(&color.mask, &region);
        CoverageMeasurement::from_counts(count_nonzero(&seasoned), count_nonzero(&region))
    }
}

/// Analyzes an image with the default configuration.
pub fn analyze(image: &RgbImage) -> SeasoningAnalysis {
    SeasoningAnalyzer::default().analyze(image)
}
