//! # Coverage Report
//!
//! Serializable summary of one analysis, with the coverage rounded to two
//! decimal places for display and JSON output.

use serde::{Deserialize, Serialize};

use crate::analyzer::SeasoningAnalysis;

/// JSON-friendly analysis summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Coverage percentage rounded to 2 decimal places
    pub coverage: f64,
    pub triangle_found: bool,
    /// Triangle vertices as `[x, y]` pairs
    pub vertices: Option<[[i32; 2]; 3]>,
}

impl CoverageReport {
    pub fn from_analysis(analysis: &SeasoningAnalysis) -> Self {
        Self {
            coverage: round_coverage(analysis.coverage),
            triangle_found: analysis.triangle.is_some(),
            vertices: analysis
                .triangle
                .map(|t| t.vertices.map(|p| [p.x, p.y])),
        }
    }
}

/// Rounds a percentage to 2 decimal places.
pub fn round_coverage(coverage: f64) -> f64 {
    (coverage * 100.0).round() / 100.0
}
