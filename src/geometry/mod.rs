//! # Geometry Module
//!
//! Shape extraction for the analyzer:
//! - `contours`: external boundary tracing on binary masks
//! - `polygon`: perimeter, area and polygon approximation

pub mod contours;
pub mod polygon;

pub use contours::{compress_chain, find_external_contours, Contour};
pub use polygon::{approximate_polygon, arc_length, polygon_area};
