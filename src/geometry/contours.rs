//! External contour extraction from a binary foreground mask.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;
use tracing;

use crate::observability::STAGE_TARGET;

/// Ordered outer boundary of one connected foreground region.
pub type Contour = Vec<Point<i32>>;

/// Extracts the outer boundaries of the foreground regions in `mask`.
///
/// Regions lying inside a hole of another region are skipped, as are the hole
/// borders themselves. Each boundary is compressed so that straight horizontal,
/// vertical and diagonal runs keep only their end points. Contours come back in
/// raster discovery order (top-to-bottom, left-to-right by first pixel).
pub fn find_external_contours(mask: &GrayImage) -> Vec<Contour> {
    let start_time = std::time::Instant::now();

    let traced = find_contours::<i32>(mask);

    let external: Vec<Contour> = traced
        .iter()
        .enumerate()
        .filter(|(_, c)| c.border_type == BorderType::Outer)
        .filter(|(i, _)| !inside_hole(&traced, *i))
        .map(|(_, c)| compress_chain(&c.points))
        .collect();

    tracing::debug!(
        target: STAGE_TARGET,
        "Contour extraction completed in {}ms: traced={}, external={}",
        start_time.elapsed().as_millis(),
        traced.len(),
        external.len()
    );

    external
}

/// An outer border is nested when any ancestor border is a hole.
fn inside_hole(traced: &[imageproc::contours::Contour<i32>], index: usize) -> bool {
    let mut parent = traced[index].parent;
    while let Some(p) = parent {
        if traced[p].border_type == BorderType::Hole {
            return true;
        }
        parent = traced[p].parent;
    }
    false
}

/// Drops points that continue a straight run in the same step direction.
pub fn compress_chain(points: &[Point<i32>]) -> Contour {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |a: Point<i32>, b: Point<i32>| ((b.x - a.x).signum(), (b.y - a.y).signum());

    (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, points[i]) != step(points[i], next)
        })
        .map(|i| points[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn fill_rect(mask: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }

    #[test]
    fn test_compress_chain_keeps_corners() {
        let square: Vec<Point<i32>> = [
            (0, 0), (1, 0), (2, 0), (3, 0),
            (3, 1), (3, 2), (3, 3),
            (2, 3), (1, 3), (0, 3),
            (0, 2), (0, 1),
        ]
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();

        let compressed = compress_chain(&square);
        assert_eq!(
            compressed,
            vec![Point::new(0, 0), Point::new(3, 0), Point::new(3, 3), Point::new(0, 3)]
        );
    }

    #[test]
    fn test_empty_mask_has_no_contours() {
        let mask = GrayImage::new(20, 20);
        assert!(find_external_contours(&mask).is_empty());
    }

    #[test]
    fn test_separate_regions_each_produce_one_contour() {
        let mut mask = GrayImage::new(40, 20);
        fill_rect(&mut mask, 2, 2, 10, 10);
        fill_rect(&mut mask, 20, 5, 35, 15);

        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 2);
        // Raster discovery order: the region whose first row is higher comes first
        assert!(contours[0].iter().all(|p| p.x <= 10));
        assert!(contours[1].iter().all(|p| p.x >= 20));
    }

    #[test]
    fn test_region_inside_hole_is_not_external() {
        let mut mask = GrayImage::new(40, 40);
        // Ring with a hole, and an island inside the hole
        fill_rect(&mut mask, 2, 2, 37, 37);
        for y in 8..=31 {
            for x in 8..=31 {
                mask.put_pixel(x, y, Luma([0]));
            }
        }
        fill_rect(&mut mask, 15, 15, 24, 24);

        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert!(contours[0].iter().any(|p| p.x == 2 && p.y == 2));
    }

    #[test]
    fn test_rectangle_contour_compresses_to_corners() {
        let mut mask = GrayImage::new(30, 30);
        fill_rect(&mut mask, 5, 5, 20, 12);

        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 1);

        let mut corners = contours[0].clone();
        corners.sort_by_key(|p| (p.y, p.x));
        assert_eq!(
            corners,
            vec![Point::new(5, 5), Point::new(20, 5), Point::new(5, 12), Point::new(20, 12)]
        );
    }
}
