//! # Binary Mask Helpers
//!
//! Masks are `GrayImage`s holding only 0 or 255. All helpers expect masks of equal
//! dimensions.

use image::{GrayImage, Luma};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

use crate::geometry::polygon::polygon_area;

const ON: u8 = 255;

/// Number of set pixels in a mask.
pub fn count_nonzero(mask: &GrayImage) -> u64 {
    mask.pixels().filter(|p| p[0] != 0).count() as u64
}

/// Pixel-wise `a AND b`.
pub fn mask_and(a: &GrayImage, b: &GrayImage) -> GrayImage {
    combine(a, b, |x, y| x && y)
}

/// Pixel-wise `a AND NOT b`.
pub fn mask_and_not(a: &GrayImage, b: &GrayImage) -> GrayImage {
    combine(a, b, |x, y| x && !y)
}

fn combine(a: &GrayImage, b: &GrayImage, op: impl Fn(bool, bool) -> bool) -> GrayImage {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    GrayImage::from_fn(a.width(), a.height(), |x, y| {
        let set = op(a.get_pixel(x, y)[0] != 0, b.get_pixel(x, y)[0] != 0);
        Luma([if set { ON } else { 0 }])
    })
}

/// Rasterizes the solid interior (boundary included) of a polygon onto a blank
/// mask of the given size.
///
/// A polygon with zero enclosed area has no interior, so the mask stays empty.
pub fn filled_polygon_mask(width: u32, height: u32, polygon: &[Point<i32>]) -> GrayImage {
    let mut mask = GrayImage::new(width, height);

    if polygon.len() < 3 || polygon_area(polygon) == 0.0 {
        return mask;
    }

    // Closing point is implicit; a repeated first vertex is not accepted
    let open = match (polygon.first(), polygon.last()) {
        (Some(first), Some(last)) if first == last => &polygon[..polygon.len() - 1],
        _ => polygon,
    };
    if open.len() < 3 {
        return mask;
    }

    draw_polygon_mut(&mut mask, open, Luma([ON]));
    mask
}
