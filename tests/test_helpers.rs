//! # Test Helper Library
//!
//! Builders for synthetic test images: flat-colored shapes on a white plate.

#![allow(dead_code)]

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const ORANGE: Rgb<u8> = Rgb([230, 120, 30]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Vertices of the triangle used by most scenarios on a 200x200 plate.
pub const CHIP: [(i32, i32); 3] = [(100, 20), (180, 170), (20, 170)];

/// Centroid of `CHIP`, well inside the triangle.
pub const CHIP_CENTER: (u32, u32) = (100, 120);

/// A white plate of the given size
pub fn plate(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, WHITE)
}

/// Draw a solid triangle
pub fn draw_triangle(image: &mut RgbImage, vertices: [(i32, i32); 3], color: Rgb<u8>) {
    let points: Vec<Point<i32>> = vertices.iter().map(|&(x, y)| Point::new(x, y)).collect();
    draw_polygon_mut(image, &points, color);
}

/// Fill an axis-aligned rectangle (inclusive bounds)
pub fn draw_rect(image: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            image.put_pixel(x, y, color);
        }
    }
}

/// Repaint every non-white pixel at or right of column `split` with `color`
pub fn recolor_from_column(image: &mut RgbImage, split: u32, color: Rgb<u8>) {
    for (x, _, pixel) in image.enumerate_pixels_mut() {
        if x >= split && *pixel != WHITE {
            *pixel = color;
        }
    }
}

/// Copy `tile` into `image` with its top-left corner at (`x`, `y`)
pub fn stamp(image: &mut RgbImage, tile: &RgbImage, x: i64, y: i64) {
    image::imageops::replace(image, tile, x, y);
}

/// Number of pixels with exactly the given color
pub fn count_color(image: &RgbImage, color: Rgb<u8>) -> usize {
    image.pixels().filter(|p| **p == color).count()
}

/// The standard scenario: one solid triangle of `color` on a 200x200 plate
pub fn chip_image(color: Rgb<u8>) -> RgbImage {
    let mut image = plate(200, 200);
    draw_triangle(&mut image, CHIP, color);
    image
}

/// The standard triangle, red left of `split` and blue from `split` onwards
pub fn split_chip_image(split: u32) -> RgbImage {
    let mut image = chip_image(RED);
    recolor_from_column(&mut image, split, BLUE);
    image
}
