//! # Visualization Module
//!
//! Composites the analysis result: seasoned pixels inside the triangle in red,
//! unseasoned ones in blue, everything else black, with the triangle outlined in
//! green on top.

use image::{GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use imageproc::point::Point;

pub const SEASONED_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const UNSEASONED_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Paints the seasoned and unseasoned masks onto a new black canvas and outlines
/// the polygon.
pub fn render_visualization(
    seasoned: &GrayImage,
    unseasoned: &GrayImage,
    outline: &[Point<i32>],
    thickness: u32,
) -> RgbImage {
    let mut output = RgbImage::from_pixel(seasoned.width(), seasoned.height(), BACKGROUND_COLOR);

    for (x, y, pixel) in output.enumerate_pixels_mut() {
        if seasoned.get_pixel(x, y)[0] != 0 {
            *pixel = SEASONED_COLOR;
        } else if unseasoned.get_pixel(x, y)[0] != 0 {
            *pixel = UNSEASONED_COLOR;
        }
    }

    draw_closed_polyline(&mut output, outline, OUTLINE_COLOR, thickness);
    output
}

/// Draws a closed polyline `thickness` pixels wide, overwriting what is below it.
pub fn draw_closed_polyline(
    canvas: &mut RgbImage,
    points: &[Point<i32>],
    color: Rgb<u8>,
    thickness: u32,
) {
    if points.is_empty() {
        return;
    }

    let first_offset = -((thickness / 2) as i32);
    let offsets: Vec<i32> = (0..thickness.max(1) as i32).map(|d| first_offset + d).collect();

    for (i, start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        for &dy in &offsets {
            for &dx in &offsets {
                draw_line_segment_mut(
                    canvas,
                    ((start.x + dx) as f32, (start.y + dy) as f32),
                    ((end.x + dx) as f32, (end.y + dy) as f32),
                    color,
                );
            }
        }
    }
}
