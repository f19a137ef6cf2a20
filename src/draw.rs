use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::models::Quad;

/// Highlight color for detected quadrilateral outlines.
const OUTLINE_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Outline stroke width in pixels.
const OUTLINE_WIDTH: i32 = 5;

/// Render detected quadrilateral outlines onto a copy of the source image.
pub fn render_quads(img: &DynamicImage, quads: &[Quad]) -> RgbImage {
    let mut canvas = img.to_rgb8();
    for quad in quads {
        for i in 0..4 {
            let a = quad.corners[i];
            let b = quad.corners[(i + 1) % 4];
            draw_thick_segment(
                &mut canvas,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
            );
        }
    }
    canvas
}

/// `draw_line_segment_mut` has no stroke width, so lay down a bundle of
/// one-pixel lines offset along the segment's normal.
fn draw_thick_segment(canvas: &mut RgbImage, start: (f32, f32), end: (f32, f32)) {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        draw_line_segment_mut(canvas, start, end, OUTLINE_COLOR);
        return;
    }
    let (nx, ny) = (-dy / len, dx / len);
    let half = OUTLINE_WIDTH / 2;
    for k in -half..=half {
        let (ox, oy) = (nx * k as f32, ny * k as f32);
        draw_line_segment_mut(
            canvas,
            (start.0 + ox, start.1 + oy),
            (end.0 + ox, end.1 + oy),
            OUTLINE_COLOR,
        );
    }
}
