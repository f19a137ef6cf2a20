use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};
use imageproc::point::Point;

/// Background intensity for synthetic images.
pub const BACKGROUND: u8 = 20;

/// Foreground intensity for synthetic shapes.
pub const FOREGROUND: u8 = 230;

/// A uniform single-intensity image.
pub fn blank_image(width: u32, height: u32, intensity: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([intensity])))
}

/// Dark canvas with one bright axis-aligned rectangle filling the pixel
/// block `[x0, x0+rect_w) x [y0, y0+rect_h)`. The traced boundary of such a
/// block encloses exactly `(rect_w-1) * (rect_h-1)` square pixels.
pub fn filled_rect_image(
    width: u32,
    height: u32,
    x0: u32,
    y0: u32,
    rect_w: u32,
    rect_h: u32,
) -> DynamicImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([BACKGROUND]));
    for y in y0..y0 + rect_h {
        for x in x0..x0 + rect_w {
            img.put_pixel(x, y, Luma([FOREGROUND]));
        }
    }
    DynamicImage::ImageLuma8(img)
}

/// Dark canvas with one filled bright polygon.
pub fn polygon_image(width: u32, height: u32, corners: &[(i32, i32)]) -> DynamicImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([BACKGROUND]));
    let poly: Vec<Point<i32>> = corners.iter().map(|&(x, y)| Point::new(x, y)).collect();
    draw_polygon_mut(&mut img, &poly, Luma([FOREGROUND]));
    DynamicImage::ImageLuma8(img)
}

/// A flat "card" split into four bright quadrants, distinct enough that a
/// flipped or rotated rectification is detectable.
pub fn quadrant_card(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let value = match (x < width / 2, y < height / 2) {
            (true, true) => 180,
            (false, true) => 205,
            (false, false) => 230,
            (true, false) => 255,
        };
        Rgb([value, value, value])
    })
}

/// Embed `card` into a dark canvas at the given quadrilateral via a
/// projective warp. Corners are `[top-left, top-right, bottom-right,
/// bottom-left]` of where the card's respective corners should land.
pub fn embed_card(
    card: &RgbImage,
    canvas_w: u32,
    canvas_h: u32,
    corners: [(f32, f32); 4],
) -> DynamicImage {
    let card_corners = [
        (0.0, 0.0),
        (card.width() as f32, 0.0),
        (card.width() as f32, card.height() as f32),
        (0.0, card.height() as f32),
    ];
    let projection = Projection::from_control_points(card_corners, corners)
        .expect("embedding quad must admit a projective solve");

    let mut canvas = RgbImage::new(canvas_w, canvas_h);
    warp_into(
        card,
        &projection,
        Interpolation::Bilinear,
        Rgb([BACKGROUND; 3]),
        &mut canvas,
    );
    DynamicImage::ImageRgb8(canvas)
}

/// Mean absolute grayscale difference between two equally sized images,
/// ignoring a border of `margin` pixels on every side.
pub fn mean_abs_diff(a: &RgbImage, b: &RgbImage, margin: u32) -> f64 {
    assert_eq!(a.dimensions(), b.dimensions());
    let (w, h) = a.dimensions();
    assert!(w > 2 * margin && h > 2 * margin);

    let mut sum = 0.0f64;
    let mut count = 0u64;
    for y in margin..h - margin {
        for x in margin..w - margin {
            let pa = a.get_pixel(x, y);
            let pb = b.get_pixel(x, y);
            let la = (pa[0] as f64 + pa[1] as f64 + pa[2] as f64) / 3.0;
            let lb = (pb[0] as f64 + pb[1] as f64 + pb[2] as f64) / 3.0;
            sum += (la - lb).abs();
            count += 1;
        }
    }
    sum / count as f64
}
