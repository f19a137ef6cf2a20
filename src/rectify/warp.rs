use image::{DynamicImage, Rgb, RgbImage};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};

use crate::models::Quad;
use crate::rectify::matching::match_corners;

/// Rectify each detected quadrilateral into a flat, axis-aligned image.
///
/// Outputs are returned in the same order as `quads`, one image per quad,
/// each sized to the quad's bounding box. Aspect ratio of the source region
/// is not preserved.
// TODO: derive output dimensions from the quad's edge lengths so the
// rectified image keeps the source aspect ratio
pub fn rectify(img: &DynamicImage, quads: &[Quad]) -> Vec<RgbImage> {
    quads.iter().map(|quad| rectify_quad(img, quad)).collect()
}

/// Crop a quad's bounding box and warp the quad onto the full crop
/// rectangle through an exact four-point projective transform.
fn rectify_quad(img: &DynamicImage, quad: &Quad) -> RgbImage {
    let bbox = quad.bounding_box();
    let (w, h) = (bbox.width(), bbox.height());
    let mut output = RgbImage::new(w, h);
    if w == 0 || h == 0 {
        return output;
    }

    let crop = img
        .crop_imm(bbox.min_x as u32, bbox.min_y as u32, w, h)
        .to_rgb8();

    let src_points = quad.corner_offsets();
    let dst_points = [
        (0.0, 0.0),
        (0.0, h as f32),
        (w as f32, h as f32),
        (w as f32, 0.0),
    ];
    // Arity is fixed at four here, so matching can only fail by returning
    // the canonical corner order.
    let dst_points = match_corners(&src_points, &dst_points).unwrap_or(dst_points);

    match Projection::from_control_points(src_points, dst_points) {
        Some(projection) => {
            warp_into(
                &crop,
                &projection,
                Interpolation::Bilinear,
                Rgb([0, 0, 0]),
                &mut output,
            );
            output
        }
        // Collinear corners admit no exact projective solve; emit the
        // blank crop-sized buffer instead of aborting the batch.
        None => output,
    }
}
