use image::DynamicImage;
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;

use crate::detection::preprocessing;
use crate::models::Quad;

/// Minimum enclosed area, in square pixels, for a contour to be kept as a
/// document candidate.
pub const DEFAULT_AREA_THRESHOLD: f64 = 50_000.0;

/// Polygon simplification tolerance, as a fraction of the contour perimeter.
const APPROX_TOLERANCE: f64 = 0.01;

/// Find quadrilateral contours in an image.
///
/// Binarizes with a global Otsu threshold, traces the external boundaries of
/// the foreground components, and keeps each boundary whose enclosed area
/// exceeds `area_threshold` and whose Douglas-Peucker approximation (at 1% of
/// the perimeter) has exactly four vertices. Quads are returned in the order
/// the tracer discovered them.
pub fn find_quads(img: &DynamicImage, area_threshold: f64) -> Vec<Quad> {
    let gray = preprocessing::to_grayscale(img);
    if preprocessing::is_uniform(&gray) {
        return Vec::new();
    }
    let binary = preprocessing::binarize(&gray);

    let contours: Vec<Contour<i32>> = find_contours(&binary);

    let mut quads = Vec::new();
    for contour in &contours {
        // Outer top-level borders only; holes and nested islands are not
        // document candidates.
        if contour.border_type != BorderType::Outer || contour.parent.is_some() {
            continue;
        }
        if polygon_area(&contour.points) <= area_threshold {
            continue;
        }
        let perimeter = arc_length(&contour.points, true);
        let approx = approximate_polygon_dp(&contour.points, APPROX_TOLERANCE * perimeter, true);
        if let [a, b, c, d] = approx[..] {
            quads.push(Quad::new([a, b, c, d]));
        }
    }
    quads
}

/// Unsigned shoelace area of a closed polygon.
pub fn polygon_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut doubled: i64 = 0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        doubled += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
    }
    doubled.unsigned_abs() as f64 / 2.0
}
