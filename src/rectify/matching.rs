use anyhow::{ensure, Result};

/// Reorder destination corners so each lines up with the source corner it
/// sits closest to.
///
/// The detector does not guarantee a canonical winding order, so the four
/// canonical box corners must be permuted to match whatever order the
/// approximated polygon came out in. For every source corner the nearest
/// destination corner is chosen independently, judged on squared Euclidean
/// distance. If two source corners pick the same destination the assignment
/// is ambiguous and the destination set is returned untouched - applying a
/// half-correct permutation would be worse than applying none.
///
/// Errors if either slice does not contain exactly four points.
// TODO: resolve ambiguous assignments with an optimal bipartite matching
// (Hungarian) instead of bailing out
pub fn match_corners(
    src_points: &[(f32, f32)],
    dst_points: &[(f32, f32)],
) -> Result<[(f32, f32); 4]> {
    ensure!(
        src_points.len() == 4 && dst_points.len() == 4,
        "corner matching requires exactly 4 points per set (got {} src, {} dst)",
        src_points.len(),
        dst_points.len()
    );

    let mut order = [0usize; 4];
    for (i, src) in src_points.iter().enumerate() {
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (j, dst) in dst_points.iter().enumerate() {
            let dx = src.0 - dst.0;
            let dy = src.1 - dst.1;
            let dist = dx * dx + dy * dy;
            if dist < best_dist {
                best_dist = dist;
                best = j;
            }
        }
        order[i] = best;
    }

    let mut seen = [false; 4];
    for &j in &order {
        if seen[j] {
            return Ok([dst_points[0], dst_points[1], dst_points[2], dst_points[3]]);
        }
        seen[j] = true;
    }

    Ok(order.map(|j| dst_points[j]))
}
