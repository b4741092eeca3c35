//! Separating-axis overlap test and canvas containment.

use crate::geometry::{polygon_axes, project};
use crate::model::Polygon;

/// True if `a` and `b`, each grown outward by `margin`, overlap.
///
/// Every edge normal of both polygons is tested; the first axis on which the
/// grown shadows are strictly apart proves separation. Shadows that only touch
/// count as overlapping.
pub fn overlaps(a: &Polygon, b: &Polygon, margin: f64) -> bool {
    let axes = polygon_axes(a).into_iter().chain(polygon_axes(b));
    for axis in axes {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        let (min_a, max_a) = (min_a - margin, max_a + margin);
        let (min_b, max_b) = (min_b - margin, max_b + margin);
        if max_a < min_b || max_b < min_a {
            return false;
        }
    }
    true
}

/// True if every corner lies in `[margin, width - margin) x [margin, height - margin)`.
pub fn in_bounds(polygon: &Polygon, width: u32, height: u32, margin: f64) -> bool {
    in_bounds_with_margins(polygon, width, height, margin, margin)
}

/// Like [`in_bounds`] with separate horizontal and vertical margins.
pub fn in_bounds_with_margins(
    polygon: &Polygon,
    width: u32,
    height: u32,
    margin_x: f64,
    margin_y: f64,
) -> bool {
    let max_x = f64::from(width) - margin_x;
    let max_y = f64::from(height) - margin_y;
    polygon
        .iter()
        .all(|p| p.x >= margin_x && p.x < max_x && p.y >= margin_y && p.y < max_y)
}
