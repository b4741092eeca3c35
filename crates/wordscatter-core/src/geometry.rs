//! Rotated-rectangle geometry: corners, edge normals and 1D projections.

use crate::config::Rotation;
use crate::model::{Point, Polygon};

// top-left, top-right, bottom-right, bottom-left
const CORNER_SIGNS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// Corners of a `width` x `height` rectangle centered at `center`, rotated about
/// the center by `angle` degrees. In canvas coordinates (y down) a positive angle
/// turns clockwise on screen.
///
/// `angle == 0` skips the trigonometry so unrotated corners are exact.
pub fn calculate_corners(center: Point, width: f64, height: f64, angle: f64) -> Polygon {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let offsets = CORNER_SIGNS.map(|(sx, sy)| (sx * hw, sy * hh));

    if angle == 0.0 {
        return offsets.map(|(dx, dy)| Point::new(center.x + dx, center.y + dy));
    }

    let (sin_a, cos_a) = angle.to_radians().sin_cos();
    offsets.map(|(dx, dy)| {
        Point::new(
            center.x + dx * cos_a - dy * sin_a,
            center.y + dx * sin_a + dy * cos_a,
        )
    })
}

/// Collision polygon of an item whose `width`/`height` are already the extents
/// after rotation. Quarter turns rotate the un-rotated (swapped) rectangle, so
/// the polygon covers exactly the rotated extents.
///
/// A [`Rotation`] turns counter-clockwise on screen, like the rendered glyph, so
/// corner `0` is always the top-left of the unrotated label.
pub fn item_polygon(cx: f64, cy: f64, width: u32, height: u32, rotation: Rotation) -> Polygon {
    let (lw, lh) = if rotation.is_quarter_turn() {
        (height, width)
    } else {
        (width, height)
    };
    calculate_corners(
        Point::new(cx, cy),
        f64::from(lw),
        f64::from(lh),
        -f64::from(rotation.degrees()),
    )
}

/// Unit normals of every edge. Zero-length edges have no normal and are left out.
pub fn polygon_axes(polygon: &Polygon) -> Vec<Point> {
    let mut axes = Vec::with_capacity(polygon.len());
    for i in 0..polygon.len() {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % polygon.len()];
        let (ex, ey) = (p2.x - p1.x, p2.y - p1.y);
        let (nx, ny) = (-ey, ex);
        let length = nx.hypot(ny);
        if length > 0.0 {
            axes.push(Point::new(nx / length, ny / length));
        }
    }
    axes
}

/// Shadow of `polygon` on `axis` as `(min, max)` of the corner dot products.
pub fn project(polygon: &Polygon, axis: Point) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in polygon {
        let dot = p.x * axis.x + p.y * axis.y;
        lo = lo.min(dot);
        hi = hi.max(dot);
    }
    (lo, hi)
}
