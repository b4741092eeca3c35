use wordscatter_core::config::Rotation;
use wordscatter_core::geometry::{calculate_corners, item_polygon, polygon_axes, project};
use wordscatter_core::model::{Point, Polygon};

const EPS: f64 = 1e-9;

fn extents(poly: &Polygon) -> (f64, f64, f64, f64) {
    let min_x = poly.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = poly.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = poly.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = poly.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    (min_x, max_x, min_y, max_y)
}

#[test]
fn zero_angle_corners_are_exact() {
    let c = calculate_corners(Point::new(100.0, 50.0), 40.0, 20.0, 0.0);
    assert_eq!(
        c,
        [
            Point::new(80.0, 40.0),
            Point::new(120.0, 40.0),
            Point::new(120.0, 60.0),
            Point::new(80.0, 60.0),
        ]
    );
}

#[test]
fn half_turn_reflects_through_center() {
    let center = Point::new(200.0, 150.0);
    let flat = calculate_corners(center, 60.0, 30.0, 0.0);
    let turned = calculate_corners(center, 60.0, 30.0, 180.0);
    for (a, b) in flat.iter().zip(turned.iter()) {
        assert!((b.x - (2.0 * center.x - a.x)).abs() < EPS);
        assert!((b.y - (2.0 * center.y - a.y)).abs() < EPS);
    }
}

#[test]
fn quarter_turn_polygon_matches_given_extents() {
    // width/height are the extents after rotation
    for rot in [Rotation::Deg90, Rotation::Deg270] {
        let poly = item_polygon(300.0, 200.0, 40, 120, rot);
        let (min_x, max_x, min_y, max_y) = extents(&poly);
        assert!((max_x - min_x - 40.0).abs() < EPS, "{rot:?}");
        assert!((max_y - min_y - 120.0).abs() < EPS, "{rot:?}");
        assert!((min_x - 280.0).abs() < EPS);
        assert!((min_y - 140.0).abs() < EPS);
    }
}

#[test]
fn unrotated_and_half_turn_polygons_share_extents() {
    let a = extents(&item_polygon(50.0, 50.0, 30, 10, Rotation::Deg0));
    let b = extents(&item_polygon(50.0, 50.0, 30, 10, Rotation::Deg180));
    assert!((a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS);
    assert!((a.2 - b.2).abs() < EPS && (a.3 - b.3).abs() < EPS);
}

#[test]
fn axes_are_unit_normals() {
    let poly = calculate_corners(Point::new(0.0, 0.0), 10.0, 4.0, 30.0);
    let axes = polygon_axes(&poly);
    assert_eq!(axes.len(), 4);
    for a in &axes {
        assert!((a.x.hypot(a.y) - 1.0).abs() < EPS);
    }
}

#[test]
fn zero_length_edges_yield_no_axis() {
    // zero-width rectangle collapses two edges
    let flat = calculate_corners(Point::new(5.0, 5.0), 0.0, 10.0, 0.0);
    assert_eq!(polygon_axes(&flat).len(), 2);

    let point = calculate_corners(Point::new(5.0, 5.0), 0.0, 0.0, 0.0);
    assert!(polygon_axes(&point).is_empty());
}

#[test]
fn projection_onto_x_axis_is_horizontal_extent() {
    let poly = calculate_corners(Point::new(10.0, 20.0), 8.0, 6.0, 0.0);
    assert_eq!(project(&poly, Point::new(1.0, 0.0)), (6.0, 14.0));
    assert_eq!(project(&poly, Point::new(0.0, 1.0)), (17.0, 23.0));
}

#[test]
fn quarter_turn_follows_glyph_direction() {
    // label 40 wide, 20 tall before turning; extents after turning are 20 x 40
    let ccw = item_polygon(100.0, 100.0, 20, 40, Rotation::Deg90);
    // top-left of the label ends up bottom-left on screen
    assert!((ccw[0].x - 90.0).abs() < EPS);
    assert!((ccw[0].y - 120.0).abs() < EPS);
    // its top-right ends up top-left
    assert!((ccw[1].x - 90.0).abs() < EPS);
    assert!((ccw[1].y - 80.0).abs() < EPS);

    let cw = item_polygon(100.0, 100.0, 20, 40, Rotation::Deg270);
    assert!((cw[0].x - 110.0).abs() < EPS);
    assert!((cw[0].y - 80.0).abs() < EPS);
}
