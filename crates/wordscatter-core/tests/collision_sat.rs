use wordscatter_core::collision::{in_bounds, in_bounds_with_margins, overlaps};
use wordscatter_core::geometry::calculate_corners;
use wordscatter_core::model::{Point, Polygon};

fn square(cx: f64, cy: f64, side: f64) -> Polygon {
    calculate_corners(Point::new(cx, cy), side, side, 0.0)
}

#[test]
fn identical_squares_overlap() {
    let a = square(50.0, 50.0, 10.0);
    assert!(overlaps(&a, &a, 0.0));
}

#[test]
fn touching_edges_count_as_collision() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(10.0, 0.0, 10.0);
    assert!(overlaps(&a, &b, 0.0));
}

#[test]
fn strict_gap_separates() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(11.0, 0.0, 10.0);
    assert!(!overlaps(&a, &b, 0.0));
}

#[test]
fn margin_grows_both_shapes() {
    let a = square(0.0, 0.0, 10.0);
    // gap of 1 is closed by a margin of 1 on each side
    let b = square(11.0, 0.0, 10.0);
    assert!(overlaps(&a, &b, 1.0));
    // gap of exactly 2 * margin: grown shadows touch
    let c = square(12.0, 0.0, 10.0);
    assert!(overlaps(&a, &c, 1.0));
    let d = square(13.0, 0.0, 10.0);
    assert!(!overlaps(&a, &d, 1.0));
}

#[test]
fn diagonal_axis_separates_rotated_square() {
    let a = square(0.0, 0.0, 10.0);
    let b = calculate_corners(Point::new(11.0, 11.0), 10.0, 10.0, 45.0);
    // bounding boxes intersect, shapes do not
    assert!(!overlaps(&a, &b, 0.0));
    assert!(!overlaps(&b, &a, 0.0));
}

#[test]
fn overlap_is_symmetric() {
    let a = calculate_corners(Point::new(0.0, 0.0), 30.0, 8.0, 90.0);
    let b = calculate_corners(Point::new(6.0, 0.0), 30.0, 8.0, 0.0);
    assert_eq!(overlaps(&a, &b, 0.0), overlaps(&b, &a, 0.0));
    assert!(overlaps(&a, &b, 0.0));
}

#[test]
fn in_bounds_is_half_open() {
    // corners at x = 20..=780 on an 800 wide canvas with margin 20
    let poly = calculate_corners(Point::new(400.0, 300.0), 760.0, 100.0, 0.0);
    assert!(!in_bounds(&poly, 800, 600, 20.0));
    let poly = calculate_corners(Point::new(400.0, 300.0), 758.0, 100.0, 0.0);
    assert!(in_bounds(&poly, 800, 600, 20.0));
}

#[test]
fn in_bounds_rejects_corner_below_margin() {
    let poly = square(25.0, 300.0, 12.0);
    assert!(!in_bounds(&poly, 800, 600, 20.0));
    assert!(in_bounds(&poly, 800, 600, 0.0));
}

#[test]
fn per_axis_margins() {
    let poly = calculate_corners(Point::new(400.0, 300.0), 790.0, 100.0, 0.0);
    assert!(!in_bounds(&poly, 800, 600, 20.0));
    assert!(in_bounds_with_margins(&poly, 800, 600, 0.0, 20.0));
    assert!(!in_bounds_with_margins(&poly, 800, 600, 0.0, 260.0));
}
