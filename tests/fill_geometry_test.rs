use assert_float_eq::assert_float_absolute_eq;

use calorie_tracker_rs::geometry::constants::{
    CUP_BOTTOM_LEFT, CUP_BOTTOM_RIGHT, CUP_TOP_LEFT, CUP_TOP_RIGHT,
};
use calorie_tracker_rs::geometry::{
    Point, Shape, circle_fill, cup_fill, fill_line_y, render_container_svg, render_fill,
};
use calorie_tracker_rs::models::{ContainerShape, FillContainer, FillLevel};

fn sector_parts(shape: &Shape) -> (Point, Point, bool) {
    match shape {
        Shape::Sector { start, end, arc, .. } => (*start, *end, arc.large_arc),
        other => panic!("expected a sector, got {:?}", other),
    }
}

fn polygon_points(shape: &Shape) -> &[Point] {
    match shape {
        Shape::Polygon(points) => points,
        other => panic!("expected a polygon, got {:?}", other),
    }
}

#[test]
fn test_circle_empty_has_no_fill() {
    let drawing = circle_fill(FillLevel::Empty.fraction());
    assert!(drawing.fill.is_none());
}

#[test]
fn test_circle_full_is_whole_disc() {
    let drawing = circle_fill(FillLevel::Full.fraction());
    match drawing.fill {
        Some(Shape::Circle { center, radius }) => {
            assert_eq!(center, Point::new(60.0, 60.0));
            assert_eq!(radius, 50.0);
        }
        other => panic!("expected the full disc, got {:?}", other),
    }
}

#[test]
fn test_circle_half_spans_180_without_large_arc() {
    let drawing = circle_fill(0.5);
    let (start, end, large_arc) = sector_parts(drawing.fill.as_ref().unwrap());

    // Starts at the top, ends at the bottom.
    assert_float_absolute_eq!(start.x, 60.0, 1e-9);
    assert_float_absolute_eq!(start.y, 10.0, 1e-9);
    assert_float_absolute_eq!(end.x, 60.0, 1e-9);
    assert_float_absolute_eq!(end.y, 110.0, 1e-9);
    assert!(!large_arc);
}

#[test]
fn test_circle_three_quarters_uses_large_arc() {
    let drawing = circle_fill(0.75);
    let (_, end, large_arc) = sector_parts(drawing.fill.as_ref().unwrap());

    // 270 degrees clockwise from the top lands on the west edge.
    assert_float_absolute_eq!(end.x, 10.0, 1e-9);
    assert_float_absolute_eq!(end.y, 60.0, 1e-9);
    assert!(large_arc);
}

#[test]
fn test_cup_empty_has_no_fill() {
    assert!(cup_fill(0.0).fill.is_none());
}

#[test]
fn test_cup_full_is_whole_trapezoid() {
    let drawing = cup_fill(1.0);
    let points = polygon_points(drawing.fill.as_ref().unwrap());
    assert_eq!(
        points,
        &[CUP_TOP_LEFT, CUP_TOP_RIGHT, CUP_BOTTOM_RIGHT, CUP_BOTTOM_LEFT]
    );
}

#[test]
fn test_cup_half_uses_edge_midpoints() {
    assert_float_absolute_eq!(fill_line_y(0.5), 75.0, 1e-12);

    let drawing = cup_fill(0.5);
    let points = polygon_points(drawing.fill.as_ref().unwrap());
    assert_eq!(points.len(), 4);

    assert_float_absolute_eq!(points[0].x, (30.0 + 45.0) / 2.0, 1e-9);
    assert_float_absolute_eq!(points[0].y, 75.0, 1e-9);
    assert_float_absolute_eq!(points[1].x, (90.0 + 75.0) / 2.0, 1e-9);
    assert_float_absolute_eq!(points[1].y, 75.0, 1e-9);
    assert_eq!(points[2], CUP_BOTTOM_RIGHT);
    assert_eq!(points[3], CUP_BOTTOM_LEFT);
}

#[test]
fn test_out_of_range_fraction_is_clamped() {
    assert_eq!(circle_fill(-0.3), circle_fill(0.0));
    assert_eq!(circle_fill(1.4), circle_fill(1.0));
    assert_eq!(cup_fill(7.0), cup_fill(1.0));
    assert_eq!(cup_fill(f64::NAN), cup_fill(0.0));
}

#[test]
fn test_render_fill_dispatches_on_shape() {
    assert_eq!(render_fill(ContainerShape::Circle, 0.25), circle_fill(0.25));
    assert_eq!(render_fill(ContainerShape::Cup, 0.25), cup_fill(0.25));
}

#[test]
fn test_rendering_is_deterministic() {
    for container in FillContainer::ALL {
        for level in FillLevel::ALL {
            assert_eq!(
                render_container_svg(container, level),
                render_container_svg(container, level)
            );
        }
    }
}

#[test]
fn test_plate_and_bowl_share_circle_geometry() {
    assert_eq!(
        render_container_svg(FillContainer::Plate, FillLevel::ThreeQuarters),
        render_container_svg(FillContainer::Bowl, FillLevel::ThreeQuarters)
    );
}
