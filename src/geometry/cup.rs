use crate::geometry::constants::*;
use crate::geometry::shapes::{FillDrawing, Point, Shape, clamp_fraction};

fn trapezoid() -> Vec<Point> {
    vec![CUP_TOP_LEFT, CUP_TOP_RIGHT, CUP_BOTTOM_RIGHT, CUP_BOTTOM_LEFT]
}

/// X where the horizontal line at `y` crosses the edge from `top` to `bottom`.
fn edge_x_at(top: Point, bottom: Point, y: f64) -> f64 {
    let t = (y - top.y) / (bottom.y - top.y);
    top.x + t * (bottom.x - top.x)
}

/// Y of the liquid surface at `fraction`; the cup fills from the bottom.
pub fn fill_line_y(fraction: f64) -> f64 {
    let fill_height = (clamp_fraction(fraction) * CUP_FILL_HEIGHT).clamp(0.0, CUP_FILL_HEIGHT);
    CUP_BOTTOM_LEFT.y - fill_height
}

/// Liquid polygon: the part of the trapezoid below the fill line.
///
/// Built from the exact edge intersections so the result needs no clipping.
pub fn liquid_fill(fraction: f64) -> Option<Shape> {
    let fraction = clamp_fraction(fraction);
    if fraction <= 0.0 {
        return None;
    }
    if fraction >= 1.0 {
        return Some(Shape::Polygon(trapezoid()));
    }

    let y = fill_line_y(fraction);
    let left_x = edge_x_at(CUP_TOP_LEFT, CUP_BOTTOM_LEFT, y);
    let right_x = edge_x_at(CUP_TOP_RIGHT, CUP_BOTTOM_RIGHT, y);

    Some(Shape::Polygon(vec![
        Point::new(left_x, y),
        Point::new(right_x, y),
        CUP_BOTTOM_RIGHT,
        CUP_BOTTOM_LEFT,
    ]))
}

/// Layers for a glass at `fraction`.
pub fn cup_fill(fraction: f64) -> FillDrawing {
    FillDrawing {
        width: CUP_CANVAS_WIDTH,
        height: CUP_CANVAS_HEIGHT,
        background: Shape::Polygon(trapezoid()),
        fill: liquid_fill(fraction),
        outline: Shape::Polygon(trapezoid()),
    }
}
