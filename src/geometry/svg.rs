use std::fmt::Write;

use crate::geometry::constants::*;
use crate::geometry::shapes::{FillDrawing, Point, Shape};

/// How a layer is painted.
#[derive(Debug, Clone, Copy)]
enum Paint {
    Fill(&'static str),
    Stroke(&'static str, f64),
}

impl Paint {
    fn attrs(self) -> String {
        match self {
            Paint::Fill(color) => format!(r#"fill="{}""#, color),
            Paint::Stroke(color, width) => format!(
                r#"fill="none" stroke="{}" stroke-width="{}""#,
                color,
                fmt_num(width)
            ),
        }
    }
}

/// Format a coordinate with at most `COORD_DECIMALS` places and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let factor = 10_f64.powi(COORD_DECIMALS);
    // Adding 0.0 turns -0 into 0.
    let rounded = (value * factor).round() / factor + 0.0;
    format!("{}", rounded)
}

fn fmt_point(p: Point) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// SVG path data for a pie sector.
pub fn sector_path(center: Point, start: Point, end: Point, radius: f64, large_arc: bool, clockwise: bool) -> String {
    format!(
        "M {} {} L {} {} A {} {} 0 {} {} {} {} Z",
        fmt_num(center.x),
        fmt_num(center.y),
        fmt_num(start.x),
        fmt_num(start.y),
        fmt_num(radius),
        fmt_num(radius),
        u8::from(large_arc),
        u8::from(clockwise),
        fmt_num(end.x),
        fmt_num(end.y),
    )
}

fn shape_element(shape: &Shape, paint: Paint) -> String {
    match shape {
        Shape::Circle { center, radius } => format!(
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(*radius),
            paint.attrs()
        ),
        Shape::Sector {
            center,
            start,
            end,
            arc,
        } => format!(
            r#"<path d="{}" {}/>"#,
            sector_path(*center, *start, *end, arc.radius, arc.large_arc, arc.clockwise),
            paint.attrs()
        ),
        Shape::Polygon(points) => {
            let points: Vec<String> = points.iter().map(|p| fmt_point(*p)).collect();
            format!(r#"<polygon points="{}" {}/>"#, points.join(" "), paint.attrs())
        }
    }
}

/// Serialize a drawing as a standalone SVG document.
///
/// Layers are emitted background first, then fill, then outline.
pub fn to_svg(drawing: &FillDrawing) -> String {
    let mut out = String::new();
    let w = fmt_num(drawing.width);
    let h = fmt_num(drawing.height);

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(out, "  {}", shape_element(&drawing.background, Paint::Fill(BACKGROUND_COLOR)));
    if let Some(fill) = &drawing.fill {
        let _ = writeln!(out, "  {}", shape_element(fill, Paint::Fill(FILL_COLOR)));
    }
    let _ = writeln!(
        out,
        "  {}",
        shape_element(&drawing.outline, Paint::Stroke(OUTLINE_COLOR, OUTLINE_WIDTH))
    );
    out.push_str("</svg>\n");
    out
}
