use crate::geometry::constants::*;
use crate::geometry::shapes::{ArcSweep, FillDrawing, Point, Shape, clamp_fraction};

/// The whole disc.
fn disc() -> Shape {
    Shape::Circle {
        center: CIRCLE_CENTER,
        radius: CIRCLE_RADIUS,
    }
}

/// Pie sector starting at the top and sweeping clockwise by `fraction` of a turn.
///
/// Returns `None` for an empty container and the full disc when full, so a
/// complete turn never produces a zero-length arc.
pub fn sector_fill(fraction: f64) -> Option<Shape> {
    let fraction = clamp_fraction(fraction);
    if fraction <= 0.0 {
        return None;
    }
    if fraction >= 1.0 {
        return Some(disc());
    }

    let sweep = 360.0 * fraction;
    let start = Point::on_circle(CIRCLE_CENTER, CIRCLE_RADIUS, SECTOR_START_DEGREES);
    let end = Point::on_circle(CIRCLE_CENTER, CIRCLE_RADIUS, SECTOR_START_DEGREES + sweep);

    Some(Shape::Sector {
        center: CIRCLE_CENTER,
        start,
        end,
        arc: ArcSweep {
            radius: CIRCLE_RADIUS,
            large_arc: sweep > 180.0,
            clockwise: true,
        },
    })
}

/// Layers for a plate or bowl at `fraction`.
pub fn circle_fill(fraction: f64) -> FillDrawing {
    FillDrawing {
        width: CIRCLE_CANVAS_WIDTH,
        height: CIRCLE_CANVAS_HEIGHT,
        background: disc(),
        fill: sector_fill(fraction),
        outline: disc(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc_of(shape: Option<Shape>) -> ArcSweep {
        match shape {
            Some(Shape::Sector { arc, .. }) => arc,
            other => panic!("expected a sector, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_has_no_fill() {
        assert_eq!(sector_fill(0.0), None);
        assert_eq!(sector_fill(-1.0), None);
    }

    #[test]
    fn test_full_is_disc() {
        assert_eq!(sector_fill(1.0), Some(disc()));
        assert_eq!(sector_fill(3.0), Some(disc()));
    }

    #[test]
    fn test_large_arc_flag() {
        assert!(!arc_of(sector_fill(0.25)).large_arc);
        assert!(!arc_of(sector_fill(0.5)).large_arc);
        assert!(arc_of(sector_fill(0.75)).large_arc);
    }

    #[test]
    fn test_background_and_outline_always_present() {
        let drawing = circle_fill(0.0);
        assert_eq!(drawing.background, disc());
        assert_eq!(drawing.outline, disc());
        assert_eq!(drawing.fill, None);
    }
}
