/// A point in image coordinates (x right, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on a circle at `degrees`, where 0 is east and 90 is south.
    pub fn on_circle(center: Point, radius: f64, degrees: f64) -> Self {
        let theta = degrees.to_radians();
        Self::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
    }
}

/// Arc parameters of a sector boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    pub radius: f64,
    /// Set when the arc spans more than 180 degrees.
    pub large_arc: bool,
    pub clockwise: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        center: Point,
        radius: f64,
    },
    /// Pie wedge: center, out to `start`, along the arc to `end`, back to center.
    Sector {
        center: Point,
        start: Point,
        end: Point,
        arc: ArcSweep,
    },
    Polygon(Vec<Point>),
}

/// Layers of one container image, drawn bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct FillDrawing {
    pub width: f64,
    pub height: f64,
    pub background: Shape,
    /// Absent when the container is empty.
    pub fill: Option<Shape>,
    pub outline: Shape,
}

/// Clamp a fill fraction into `[0, 1]`. NaN counts as empty.
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}
