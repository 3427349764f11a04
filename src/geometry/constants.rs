use crate::geometry::shapes::Point;

// ─────────────────────────────────────────────────────────────────────────────
// Circular containers (plate, bowl)
// ─────────────────────────────────────────────────────────────────────────────

/// Canvas size of a circular container image.
pub const CIRCLE_CANVAS_WIDTH: f64 = 120.0;
pub const CIRCLE_CANVAS_HEIGHT: f64 = 120.0;

/// Center and radius of the drawn disc.
pub const CIRCLE_CENTER: Point = Point::new(60.0, 60.0);
pub const CIRCLE_RADIUS: f64 = 50.0;

/// Angle of the first sector edge: straight up, with y pointing down.
pub const SECTOR_START_DEGREES: f64 = -90.0;

// ─────────────────────────────────────────────────────────────────────────────
// Cup (glass)
// ─────────────────────────────────────────────────────────────────────────────

pub const CUP_CANVAS_WIDTH: f64 = 120.0;
pub const CUP_CANVAS_HEIGHT: f64 = 160.0;

pub const CUP_TOP_LEFT: Point = Point::new(30.0, 10.0);
pub const CUP_TOP_RIGHT: Point = Point::new(90.0, 10.0);
pub const CUP_BOTTOM_RIGHT: Point = Point::new(75.0, 140.0);
pub const CUP_BOTTOM_LEFT: Point = Point::new(45.0, 140.0);

/// Height available for liquid (bottom y minus top y).
pub const CUP_FILL_HEIGHT: f64 = CUP_BOTTOM_LEFT.y - CUP_TOP_LEFT.y;

// ─────────────────────────────────────────────────────────────────────────────
// Paint
// ─────────────────────────────────────────────────────────────────────────────

pub const BACKGROUND_COLOR: &str = "#e5e7eb";
pub const FILL_COLOR: &str = "#ef4444";
pub const OUTLINE_COLOR: &str = "#9ca3af";
pub const OUTLINE_WIDTH: f64 = 2.0;

/// Decimal places kept when printing coordinates.
pub const COORD_DECIMALS: i32 = 2;
