pub mod circle;
pub mod constants;
pub mod cup;
pub mod shapes;
pub mod svg;

pub use circle::{circle_fill, sector_fill};
pub use cup::{cup_fill, fill_line_y, liquid_fill};
pub use shapes::{ArcSweep, FillDrawing, Point, Shape, clamp_fraction};
pub use svg::to_svg;

use crate::models::{ContainerShape, FillContainer, FillLevel};

/// Layers for a container shape at `fraction`.
pub fn render_fill(shape: ContainerShape, fraction: f64) -> FillDrawing {
    match shape {
        ContainerShape::Circle => circle_fill(fraction),
        ContainerShape::Cup => cup_fill(fraction),
    }
}

/// SVG document for a container at a fill level.
pub fn render_container_svg(container: FillContainer, level: FillLevel) -> String {
    to_svg(&render_fill(container.shape(), level.fraction()))
}
