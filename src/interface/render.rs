use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::geometry::render_container_svg;
use crate::models::{Container, FillContainer, FillLevel};
use crate::session::{Outcome, Session};

/// Characters per fill step in the terminal gauge.
const GAUGE_STEP_WIDTH: usize = 5;

/// Text gauge such as `[#####---------------]`.
pub fn fill_gauge(level: FillLevel) -> String {
    let filled = level.index() as usize * GAUGE_STEP_WIDTH;
    let total = 4 * GAUGE_STEP_WIDTH;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(total - filled))
}

/// Print the fill state of one container.
pub fn display_container(container: FillContainer, level: FillLevel) {
    println!("{:<6} {} {:>4}", container.label(), fill_gauge(level), level.to_string());
}

/// Print the current selection.
pub fn display_session(session: &Session) {
    println!();
    let food = session.food_name().trim();
    println!("Food: {}", if food.is_empty() { "(none)" } else { food });
    println!("Portion: {}", session.container());

    match session.container() {
        Container::Filled(c) => display_container(c, session.fills().current_level(c)),
        Container::PieceOrSlice => println!("Pieces / slices: {}", session.pieces()),
    }
    println!();
}

pub fn display_outcome(outcome: &Outcome) {
    println!("{}", outcome);
}

/// Write the SVG for a container into `dir` as `<container>.svg`.
pub fn write_container_svg(dir: &Path, container: FillContainer, level: FillLevel) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.svg", container.key()));
    fs::write(&path, render_container_svg(container, level))?;
    info!("Wrote {} at {} to {}", container, level, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fill_gauge() {
        assert_eq!(fill_gauge(FillLevel::Empty), "[--------------------]");
        assert_eq!(fill_gauge(FillLevel::Quarter), "[#####---------------]");
        assert_eq!(fill_gauge(FillLevel::Full), "[####################]");
    }

    #[test]
    fn test_write_container_svg() {
        let dir = tempdir().unwrap();
        let path = write_container_svg(dir.path(), FillContainer::Glass, FillLevel::Half).unwrap();

        assert_eq!(path.file_name().unwrap(), "glass.svg");
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("<svg"));
        assert!(content.contains("37.5,75"));
    }
}
