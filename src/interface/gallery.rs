use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::geometry::render_container_svg;
use crate::models::{FillContainer, FillLevel, Portion};

/// Name of the CSV index written next to the images.
pub const GALLERY_INDEX: &str = "index.csv";

/// One row of the gallery index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryEntry {
    pub container: String,
    pub level: u8,
    pub fraction: f64,
    pub servings: f64,
    pub file: String,
    #[serde(skip)]
    pub fill_level: FillLevel,
}

/// Write every container at every fill level, plus a CSV index.
pub fn write_gallery(dir: &Path) -> Result<Vec<GalleryEntry>> {
    fs::create_dir_all(dir)?;

    let mut entries = Vec::new();
    for container in FillContainer::ALL {
        for level in FillLevel::ALL {
            let file = format!("{}_{}.svg", container.key(), level.index());
            fs::write(dir.join(&file), render_container_svg(container, level))?;

            entries.push(GalleryEntry {
                container: container.label().to_string(),
                level: level.index(),
                fraction: level.fraction(),
                servings: Portion::Filled { container, level }.servings(),
                file,
                fill_level: level,
            });
        }
    }

    let mut wtr = csv::Writer::from_path(dir.join(GALLERY_INDEX))?;
    for entry in &entries {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;

    Ok(entries)
}
