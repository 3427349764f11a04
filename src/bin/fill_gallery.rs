use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use simplelog::{Config as LoggerConfig, SimpleLogger};

use calorie_tracker_rs::interface::{GALLERY_INDEX, fill_gauge, write_gallery};

#[derive(Parser, Debug)]
#[command(name = "fill_gallery")]
#[command(about = "Render every container at every fill level")]
struct Args {
    /// Directory for the SVG files and index
    #[arg(long, default_value = "fill_gallery")]
    out_dir: PathBuf,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = SimpleLogger::init(filter, LoggerConfig::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let entries = match write_gallery(&args.out_dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error writing gallery: {}", e);
            std::process::exit(1);
        }
    };

    for entry in &entries {
        println!(
            "{:<6} {} {:>5.2} servings  {}",
            entry.container,
            fill_gauge(entry.fill_level),
            entry.servings,
            entry.file
        );
    }

    println!();
    println!(
        "Wrote {} images and {} to {}",
        entries.len(),
        GALLERY_INDEX,
        args.out_dir.display()
    );
}
