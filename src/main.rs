use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{LevelFilter, debug, info};
use simplelog::{Config as LoggerConfig, SimpleLogger};

use calorie_tracker_rs::cli::{Cli, Command, ContainerArg};
use calorie_tracker_rs::error::{Result, TrackerError};
use calorie_tracker_rs::geometry::render_container_svg;
use calorie_tracker_rs::interface::{
    Action, display_container, display_outcome, display_session, prompt_action, prompt_container,
    prompt_food_name, prompt_pieces, write_container_svg,
};
use calorie_tracker_rs::lookup::{FoodLookup, UsdaClient, UsdaConfig};
use calorie_tracker_rs::models::{FillContainer, FillLevel};
use calorie_tracker_rs::session::{Event, Session};

fn main() {
    dotenv::dotenv().ok();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::init(filter, LoggerConfig::default())?;

    let command = cli.command.unwrap_or_default();
    debug!("Running {:?}", command);

    match command {
        Command::Track { svg_dir } => {
            let lookup = UsdaClient::new(UsdaConfig::new(cli.api_key, cli.api_url))?;
            cmd_track(&lookup, svg_dir.as_deref())
        }
        Command::Estimate {
            food,
            container,
            clicks,
            pieces,
        } => {
            let lookup = UsdaClient::new(UsdaConfig::new(cli.api_key, cli.api_url))?;
            cmd_estimate(&lookup, food, container, clicks, pieces)
        }
        Command::Render {
            container,
            level,
            out,
        } => cmd_render(container.into(), FillLevel::try_from(level)?, out),
    }
}

/// Interactive session: one menu action per loop iteration.
fn cmd_track(lookup: &dyn FoodLookup, svg_dir: Option<&Path>) -> Result<()> {
    let mut session = Session::new();

    println!("Calorie Tracker");
    display_session(&session);

    loop {
        let event = match prompt_action(&session)? {
            Action::EnterFood => Event::SetFoodName(prompt_food_name(session.food_name())?),
            Action::ChooseContainer => Event::SelectContainer(prompt_container(session.container())?),
            Action::ClickFill => Event::ClickFill,
            Action::SetPieces => match prompt_pieces(session.pieces().get()) {
                Ok(n) => Event::SetPieces(n),
                Err(TrackerError::InvalidInput(msg)) => {
                    println!("{}", msg);
                    continue;
                }
                Err(e) => return Err(e),
            },
            Action::Search => Event::Search,
            Action::Quit => break,
        };

        let redraw = matches!(event, Event::ClickFill | Event::SelectContainer(_));

        if let Some(outcome) = session.handle(event, lookup) {
            println!();
            display_outcome(&outcome);
            println!();
            continue;
        }

        display_session(&session);

        if redraw {
            if let (Some(dir), Some((container, level))) = (svg_dir, session.selected_level()) {
                let path = write_container_svg(dir, container, level)?;
                println!("Image: {}", path.display());
            }
        }
    }

    Ok(())
}

/// One-shot estimate driven entirely by flags.
fn cmd_estimate(
    lookup: &dyn FoodLookup,
    food: String,
    container: ContainerArg,
    clicks: u32,
    pieces: u32,
) -> Result<()> {
    let mut session = Session::new();
    session.handle(Event::SetFoodName(food), lookup);
    session.handle(Event::SelectContainer(container.into()), lookup);
    for _ in 0..clicks {
        session.handle(Event::ClickFill, lookup);
    }
    session.handle(Event::SetPieces(pieces), lookup);

    if let Some((container, level)) = session.selected_level() {
        display_container(container, level);
    }

    if let Some(outcome) = session.handle(Event::Search, lookup) {
        display_outcome(&outcome);
    }

    Ok(())
}

/// Print or write one container image.
fn cmd_render(container: FillContainer, level: FillLevel, out: Option<PathBuf>) -> Result<()> {
    let svg = render_container_svg(container, level);

    match out {
        Some(path) => {
            fs::write(&path, svg)?;
            info!("Wrote {} at {} to {}", container, level, path.display());
        }
        None => print!("{}", svg),
    }

    Ok(())
}
