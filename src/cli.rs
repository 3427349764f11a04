use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::models::{Container, FillContainer};

/// Calorie Tracker — estimate calories from a food name and how full your plate, bowl, or glass is.
#[derive(Parser, Debug)]
#[command(name = "calorie_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// USDA FoodData Central API key.
    #[arg(long, env = "USDA_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the FoodData Central API.
    #[arg(long, env = "USDA_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Increase log verbosity; can be repeated.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Interactively pick a food and portion, then search.
    Track {
        /// Directory to write the current container image to after each click.
        #[arg(long)]
        svg_dir: Option<PathBuf>,
    },

    /// Estimate calories for one food and portion without prompting.
    Estimate {
        /// Food name to search for.
        #[arg(long)]
        food: String,

        /// Portion container.
        #[arg(long, value_enum, default_value_t = ContainerArg::Plate)]
        container: ContainerArg,

        /// Number of fill clicks on the container (wraps after 4).
        #[arg(long, default_value_t = 0)]
        clicks: u32,

        /// Number of pieces or slices.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pieces: u32,
    },

    /// Print or write the SVG of a container at a fill level.
    Render {
        /// Container to draw.
        #[arg(long, value_enum)]
        container: FillContainerArg,

        /// Fill level from 0 (empty) to 4 (full).
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=4))]
        level: u8,

        /// Output file; prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Track { svg_dir: None }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerArg {
    Plate,
    Bowl,
    Glass,
    Pieces,
}

impl From<ContainerArg> for Container {
    fn from(arg: ContainerArg) -> Self {
        match arg {
            ContainerArg::Plate => Container::Filled(FillContainer::Plate),
            ContainerArg::Bowl => Container::Filled(FillContainer::Bowl),
            ContainerArg::Glass => Container::Filled(FillContainer::Glass),
            ContainerArg::Pieces => Container::PieceOrSlice,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillContainerArg {
    Plate,
    Bowl,
    Glass,
}

impl From<FillContainerArg> for FillContainer {
    fn from(arg: FillContainerArg) -> Self {
        match arg {
            FillContainerArg::Plate => FillContainer::Plate,
            FillContainerArg::Bowl => FillContainer::Bowl,
            FillContainerArg::Glass => FillContainer::Glass,
        }
    }
}
