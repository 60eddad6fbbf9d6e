//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::OutputFormat;

/// Render self-similar fractal curves (L-systems) as SVG path data
#[derive(Parser, Debug)]
#[command(name = "sfc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Explicit config file (layered over the global config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a curve
    Render(RenderArgs),

    /// Render every curve into a directory
    Gallery {
        /// User depth for every curve (clamped per curve)
        #[arg(short, long, allow_negative_numbers = true)]
        depth: Option<i64>,
        /// Stroke thickness
        #[arg(short, long)]
        thickness: Option<f64>,
        /// Stroke color
        #[arg(short, long)]
        color: Option<String>,
        /// Target directory (default: configured output_dir)
        #[arg(short, long, value_hint = ValueHint::DirPath)]
        out_dir: Option<PathBuf>,
    },

    /// List available curves
    List,

    /// Show a curve's definition
    Info {
        /// Curve name
        curve: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct RenderArgs {
    /// Curve name (see `sfc list`)
    pub curve: Option<String>,

    /// User depth, clamped to the curve's range
    #[arg(short, long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Stroke thickness
    #[arg(short, long)]
    pub thickness: Option<f64>,

    /// Stroke color (written as-is)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Shared state `name-depth-thickness-color`; flags override its parts
    #[arg(short, long)]
    pub state: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "download")]
    pub output: Option<PathBuf>,

    /// Write `<state>.svg` into the output directory
    #[arg(long)]
    pub download: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print a config template
    Template,

    /// Show config paths
    Path,
}
