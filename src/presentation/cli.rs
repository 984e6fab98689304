//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --config, --color, --verbose) are inherited by all subcommands
//! - Lengths accept a unit suffix (`3m`, `45cm`); bare numbers are millimeters

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ColorMode;
use crate::domain::value_objects::{parse_length, SensorFormat, ZeissRatio};

/// dofcalc - depth-of-field and hyperfocal distance calculator
#[derive(Parser, Debug)]
#[command(name = "dofcalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./dofcalc.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hyperfocal distance and near/far limits of acceptable sharpness
    Calc(CalcArgs),

    /// List the standard sensor formats
    Sensors,

    /// Manage the lens catalog
    #[command(subcommand)]
    Lenses(LensCommands),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CalcArgs {
    /// f-number to calculate for
    #[arg(short, long)]
    pub aperture: f64,

    /// Focus distance (e.g. 3m, 450mm); omit for hyperfocal distance only
    #[arg(short, long, value_parser = length)]
    pub distance: Option<f64>,

    /// Catalog lens to use (manufacturer, model or display name)
    #[arg(
        short,
        long,
        value_name = "QUERY",
        conflicts_with_all = ["focal_length", "max_aperture", "min_aperture", "min_focus"]
    )]
    pub lens: Option<String>,

    #[command(flatten)]
    pub explicit_lens: ExplicitLensArgs,

    /// Standard sensor format (default from config)
    #[arg(short, long, value_enum)]
    pub sensor: Option<SensorFormat>,

    /// Named circle-of-confusion ratio (default from config)
    #[arg(long, value_enum, conflicts_with = "coc_divisor")]
    pub zeiss: Option<ZeissRatio>,

    /// Custom circle-of-confusion divisor
    #[arg(long, value_name = "N")]
    pub coc_divisor: Option<f64>,
}

/// Lens given on the command line instead of from the catalog
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ExplicitLensArgs {
    /// Focal length (e.g. 50, 105mm)
    #[arg(short, long, value_parser = length, requires = "max_aperture")]
    pub focal_length: Option<f64>,

    /// Widest f-number of the lens
    #[arg(long, requires = "focal_length")]
    pub max_aperture: Option<f64>,

    /// Narrowest f-number of the lens [default: 22]
    #[arg(long, requires = "focal_length")]
    pub min_aperture: Option<f64>,

    /// Minimum focus distance (e.g. 45cm) [default: 0.3m]
    #[arg(long, value_parser = length, requires = "focal_length")]
    pub min_focus: Option<f64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum LensCommands {
    /// List catalog lenses
    List,

    /// Add a lens (replaces an equal lens already in the catalog)
    Add(AddLensArgs),

    /// Remove the lens matching QUERY
    Remove {
        /// Manufacturer, model or display name
        query: String,
    },

    /// Change fields of the lens matching QUERY
    Edit(EditLensArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AddLensArgs {
    #[arg(short, long)]
    pub manufacturer: String,

    /// Model name; generated from focal length and aperture when omitted
    #[arg(long)]
    pub model: Option<String>,

    /// Focal length (e.g. 50, 105mm)
    #[arg(short, long, value_parser = length)]
    pub focal_length: f64,

    /// Widest f-number
    #[arg(long)]
    pub max_aperture: f64,

    /// Narrowest f-number
    #[arg(long, default_value_t = 22.0)]
    pub min_aperture: f64,

    /// Minimum focus distance (e.g. 45cm)
    #[arg(long, value_parser = length)]
    pub min_focus: f64,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct EditLensArgs {
    /// Manufacturer, model or display name
    pub query: String,

    #[arg(short, long)]
    pub manufacturer: Option<String>,

    #[arg(long, conflicts_with = "clear_model")]
    pub model: Option<String>,

    /// Remove the model name
    #[arg(long)]
    pub clear_model: bool,

    #[arg(short, long, value_parser = length)]
    pub focal_length: Option<f64>,

    #[arg(long)]
    pub max_aperture: Option<f64>,

    #[arg(long)]
    pub min_aperture: Option<f64>,

    #[arg(long, value_parser = length)]
    pub min_focus: Option<f64>,
}

fn length(input: &str) -> Result<f64, String> {
    parse_length(input).map_err(|e| e.to_string())
}
