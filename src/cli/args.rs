//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::due::DueArgs;
use crate::cli::commands::format::{DecimalsArgs, FixedArgs, ValueArgs};
use crate::cli::commands::render::RenderArgs;
use crate::cli::commands::tables::TablesArgs;
use crate::cli::commands::trace::TraceArgs;

/// Calibration certificate toolkit - unit conversion, uncertainty rounding and
/// traceability statements for mass calibration certificates
#[derive(Parser, Debug)]
#[command(name = "calcert", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output: OutputFormat,

    /// Lookup-table YAML replacing the built-in traceability tables
    #[arg(long, global = true, value_name = "PATH")]
    pub tables: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a gram reading to the display unit at the resolution's precision
    Convert(ValueArgs),

    /// Round an expanded uncertainty up to the resolution
    Uncertainty(ValueArgs),

    /// Format a correction with an explicit sign
    Correction(ValueArgs),

    /// Count the decimal places of a number
    Decimals(DecimalsArgs),

    /// Format a number with a fixed number of decimals
    Fixed(FixedArgs),

    /// Resolve a traceability statement
    Trace(TraceArgs),

    /// Resolve a recalibration due date
    Due(DueArgs),

    /// Render certificate tables from calibration record files
    Render(RenderArgs),

    /// Show or check traceability lookup tables
    Tables(TablesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pick per command (plain text or tables)
    #[default]
    Auto,
    /// Human-readable tables
    Table,
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    Json,
    Yaml,
}
