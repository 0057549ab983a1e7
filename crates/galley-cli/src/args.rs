//! Command-line argument definitions for the Galley CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control output path, export format,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Galley page composition tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file; defaults to out.<format>
    #[arg(short, long)]
    pub output: Option<String>,

    /// Export format (mjml, svg); overrides the configured format
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
