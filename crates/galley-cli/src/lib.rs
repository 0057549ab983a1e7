//! CLI logic for the Galley page composition tool.
//!
//! This module contains the core CLI logic for the Galley page composition
//! tool.

pub mod error_adapter;

mod args;
mod config;
mod demo;

pub use args::Args;

use std::{fs, str::FromStr};

use log::info;

use galley::{GalleyError, PageBuilder, export::ExportFormat};

/// Run the Galley CLI application
///
/// This function assembles the stock page document and writes it to the
/// output file with the selected export backend.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `GalleyError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unsupported export formats
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), GalleyError> {
    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // The command-line format overrides the configured one
    let format = match &args.format {
        Some(name) => ExportFormat::from_str(name)
            .map_err(|err| GalleyError::Config(format!("{err}: {name}")))?,
        None => app_config.export().format(),
    };
    let output = match &args.output {
        Some(path) => path.clone(),
        None => format!("out.{format}"),
    };

    info!(output_path = output, format:% = format; "Composing page document");

    // Assemble the stock document and render it
    let (page, contents) = demo::stock_document();
    let builder = PageBuilder::new(app_config);
    let rendered = builder.render(format, &page, &contents)?;

    // Write output file
    fs::write(&output, rendered)?;

    info!(output_file = output; "Page exported successfully");

    Ok(())
}
