//! Export backends for page documents.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a page document into an output format. It is the final stage in
//! the Galley processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Edit Operations
//!     ↓ structure
//! Page Document (Page)
//!     ↓ contents (ContentSource)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`mjml`] - MJML email markup via [`mjml::MjmlExporter`]
//! - [`svg`] - SVG wireframe rendering via [`svg::SvgWireframe`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`GalleyError::Export`] at the crate
//! boundary.
//!
//! [`GalleyError::Export`]: crate::GalleyError::Export

/// MJML export backend.
pub mod mjml;
/// SVG wireframe export backend.
pub mod svg;

use std::{fs, path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use galley_core::{content::BlockContent, identifier::Id};

use crate::structure::Page;

/// Accent color fallback shared by the backends, matching the stock
/// template's button background.
pub(crate) const DEFAULT_ACCENT: &str = "#346DB7";

/// Supplies the content attached to block ids.
///
/// The document structure tracks only ids; what a block actually contains
/// lives beside it. Exporters look contents up through this trait so any
/// storage can back them. A block without content is rendered as a
/// placeholder, never skipped.
pub trait ContentSource {
    /// Returns the content of `block`, or `None` when nothing is attached.
    fn content_of(&self, block: Id) -> Option<&BlockContent>;
}

impl ContentSource for IndexMap<Id, BlockContent> {
    fn content_of(&self, block: Id) -> Option<&BlockContent> {
        self.get(&block)
    }
}

/// The empty content source; every block renders as a placeholder.
impl ContentSource for () {
    fn content_of(&self, _block: Id) -> Option<&BlockContent> {
        None
    }
}

/// Abstraction for page export backends.
///
/// Implementors convert a [`Page`] and its block contents into a specific
/// textual output format (e.g., MJML or SVG).
///
/// See the [`mjml`] and [`svg`] modules for the built-in implementations.
pub trait Exporter {
    /// Exports a page document to the backend's output format.
    ///
    /// # Arguments
    ///
    /// * `page` - The page document to export.
    /// * `contents` - Lookup for the content attached to block ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the document cannot be converted to the
    /// target format.
    fn document(&self, page: &Page, contents: &dyn ContentSource) -> Result<String, Error>;

    /// Exports a page document and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if rendering fails, or [`Error::Io`] if
    /// writing the output fails.
    fn write_document(
        &self,
        page: &Page,
        contents: &dyn ContentSource,
        path: &Path,
    ) -> Result<(), Error> {
        let rendered = self.document(page, contents)?;
        fs::write(path, rendered).map_err(Error::Io)
    }
}

/// Selects which export backend renders the document.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// MJML email markup (default)
    #[default]
    Mjml,
    /// SVG wireframe rendering
    Svg,
}

impl FromStr for ExportFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mjml" => Ok(Self::Mjml),
            "svg" => Ok(Self::Svg),
            _ => Err("Unsupported export format"),
        }
    }
}

impl From<ExportFormat> for &'static str {
    fn from(val: ExportFormat) -> Self {
        match val {
            ExportFormat::Mjml => "mjml",
            ExportFormat::Svg => "svg",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Errors that can occur during page export.
///
/// This type is converted into [`GalleyError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`GalleyError::Export`]: crate::GalleyError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
