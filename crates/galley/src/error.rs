//! Error types for Galley operations.
//!
//! This module provides the main error type [`GalleyError`] which wraps
//! the error conditions that can occur while rendering or persisting a
//! page document. Structural mutations never surface here: the document
//! store rejects invalid edits by logging and leaving the tree untouched.

use std::io;

use thiserror::Error;

/// The main error type for Galley operations.
#[derive(Debug, Error)]
pub enum GalleyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for GalleyError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
