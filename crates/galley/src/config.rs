//! Configuration types for Galley document rendering.
//!
//! This module provides configuration structures that control how page
//! documents are exported and styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining document, export and style settings.
//! - [`DocumentConfig`] - Document head values (title, preview text, body width).
//! - [`ExportConfig`] - Controls which [`ExportFormat`] backend is used.
//! - [`StyleConfig`] - Controls visual styling options such as background and accent colors.
//!
//! # Example
//!
//! ```
//! # use galley::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.document().body_width(), 500);
//! ```

use serde::Deserialize;

use galley_core::color::Color;

use crate::export::ExportFormat;

/// Top-level application configuration combining document, export and style
/// settings.
///
/// Groups [`DocumentConfig`], [`ExportConfig`] and [`StyleConfig`] into a
/// single configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Document head configuration section.
    #[serde(default)]
    document: DocumentConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified document, export and
    /// style configurations.
    ///
    /// # Arguments
    ///
    /// * `document` - Document head values.
    /// * `export` - Export backend selection.
    /// * `style` - Visual styling options.
    pub fn new(document: DocumentConfig, export: ExportConfig, style: StyleConfig) -> Self {
        Self {
            document,
            export,
            style,
        }
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Document head configuration.
///
/// The defaults reproduce the stock template head, so a freshly assembled
/// document exports meaningfully without any configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Document title.
    #[serde(default = "DocumentConfig::default_title")]
    title: String,

    /// Inbox preview line; omitted from the export when `None`.
    #[serde(default)]
    preview: Option<String>,

    /// Rendered body width in pixels.
    #[serde(default = "DocumentConfig::default_body_width")]
    body_width: u32,
}

impl DocumentConfig {
    fn default_title() -> String {
        "Last Minute Offer".to_string()
    }

    fn default_body_width() -> u32 {
        500
    }

    /// Creates a new [`DocumentConfig`] with the specified head values.
    pub fn new(title: impl Into<String>, preview: Option<String>, body_width: u32) -> Self {
        Self {
            title: title.into(),
            preview,
            body_width,
        }
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the inbox preview line, if configured.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Returns the rendered body width in pixels.
    pub fn body_width(&self) -> u32 {
        self.body_width
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            preview: None,
            body_width: Self::default_body_width(),
        }
    }
}

/// Export backend configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ExportConfig {
    /// Selected [`ExportFormat`] backend.
    #[serde(default)]
    format: ExportFormat,
}

impl ExportConfig {
    /// Creates a new [`ExportConfig`] with the specified format.
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Returns the selected [`ExportFormat`].
    pub fn format(&self) -> ExportFormat {
        self.format
    }
}

/// Visual styling configuration for exported documents.
///
/// Controls appearance options such as background and accent colors. Fields
/// that are not set fall back to exporter defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for the document body, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Accent [`Color`] used for buttons and selection highlights, as a
    /// color string.
    #[serde(default)]
    accent_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] from color strings.
    ///
    /// The strings are not validated here; they are parsed when the
    /// corresponding getter runs.
    pub fn new(background_color: Option<String>, accent_color: Option<String>) -> Self {
        Self {
            background_color,
            accent_color,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed accent [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn accent_color(&self) -> Result<Option<Color>, String> {
        self.accent_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid accent color in config: {err}"))
    }
}
