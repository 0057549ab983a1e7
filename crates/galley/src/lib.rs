//! Galley - A block-based page composition engine.
//!
//! Structure, editing, and export for Galley page documents. A page is a
//! four-level tree of wrappers, sections, columns, and blocks, edited through
//! total operations and exported to MJML email markup or an SVG wireframe.

pub mod config;
pub mod export;
pub mod position;
pub mod structure;

mod error;

pub use galley_core::{color, content, geometry, identifier, level};

pub use error::GalleyError;
pub use structure::{MutationError, Page};

use log::{debug, info};

use config::AppConfig;
use export::{ContentSource, ExportFormat, Exporter, mjml::MjmlExporter, svg::SvgWireframe};

/// Builder for rendering Galley page documents.
///
/// This provides an API for turning an assembled [`Page`] and its block
/// contents into an output document.
///
/// # Examples
///
/// ```rust
/// use galley::{Page, PageBuilder, config::AppConfig};
/// use galley::identifier::Id;
///
/// let mut page = Page::new();
/// page.add_wrapper(Id::new("intro"), 0);
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = PageBuilder::new(config);
///
/// let mjml = builder.render_mjml(&page, &())
///     .expect("Failed to render");
/// assert!(mjml.contains("<mj-wrapper>"));
///
/// // Or use default config
/// let builder = PageBuilder::default();
/// ```
#[derive(Default)]
pub struct PageBuilder {
    config: AppConfig,
}

impl PageBuilder {
    /// Create a new page builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including document head and style settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use galley::{PageBuilder, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let builder = PageBuilder::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Render a page document to MJML source.
    ///
    /// Every reachable entity of the tree is emitted as its MJML element;
    /// block contents come from `contents`, with placeholders for blocks
    /// that have none attached.
    ///
    /// # Arguments
    ///
    /// * `page` - The page document to render
    /// * `contents` - Lookup for the content attached to block ids
    ///
    /// # Errors
    ///
    /// Returns `GalleyError` for configuration or rendering errors.
    pub fn render_mjml(
        &self,
        page: &Page,
        contents: &impl ContentSource,
    ) -> Result<String, GalleyError> {
        info!(wrappers = page.wrapper_count(), blocks = page.block_count(); "Rendering page to MJML");
        let mjml = MjmlExporter::new(&self.config).document(page, contents)?;
        debug!(length = mjml.len(); "MJML rendered successfully");
        Ok(mjml)
    }

    /// Render a page document to an SVG wireframe.
    ///
    /// The wireframe draws every entity as a labelled, color-coded outline,
    /// with the selected entity highlighted. Pass `&()` as `contents` when
    /// no block contents are available.
    ///
    /// # Arguments
    ///
    /// * `page` - The page document to render
    /// * `contents` - Lookup for the content attached to block ids
    ///
    /// # Errors
    ///
    /// Returns `GalleyError` for configuration or rendering errors.
    pub fn render_wireframe(
        &self,
        page: &Page,
        contents: &impl ContentSource,
    ) -> Result<String, GalleyError> {
        info!(wrappers = page.wrapper_count(), blocks = page.block_count(); "Rendering page wireframe");
        let rendered = SvgWireframe::new(&self.config).document(page, contents)?;
        debug!(length = rendered.len(); "Wireframe rendered successfully");
        Ok(rendered)
    }

    /// Render a page document with the backend picked by `format`.
    ///
    /// # Errors
    ///
    /// Returns `GalleyError` for configuration or rendering errors.
    pub fn render(
        &self,
        format: ExportFormat,
        page: &Page,
        contents: &impl ContentSource,
    ) -> Result<String, GalleyError> {
        match format {
            ExportFormat::Mjml => self.render_mjml(page, contents),
            ExportFormat::Svg => self.render_wireframe(page, contents),
        }
    }
}
