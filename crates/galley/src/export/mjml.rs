//! MJML rendering for page documents.
//!
//! The exporter walks the page tree top-down and emits the matching MJML
//! element for every level: wrappers become `mj-wrapper`, sections
//! `mj-section`, columns `mj-column`, and blocks the tag their content
//! dictates (`mj-text`, `mj-image`, or `mj-button`). The output is MJML
//! source, ready for an MJML compiler; no HTML is produced here.
//!
//! Head values (title, preview, body width) come from
//! [`DocumentConfig`](crate::config::DocumentConfig), colors from
//! [`StyleConfig`](crate::config::StyleConfig).

use std::fmt::Write;

use log::{debug, warn};

use galley_core::content::BlockContent;
use galley_core::identifier::Id;

use super::{ContentSource, Error, Exporter, DEFAULT_ACCENT};
use crate::{config::AppConfig, structure::Page};

/// Padding applied to every button, matching the stock template.
const BUTTON_PADDING: &str = "20px";

const INDENT: &str = "  ";

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Escapes text content for element bodies.
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes text for attribute values; quotes matter there too.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders a [`Page`] to MJML source.
///
/// # Examples
///
/// ```
/// use galley::config::AppConfig;
/// use galley::export::{Exporter, mjml::MjmlExporter};
/// use galley::structure::Page;
///
/// let page = Page::new();
/// let config = AppConfig::default();
/// let exporter = MjmlExporter::new(&config);
///
/// let mjml = exporter.document(&page, &()).unwrap();
/// assert!(mjml.contains("<mjml>"));
/// ```
pub struct MjmlExporter<'a> {
    config: &'a AppConfig,
}

impl<'a> MjmlExporter<'a> {
    /// Creates an exporter rendering with the given configuration.
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    fn compose(
        &self,
        page: &Page,
        contents: &dyn ContentSource,
        background: Option<&str>,
        accent: &str,
    ) -> Result<String, std::fmt::Error> {
        let document = self.config.document();
        let mut out = String::new();

        writeln!(out, "<mjml>")?;
        writeln!(out, "{}<mj-head>", indent(1))?;
        writeln!(
            out,
            "{}<mj-title>{}</mj-title>",
            indent(2),
            escape_text(document.title())
        )?;
        if let Some(preview) = document.preview() {
            writeln!(
                out,
                "{}<mj-preview>{}</mj-preview>",
                indent(2),
                escape_text(preview)
            )?;
        }
        writeln!(out, "{}</mj-head>", indent(1))?;

        match background {
            Some(color) => writeln!(
                out,
                "{}<mj-body width=\"{}px\" background-color=\"{}\">",
                indent(1),
                document.body_width(),
                escape_attr(color)
            )?,
            None => writeln!(
                out,
                "{}<mj-body width=\"{}px\">",
                indent(1),
                document.body_width()
            )?,
        }

        for wrapper in page.wrappers() {
            self.compose_wrapper(&mut out, page, wrapper, contents, accent)?;
        }

        writeln!(out, "{}</mj-body>", indent(1))?;
        writeln!(out, "</mjml>")?;
        Ok(out)
    }

    fn compose_wrapper(
        &self,
        out: &mut String,
        page: &Page,
        wrapper: Id,
        contents: &dyn ContentSource,
        accent: &str,
    ) -> std::fmt::Result {
        writeln!(out, "{}<mj-wrapper>", indent(2))?;
        for &section in page.sections_of(wrapper).unwrap_or_default() {
            self.compose_section(out, page, section, contents, accent)?;
        }
        writeln!(out, "{}</mj-wrapper>", indent(2))
    }

    fn compose_section(
        &self,
        out: &mut String,
        page: &Page,
        section: Id,
        contents: &dyn ContentSource,
        accent: &str,
    ) -> std::fmt::Result {
        // A listed but unregistered section can only come from inconsistent
        // loaded state; render what is reachable and move on.
        let Some(columns) = page.columns_of(section) else {
            warn!(section:% = section; "Listed section is not registered, skipping");
            return Ok(());
        };
        writeln!(out, "{}<mj-section>", indent(3))?;
        for &column in columns {
            self.compose_column(out, page, column, contents, accent)?;
        }
        writeln!(out, "{}</mj-section>", indent(3))
    }

    fn compose_column(
        &self,
        out: &mut String,
        page: &Page,
        column: Id,
        contents: &dyn ContentSource,
        accent: &str,
    ) -> std::fmt::Result {
        let Some(blocks) = page.blocks_of(column) else {
            warn!(column:% = column; "Listed column is not registered, skipping");
            return Ok(());
        };
        writeln!(out, "{}<mj-column>", indent(4))?;
        for &block in blocks {
            self.compose_block(out, block, contents.content_of(block), accent)?;
        }
        writeln!(out, "{}</mj-column>", indent(4))
    }

    fn compose_block(
        &self,
        out: &mut String,
        block: Id,
        content: Option<&BlockContent>,
        accent: &str,
    ) -> std::fmt::Result {
        let pad = indent(5);
        match content {
            Some(BlockContent::Text { body }) => {
                writeln!(out, "{pad}<mj-text>{}</mj-text>", escape_text(body))
            }
            Some(BlockContent::Image { src }) => {
                writeln!(out, "{pad}<mj-image src=\"{}\" />", escape_attr(src))
            }
            Some(BlockContent::Button { label, href }) => {
                writeln!(
                    out,
                    "{pad}<mj-button padding=\"{BUTTON_PADDING}\" background-color=\"{accent}\" href=\"{}\">{}</mj-button>",
                    escape_attr(href),
                    escape_text(label)
                )
            }
            None => {
                debug!(block:% = block; "No content attached, rendering placeholder");
                writeln!(out, "{pad}<mj-text>{block}</mj-text>")
            }
        }
    }
}

impl Exporter for MjmlExporter<'_> {
    fn document(&self, page: &Page, contents: &dyn ContentSource) -> Result<String, Error> {
        debug!(
            wrappers = page.wrapper_count(),
            blocks = page.block_count();
            "Rendering MJML document"
        );
        let style = self.config.style();
        let background = style
            .background_color()
            .map_err(Error::Render)?
            .map(|color| color.to_string());
        let accent = style
            .accent_color()
            .map_err(Error::Render)?
            .map(|color| color.to_string())
            .unwrap_or_else(|| DEFAULT_ACCENT.to_string());

        self.compose(page, contents, background.as_deref(), &accent)
            .map_err(|_| Error::Render("MJML composition failed".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::config::{DocumentConfig, ExportConfig, StyleConfig};

    use super::*;

    fn id(name: &str) -> Id {
        Id::new(name)
    }

    /// One wrapper, one section, two columns, three contented blocks plus
    /// one without content.
    fn sample_page() -> (Page, IndexMap<Id, BlockContent>) {
        let mut page = Page::new();
        page.add_wrapper(id("mj-wrapper1"), 0);
        page.add_section(
            id("mj-section1"),
            id("mj-wrapper1"),
            0,
            &[id("mj-column1"), id("mj-column2")],
        );
        page.add_block(id("mj-hero"), id("mj-column1"), 0);
        page.add_block(id("mj-cta"), id("mj-column1"), 1);
        page.add_block(id("mj-note"), id("mj-column2"), 0);
        page.add_block(id("mj-bare"), id("mj-column2"), 1);

        let mut contents = IndexMap::new();
        contents.insert(
            id("mj-hero"),
            BlockContent::image("https://static.wixstatic.com/media/5cb24728abef45dabebe7edc1d97ddd2.jpg"),
        );
        contents.insert(
            id("mj-cta"),
            BlockContent::button("I like it!", "https://www.wix.com/"),
        );
        contents.insert(id("mj-note"), BlockContent::text("I am blue"));
        (page, contents)
    }

    #[test]
    fn test_empty_page_renders_shell() {
        let config = AppConfig::default();
        let output = MjmlExporter::new(&config).document(&Page::new(), &()).unwrap();

        assert!(output.contains("<mjml>"));
        assert!(output.contains("<mj-body width=\"500px\">"));
        assert!(output.contains("</mjml>"));
        assert!(!output.contains("<mj-wrapper>"));
    }

    #[test]
    fn test_head_defaults() {
        let config = AppConfig::default();
        let output = MjmlExporter::new(&config).document(&Page::new(), &()).unwrap();

        assert!(output.contains("<mj-title>Last Minute Offer</mj-title>"));
        assert!(!output.contains("<mj-preview>"));
    }

    #[test]
    fn test_configured_head() {
        let config = AppConfig::new(
            DocumentConfig::new("Summer Sale", Some("Ends tonight".to_string()), 640),
            ExportConfig::default(),
            StyleConfig::default(),
        );
        let output = MjmlExporter::new(&config).document(&Page::new(), &()).unwrap();

        assert!(output.contains("<mj-title>Summer Sale</mj-title>"));
        assert!(output.contains("<mj-preview>Ends tonight</mj-preview>"));
        assert!(output.contains("<mj-body width=\"640px\">"));
    }

    #[test]
    fn test_tree_renders_nested_elements() {
        let (page, contents) = sample_page();
        let config = AppConfig::default();
        let output = MjmlExporter::new(&config).document(&page, &contents).unwrap();

        let wrapper = output.find("<mj-wrapper>").unwrap();
        let section = output.find("<mj-section>").unwrap();
        let column = output.find("<mj-column>").unwrap();
        assert!(wrapper < section);
        assert!(section < column);
        assert_eq!(output.matches("<mj-column>").count(), 2);
    }

    #[test]
    fn test_block_contents_map_to_tags() {
        let (page, contents) = sample_page();
        let config = AppConfig::default();
        let output = MjmlExporter::new(&config).document(&page, &contents).unwrap();

        assert!(output.contains(
            "<mj-image src=\"https://static.wixstatic.com/media/5cb24728abef45dabebe7edc1d97ddd2.jpg\" />"
        ));
        assert!(output.contains("href=\"https://www.wix.com/\">I like it!</mj-button>"));
        assert!(output.contains("<mj-text>I am blue</mj-text>"));
    }

    #[test]
    fn test_button_uses_default_accent() {
        let (page, contents) = sample_page();
        let config = AppConfig::default();
        let output = MjmlExporter::new(&config).document(&page, &contents).unwrap();

        assert!(output.contains("padding=\"20px\""));
        assert!(output.contains("background-color=\"#346DB7\""));
    }

    #[test]
    fn test_accent_color_overrides_button_background() {
        let (page, contents) = sample_page();
        let config = AppConfig::new(
            DocumentConfig::default(),
            ExportConfig::default(),
            StyleConfig::new(None, Some("teal".to_string())),
        );
        let output = MjmlExporter::new(&config).document(&page, &contents).unwrap();

        assert!(output.contains("background-color=\"teal\""));
        assert!(!output.contains("#346DB7"));
    }

    #[test]
    fn test_body_background_color() {
        let config = AppConfig::new(
            DocumentConfig::default(),
            ExportConfig::default(),
            StyleConfig::new(Some("#efefef".to_string()), None),
        );
        let output = MjmlExporter::new(&config).document(&Page::new(), &()).unwrap();

        let body_line = output
            .lines()
            .find(|line| line.contains("<mj-body"))
            .unwrap();
        assert!(body_line.contains("background-color="));
    }

    #[test]
    fn test_invalid_color_is_render_error() {
        let config = AppConfig::new(
            DocumentConfig::default(),
            ExportConfig::default(),
            StyleConfig::new(None, Some("not a color".to_string())),
        );
        let result = MjmlExporter::new(&config).document(&Page::new(), &());
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_missing_content_renders_placeholder() {
        let (page, contents) = sample_page();
        let config = AppConfig::default();
        let output = MjmlExporter::new(&config).document(&page, &contents).unwrap();

        assert!(output.contains("<mj-text>mj-bare</mj-text>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut page = Page::new();
        page.add_wrapper(id("esc-w"), 0);
        page.add_section(id("esc-s"), id("esc-w"), 0, &[id("esc-c")]);
        page.add_block(id("esc-b"), id("esc-c"), 0);

        let mut contents = IndexMap::new();
        contents.insert(id("esc-b"), BlockContent::text("Fish & Chips <b>now</b>"));

        let config = AppConfig::default();
        let output = MjmlExporter::new(&config).document(&page, &contents).unwrap();
        assert!(output.contains("Fish &amp; Chips &lt;b&gt;now&lt;/b&gt;"));
    }

    #[test]
    fn test_attribute_urls_are_escaped() {
        let mut page = Page::new();
        page.add_wrapper(id("url-w"), 0);
        page.add_section(id("url-s"), id("url-w"), 0, &[id("url-c")]);
        page.add_block(id("url-b"), id("url-c"), 0);

        let mut contents = IndexMap::new();
        contents.insert(
            id("url-b"),
            BlockContent::image("https://example.com/a.png?w=1&h=\"2\""),
        );

        let config = AppConfig::default();
        let output = MjmlExporter::new(&config).document(&page, &contents).unwrap();
        assert!(output.contains("src=\"https://example.com/a.png?w=1&amp;h=&quot;2&quot;\""));
    }
}
