//! Renderable block payloads.
//!
//! Blocks are the leaves of a page document. The document structure stores
//! only their identifiers; the payload a block renders as lives here and is
//! consumed by exporters. A block with no registered payload still renders
//! (exporters fall back to showing its identifier), so content is strictly
//! additive to the structure.

/// The renderable payload of a block.
///
/// # Examples
///
/// ```
/// use galley_core::content::BlockContent;
///
/// let headline = BlockContent::text("Last minute offer");
/// let hero = BlockContent::image("https://example.com/hero.jpg");
/// let cta = BlockContent::button("I like it!", "https://example.com/");
///
/// assert_eq!(headline.kind(), "text");
/// assert_eq!(hero.kind(), "image");
/// assert_eq!(cta.kind(), "button");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockContent {
    /// A paragraph of rich text.
    Text {
        /// Text body; may contain markup, exporters escape it as needed.
        body: String,
    },
    /// An image referenced by URL.
    Image {
        /// Source URL of the image.
        src: String,
    },
    /// A call-to-action button linking to a URL.
    Button {
        /// Visible button label.
        label: String,
        /// Link target.
        href: String,
    },
}

impl BlockContent {
    /// Creates a text payload.
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text { body: body.into() }
    }

    /// Creates an image payload.
    pub fn image(src: impl Into<String>) -> Self {
        Self::Image { src: src.into() }
    }

    /// Creates a button payload.
    pub fn button(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Button {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Returns the payload kind as a short label.
    ///
    /// Used by wireframe rendering and logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Button { .. } => "button",
        }
    }
}
