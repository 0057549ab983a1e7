//! SVG wireframe rendering for page documents.
//!
//! The wireframe draws every entity of the tree as a labelled rectangle:
//! wrappers outermost, then sections, columns, and blocks. Each level has
//! its own outline color so the nesting reads at a glance. The selected
//! entity, if any, gets a solid border and a translucent accent fill;
//! everything else is drawn dashed.
//!
//! Widths flow top-down from the configured body width, with a section's
//! columns dividing its inner width evenly. Heights flow bottom-up from the
//! fixed block height, so the canvas grows with the document.

use log::{debug, warn};
use svg::{self, node::element as svg_element};

use galley_core::{
    color::Color,
    geometry::{Bounds, Insets, Point, Size},
    identifier::Id,
    level::Level,
};

use super::{ContentSource, Error, Exporter, DEFAULT_ACCENT};
use crate::{config::AppConfig, structure::Page};

const CANVAS_MARGIN: f32 = 16.0;
const WRAPPER_GAP: f32 = 14.0;
const SECTION_GAP: f32 = 10.0;
const COLUMN_GAP: f32 = 8.0;
const BLOCK_GAP: f32 = 6.0;
const BLOCK_HEIGHT: f32 = 28.0;
/// Height reserved for containers with nothing in them.
const EMPTY_CONTENT_HEIGHT: f32 = 24.0;
const LABEL_FONT_SIZE: u16 = 11;
const SELECTION_FILL_ALPHA: f32 = 0.15;

/// Outline color per nesting level.
fn level_color(level: Level) -> &'static str {
    match level {
        Level::Wrapper => "#5e072e",
        Level::Section => "#feb938",
        Level::Column => "#41a453",
        Level::Block => "#2196f3",
    }
}

/// Inner padding per nesting level; the top edge leaves room for the label.
fn level_insets(level: Level) -> Insets {
    match level {
        Level::Wrapper => Insets::new(22.0, 10.0, 10.0, 10.0),
        Level::Section => Insets::new(20.0, 8.0, 8.0, 8.0),
        Level::Column => Insets::new(18.0, 6.0, 6.0, 6.0),
        Level::Block => Insets::uniform(0.0),
    }
}

/// Renders a [`Page`] to an SVG wireframe.
///
/// # Examples
///
/// ```
/// use galley::config::AppConfig;
/// use galley::export::{Exporter, svg::SvgWireframe};
/// use galley::structure::Page;
///
/// let page = Page::new();
/// let config = AppConfig::default();
/// let exporter = SvgWireframe::new(&config);
///
/// let rendered = exporter.document(&page, &()).unwrap();
/// assert!(rendered.contains("<svg"));
/// ```
pub struct SvgWireframe<'a> {
    config: &'a AppConfig,
}

impl<'a> SvgWireframe<'a> {
    /// Creates an exporter rendering with the given configuration.
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// The outline rectangle of one entity, styled by level and selection.
    fn entity_rect(
        &self,
        bounds: Bounds,
        level: Level,
        id: Id,
        selected: Option<Id>,
        accent: &Color,
    ) -> svg_element::Rectangle {
        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("stroke", level_color(level))
            .set("fill", "none")
            .set("rx", 3.0);
        if selected == Some(id) {
            let highlight = accent.with_alpha(SELECTION_FILL_ALPHA);
            rect = rect
                .set("stroke-width", 2)
                .set("fill", highlight.to_string())
                .set("fill-opacity", highlight.alpha());
        } else {
            rect = rect.set("stroke-width", 1).set("stroke-dasharray", "4 2");
        }
        rect
    }

    fn entity_label(&self, bounds: Bounds, level: Level, text: &str) -> svg_element::Text {
        // Blocks are short, so their label sits centered; containers carry
        // theirs in the padded top edge.
        let baseline = match level {
            Level::Block => bounds.min_y() + bounds.height() / 2.0 + 4.0,
            _ => bounds.min_y() + 13.0,
        };
        svg_element::Text::new(text.to_string())
            .set("x", bounds.min_x() + 6.0)
            .set("y", baseline)
            .set("font-family", "monospace")
            .set("font-size", LABEL_FONT_SIZE)
            .set("fill", level_color(level))
    }

    fn render_block(
        &self,
        block: Id,
        contents: &dyn ContentSource,
        origin: Point,
        width: f32,
        selected: Option<Id>,
        accent: &Color,
    ) -> (svg_element::Group, Bounds) {
        let bounds = Bounds::new_from_top_left(origin, Size::new(width, BLOCK_HEIGHT));
        let label = match contents.content_of(block) {
            Some(content) => format!("{block} ({})", content.kind()),
            None => block.to_string(),
        };
        let group = svg_element::Group::new()
            .add(self.entity_rect(bounds, Level::Block, block, selected, accent))
            .add(self.entity_label(bounds, Level::Block, &label));
        (group, bounds)
    }

    fn render_column(
        &self,
        page: &Page,
        column: Id,
        contents: &dyn ContentSource,
        origin: Point,
        width: f32,
        selected: Option<Id>,
        accent: &Color,
    ) -> (svg_element::Group, Bounds) {
        let insets = level_insets(Level::Column);
        let content_width = (width - insets.horizontal_sum()).max(0.0);
        let blocks = page.blocks_of(column).unwrap_or_default();

        let content_height = if blocks.is_empty() {
            EMPTY_CONTENT_HEIGHT
        } else {
            blocks.len() as f32 * BLOCK_HEIGHT + (blocks.len() as f32 - 1.0) * BLOCK_GAP
        };
        let bounds = Bounds::new_from_top_left(
            origin,
            Size::new(content_width, content_height).add_padding(insets),
        );

        let mut group = svg_element::Group::new()
            .add(self.entity_rect(bounds, Level::Column, column, selected, accent))
            .add(self.entity_label(bounds, Level::Column, &column.to_string()));

        let mut cursor = Point::new(origin.x() + insets.left(), origin.y() + insets.top());
        for &block in blocks {
            let (node, block_bounds) =
                self.render_block(block, contents, cursor, content_width, selected, accent);
            group = group.add(node);
            cursor = Point::new(cursor.x(), block_bounds.max_y() + BLOCK_GAP);
        }
        (group, bounds)
    }

    fn render_section(
        &self,
        page: &Page,
        section: Id,
        contents: &dyn ContentSource,
        origin: Point,
        width: f32,
        selected: Option<Id>,
        accent: &Color,
    ) -> Option<(svg_element::Group, Bounds)> {
        let Some(listed) = page.columns_of(section) else {
            warn!(section:% = section; "Listed section is not registered, skipping");
            return None;
        };
        let columns: Vec<Id> = listed
            .iter()
            .copied()
            .filter(|column| {
                let registered = page.blocks_of(*column).is_some();
                if !registered {
                    warn!(column:% = column; "Listed column is not registered, skipping");
                }
                registered
            })
            .collect();

        let insets = level_insets(Level::Section);
        let content_width = (width - insets.horizontal_sum()).max(0.0);
        let column_width = if columns.is_empty() {
            content_width
        } else {
            (content_width - COLUMN_GAP * (columns.len() as f32 - 1.0)) / columns.len() as f32
        };

        let mut rendered = Vec::with_capacity(columns.len());
        let mut tallest = Size::new(0.0, EMPTY_CONTENT_HEIGHT);
        let mut cursor = Point::new(origin.x() + insets.left(), origin.y() + insets.top());
        for &column in &columns {
            let (node, column_bounds) =
                self.render_column(page, column, contents, cursor, column_width, selected, accent);
            tallest = tallest.max(Size::new(column_bounds.width(), column_bounds.height()));
            cursor = Point::new(column_bounds.max_x() + COLUMN_GAP, cursor.y());
            rendered.push(node);
        }

        let bounds = Bounds::new_from_top_left(
            origin,
            Size::new(content_width, tallest.height()).add_padding(insets),
        );
        let mut group = svg_element::Group::new()
            .add(self.entity_rect(bounds, Level::Section, section, selected, accent))
            .add(self.entity_label(bounds, Level::Section, &section.to_string()));
        for node in rendered {
            group = group.add(node);
        }
        Some((group, bounds))
    }

    fn render_wrapper(
        &self,
        page: &Page,
        wrapper: Id,
        contents: &dyn ContentSource,
        origin: Point,
        width: f32,
        selected: Option<Id>,
        accent: &Color,
    ) -> (svg_element::Group, Bounds) {
        let insets = level_insets(Level::Wrapper);
        let content_width = (width - insets.horizontal_sum()).max(0.0);
        let content_top = origin.y() + insets.top();

        let mut rendered = Vec::new();
        let mut content_bottom = content_top;
        let mut cursor = Point::new(origin.x() + insets.left(), content_top);
        for &section in page.sections_of(wrapper).unwrap_or_default() {
            if let Some((node, section_bounds)) =
                self.render_section(page, section, contents, cursor, content_width, selected, accent)
            {
                content_bottom = section_bounds.max_y();
                cursor = Point::new(cursor.x(), section_bounds.max_y() + SECTION_GAP);
                rendered.push(node);
            }
        }

        let content_height = (content_bottom - content_top).max(EMPTY_CONTENT_HEIGHT);
        let bounds = Bounds::new_from_top_left(
            origin,
            Size::new(content_width, content_height).add_padding(insets),
        );
        let mut group = svg_element::Group::new()
            .add(self.entity_rect(bounds, Level::Wrapper, wrapper, selected, accent))
            .add(self.entity_label(bounds, Level::Wrapper, &wrapper.to_string()));
        for node in rendered {
            group = group.add(node);
        }
        (group, bounds)
    }
}

impl Exporter for SvgWireframe<'_> {
    fn document(&self, page: &Page, contents: &dyn ContentSource) -> Result<String, Error> {
        debug!(
            wrappers = page.wrapper_count(),
            blocks = page.block_count(),
            selected:? = page.selected().map(|id| id.to_string());
            "Rendering SVG wireframe"
        );
        let style = self.config.style();
        let background = style.background_color().map_err(Error::Render)?;
        let accent = match style.accent_color().map_err(Error::Render)? {
            Some(color) => color,
            None => Color::new(DEFAULT_ACCENT).map_err(Error::Render)?,
        };

        let body_width = self.config.document().body_width() as f32;
        let canvas_width = body_width + 2.0 * CANVAS_MARGIN;
        let selected = page.selected();

        let mut canvas = Bounds::new_from_top_left(
            Point::new(0.0, 0.0),
            Size::new(canvas_width, CANVAS_MARGIN),
        );
        let mut groups = Vec::new();
        let mut cursor = Point::new(CANVAS_MARGIN, CANVAS_MARGIN);
        for wrapper in page.wrappers() {
            let (node, wrapper_bounds) =
                self.render_wrapper(page, wrapper, contents, cursor, body_width, selected, &accent);
            canvas = canvas.merge(&wrapper_bounds);
            cursor = Point::new(cursor.x(), wrapper_bounds.max_y() + WRAPPER_GAP);
            groups.push(node);
        }

        let height = canvas.max_y() + CANVAS_MARGIN;
        let mut doc = svg::Document::new()
            .set("viewBox", format!("0 0 {canvas_width} {height}"))
            .set("width", canvas_width)
            .set("height", height);

        let mut body_rect = svg_element::Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", canvas_width)
            .set("height", height);
        body_rect = match &background {
            Some(color) => body_rect.set("fill", color),
            None => body_rect.set("fill", "#ffffff"),
        };
        doc = doc.add(body_rect);

        for group in groups {
            doc = doc.add(group);
        }
        Ok(doc.to_string())
    }
}
