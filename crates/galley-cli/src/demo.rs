//! The stock page document rendered by the CLI.
//!
//! The binary has no input format; it loads the stock promotional template
//! and exports it with the selected backend, so every part of the pipeline
//! can be exercised from the command line.

use indexmap::IndexMap;

use galley::{Page, content::BlockContent, identifier::Id};

/// Builds the stock template document.
///
/// Returns the assembled [`Page`] together with the contents attached to
/// its blocks. Two blocks are left without content to show the exporter
/// placeholders.
pub fn stock_document() -> (Page, IndexMap<Id, BlockContent>) {
    let mut page = Page::new();
    page.load_state(
        vec![Id::new("wrapper1"), Id::new("wrapper2"), Id::new("wrapper3")],
        IndexMap::from([
            (Id::new("wrapper1"), vec![Id::new("section1"), Id::new("section2")]),
            (Id::new("wrapper2"), vec![Id::new("section3")]),
            (Id::new("wrapper3"), vec![Id::new("section4")]),
        ]),
        IndexMap::from([
            (Id::new("section1"), vec![Id::new("column1"), Id::new("column2")]),
            (Id::new("section2"), vec![Id::new("column3")]),
            (Id::new("section3"), vec![Id::new("column4")]),
            (Id::new("section4"), vec![Id::new("column5"), Id::new("column6")]),
        ]),
        IndexMap::from([
            (Id::new("column1"), vec![Id::new("block1"), Id::new("block2")]),
            (Id::new("column2"), vec![Id::new("block3")]),
            (Id::new("column3"), vec![Id::new("block4")]),
            (Id::new("column4"), vec![Id::new("block5")]),
            (Id::new("column5"), vec![Id::new("block6")]),
            (Id::new("column6"), vec![Id::new("block7")]),
        ]),
    );

    let contents = IndexMap::from([
        (
            Id::new("block1"),
            BlockContent::image(
                "https://static.wixstatic.com/media/5cb24728abef45dabebe7edc1d97ddd2.jpg",
            ),
        ),
        (
            Id::new("block2"),
            BlockContent::button("I like it!", "https://www.wix.com/"),
        ),
        (Id::new("block3"), BlockContent::text("I am blue")),
        (Id::new("block4"), BlockContent::text("I am red")),
        (
            Id::new("block5"),
            BlockContent::text("<a href=\"/2\">Open Second Template</a>"),
        ),
    ]);

    (page, contents)
}
