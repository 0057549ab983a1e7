//! Example: Composing a page document programmatically
//!
//! This example assembles a small promotional page through the document
//! store operations, resolves a drop position, and renders the result to
//! MJML and an SVG wireframe.

use indexmap::IndexMap;

use galley::{
    Page, PageBuilder, content::BlockContent, identifier::Id, position::insertion_index,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Assembling page document...\n");

    // Entity identifiers (Id is Copy, so we can reuse them)
    let wrapper1 = Id::new("wrapper1");
    let wrapper2 = Id::new("wrapper2");
    let column1 = Id::new("column1");
    let column2 = Id::new("column2");
    let column3 = Id::new("column3");
    let column4 = Id::new("column4");

    // Build the tree: two wrappers, three sections
    let mut page = Page::new();
    page.add_wrapper(wrapper1, 0);
    page.add_wrapper(wrapper2, 1);
    page.add_section(Id::new("section1"), wrapper1, 0, &[column1]);
    page.add_section(Id::new("section2"), wrapper1, 1, &[column2, column3]);
    page.add_section(Id::new("section3"), wrapper2, 0, &[column4]);

    // Fill the columns with blocks
    page.add_block(Id::new("block1"), column1, 0);
    page.add_block(Id::new("block2"), column1, 1);
    page.add_block(Id::new("block3"), column2, 0);
    page.add_block(Id::new("block4"), column3, 0);
    page.add_block(Id::new("block5"), column4, 0);

    // Attach content to the blocks
    let mut contents: IndexMap<Id, BlockContent> = IndexMap::new();
    contents.insert(
        Id::new("block1"),
        BlockContent::image(
            "https://static.wixstatic.com/media/5cb24728abef45dabebe7edc1d97ddd2.jpg",
        ),
    );
    contents.insert(
        Id::new("block2"),
        BlockContent::button("I like it!", "https://www.wix.com/"),
    );
    contents.insert(Id::new("block3"), BlockContent::text("I am blue"));
    contents.insert(Id::new("block4"), BlockContent::text("I am red"));
    contents.insert(
        Id::new("block5"),
        BlockContent::text("<a href=\"/2\">Open Second Template</a>"),
    );

    // Print page info
    println!("Created page:");
    println!("  Wrappers: {}", page.wrapper_count());
    println!("  Sections: {}", page.section_count());
    println!("  Columns: {}", page.column_count());
    println!("  Blocks: {}", page.block_count());
    println!();

    // Resolve where a drop 40px down column1 would land, assuming every
    // block takes 28px, then move the blue text there
    let drop_offset = 40.0;
    let drop_index = {
        let siblings = page.blocks_of(column1).unwrap_or_default();
        insertion_index(siblings, drop_offset, &|_: Id| Some(28.0_f32))
    };
    println!("A drop at {drop_offset}px in column1 lands at index {drop_index}");
    page.move_block(Id::new("block3"), column1, drop_index);

    // Highlight the hero image in the wireframe
    page.toggle_select(Id::new("block1"));

    // Render the page using PageBuilder
    println!("Rendering to MJML...");
    let builder = PageBuilder::default();
    let mjml = builder.render_mjml(&page, &contents)?;

    // Output MJML statistics
    println!("MJML generated successfully!");
    println!("MJML length: {} bytes", mjml.len());

    // Write to file
    let output_path = "compose_page_output.mjml";
    std::fs::write(output_path, &mjml)?;
    println!("MJML written to: {}", output_path);

    // Render and write the wireframe as well
    let wireframe = builder.render_wireframe(&page, &contents)?;
    let wireframe_path = "compose_page_output.svg";
    std::fs::write(wireframe_path, &wireframe)?;
    println!("Wireframe written to: {}", wireframe_path);

    Ok(())
}
