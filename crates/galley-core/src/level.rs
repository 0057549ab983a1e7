//! The document hierarchy vocabulary.
//!
//! A page document has exactly four nesting levels. [`Level`] names them,
//! for rejection logging and per-level wireframe styling.

use std::fmt::{self, Display};

/// The four nesting levels of a page document, outermost first.
///
/// Wrappers contain sections, sections contain columns, columns contain
/// blocks. Blocks are leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Top-level container; the document is an ordered sequence of wrappers.
    Wrapper,
    /// Horizontal band inside a wrapper.
    Section,
    /// Vertical column inside a section.
    Column,
    /// Leaf content holder inside a column.
    Block,
}

impl From<Level> for &'static str {
    fn from(val: Level) -> Self {
        match val {
            Level::Wrapper => "wrapper",
            Level::Section => "section",
            Level::Column => "column",
            Level::Block => "block",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Wrapper.to_string(), "wrapper");
        assert_eq!(Level::Section.to_string(), "section");
        assert_eq!(Level::Column.to_string(), "column");
        assert_eq!(Level::Block.to_string(), "block");
    }

    #[test]
    fn test_level_names_are_distinct() {
        let names: Vec<&'static str> = [Level::Wrapper, Level::Section, Level::Column, Level::Block]
            .into_iter()
            .map(Into::into)
            .collect();
        assert_eq!(names, ["wrapper", "section", "column", "block"]);
    }
}
