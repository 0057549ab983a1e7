//! Document structure for Galley pages.
//!
//! This module provides the ordered-tree store behind a page document. A page
//! is a four-level hierarchy (wrappers contain sections, sections contain
//! columns, columns contain blocks) in which every child sequence is ordered
//! and every entity is addressed by an opaque [`galley_core::identifier::Id`].
//!
//! The store is the single source of truth during editing: renderers and
//! exporters read it between mutations, drag-and-drop feeds it move
//! operations, and it alone decides whether an edit applies.

mod page;

pub use page::{MutationError, Page};
