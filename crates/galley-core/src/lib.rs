//! Galley Core Types and Definitions
//!
//! This crate provides the foundational types and definitions for Galley
//! page documents. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Content**: Renderable block payloads ([`content`] module)
//! - **Levels**: The document hierarchy vocabulary ([`level`] module)

pub mod color;
pub mod content;
pub mod geometry;
pub mod identifier;
pub mod level;
