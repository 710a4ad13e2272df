//! Style resolution: inline declarations, value resolvers, style mappers and
//! the ancestor cascade.
//!
//! This module contains:
//! - Declaration parsing for inline `style` attributes
//! - Value resolvers (lengths, colors, keywords, shorthands)
//! - TypographicStyle and ContainerStyle with their mappers
//! - Tag-default styles and the cascade walker

mod cascade;
mod container;
mod declaration;
pub mod parse;
mod properties;
mod tag_table;
mod text;
mod types;

// Re-export property types
pub use properties::{
    BorderStyle, Color, FontStyle, FontWeight, HorizontalAlign, Side, TextAlign,
};

// Re-export core style types
pub use types::{ContainerStyle, SizeBounds, TypographicStyle};

pub use declaration::StyleDeclarationSet;

pub use cascade::{Cascade, CascadeOrder};
pub use container::apply_container_declarations;
pub use tag_table::TagStyleTable;
pub use text::apply_text_declarations;

