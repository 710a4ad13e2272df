//! # runweave
//!
//! Inline-style cascade and run flattening for HTML fragments handed to a
//! layout engine.
//!
//! ## Features
//!
//! - Parse inline `style` attributes into ordered declaration sets
//! - Resolve CSS lengths, colors, keywords and box/border shorthands
//! - Map declarations onto text styles and block container styles
//! - Cascade tag defaults and inline styles down the ancestor chain
//! - Flatten a line of markup into styled runs with list markers
//!
//! ## Quick Start
//!
//! ```
//! use runweave::{Document, LineRenderer, Recorder, TagStyleTable};
//!
//! let mut doc = Document::parse_html(
//!     r#"<ul><li style="color: #336699">Buy <b>milk</b> </li></ul>"#,
//! );
//! let li = doc.find_by_tag("li").unwrap();
//! let line: Vec<_> = doc.children(li).collect();
//!
//! let renderer = LineRenderer::new(TagStyleTable::html_defaults());
//! let (mut container, mut text) = (Recorder::new(), Recorder::new());
//! renderer.render_line(&mut doc, &line, &mut container, &mut text);
//!
//! assert_eq!(container.marker(), Some("•  "));
//! let runs: Vec<_> = text.runs().collect();
//! assert_eq!(runs[0].0, "Buy ");
//! assert_eq!(runs[1].0, "milk");
//! assert!(runs[1].1.bold);
//! ```
//!
//! ## Styling without rendering
//!
//! ```
//! use runweave::style::{StyleDeclarationSet, TypographicStyle};
//!
//! let decls = StyleDeclarationSet::parse("font-weight: bold; font-size: 12pt");
//! let style = TypographicStyle::default().with_declarations(&decls);
//! assert!(style.bold);
//! assert_eq!(style.font_size, Some(12.0));
//! ```

pub mod dom;
pub mod error;
pub mod render;
pub mod style;

pub use dom::{Document, NodeId};
pub use error::{Error, Result};
pub use render::{ContainerSink, LineRenderer, Recorder, RenderOptions, ResolvedRun, TextSink};
pub use style::{
    Cascade, CascadeOrder, ContainerStyle, StyleDeclarationSet, TagStyleTable, TypographicStyle,
};
