//! Markup tree consumed by the style cascade and run flattener.
//!
//! The tree is an index arena: parents own their children, and each node
//! keeps a plain index back to its parent for upward walks. Trees come from
//! [`Document::parse_html`] or are assembled by hand with
//! [`Document::create_element`], [`Document::create_text`] and
//! [`Document::append`].

mod arena;
mod tree_sink;

pub use arena::{Ancestors, Attribute, Children, Document, Node, NodeData, NodeId};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

use tree_sink::ArenaSink;

impl Document {
    /// Parse an HTML document (or fragment, which html5ever wraps in
    /// `html`/`body`) into an arena tree.
    pub fn parse_html(html: &str) -> Document {
        let sink = ArenaSink::new();
        parse_document(sink, ParseOpts::default())
            .from_utf8()
            .one(html.as_bytes())
            .into_document()
    }

    /// The `body` element of a parsed document, or the root if absent.
    pub fn body(&self) -> NodeId {
        self.find_by_tag("body").unwrap_or(self.root())
    }
}
