//! Ancestor cascade of text styles.
//!
//! A node's own style is its tag default with its inline `style` applied.
//! The effective style combines the own styles of the node and every
//! ancestor up to the root. Conflicts resolve by [`CascadeOrder`]: under the
//! default, the outermost ancestor that sets a property wins.

use crate::dom::{Document, NodeId};

use super::declaration::StyleDeclarationSet;
use super::tag_table::TagStyleTable;
use super::types::TypographicStyle;

/// Which end of the ancestor chain wins a property both ends set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CascadeOrder {
    /// The node's own style is laid down first and each ancestor, parent to
    /// root, is laid over it. The root has the final say.
    #[default]
    OutermostWins,
    /// Root first, node last: the node has the final say, as in CSS
    /// inheritance.
    InnermostWins,
}

/// Style resolution over one document and tag table.
#[derive(Debug, Clone, Copy)]
pub struct Cascade<'a> {
    doc: &'a Document,
    table: &'a TagStyleTable,
    order: CascadeOrder,
}

impl<'a> Cascade<'a> {
    pub fn new(doc: &'a Document, table: &'a TagStyleTable) -> Self {
        Self {
            doc,
            table,
            order: CascadeOrder::default(),
        }
    }

    pub fn with_order(mut self, order: CascadeOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> CascadeOrder {
        self.order
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Tag default overlaid with the node's inline style. Text and other
    /// non-element nodes have no own style.
    pub fn own_style(&self, node: NodeId) -> TypographicStyle {
        let Some(tag) = self.doc.tag_name(node) else {
            return TypographicStyle::default();
        };
        let base = self.table.style_for(tag);
        match self.doc.get_attr(node, "style") {
            Some(inline) => base.with_declarations(&StyleDeclarationSet::parse(inline)),
            None => base,
        }
    }

    /// Own styles of the node and all its ancestors, combined.
    pub fn effective_style(&self, node: NodeId) -> TypographicStyle {
        let chain = self.doc.self_and_ancestors(node);
        match self.order {
            CascadeOrder::OutermostWins => chain.fold(TypographicStyle::default(), |style, id| {
                style.overlay(&self.own_style(id))
            }),
            CascadeOrder::InnermostWins => {
                let chain: Vec<NodeId> = chain.collect();
                chain
                    .into_iter()
                    .rev()
                    .fold(TypographicStyle::default(), |style, id| {
                        style.overlay(&self.own_style(id))
                    })
            }
        }
    }

    /// Combine a node's own style with the effective style of its parent.
    ///
    /// Overlay is associative, so folding `compose` down from the root gives
    /// the same result as [`effective_style`](Self::effective_style). This
    /// lets a tree walk thread the parent's style down instead of walking
    /// back up from every node.
    pub fn compose(&self, own: &TypographicStyle, inherited: &TypographicStyle) -> TypographicStyle {
        match self.order {
            CascadeOrder::OutermostWins => own.overlay(inherited),
            CascadeOrder::InnermostWins => inherited.overlay(own),
        }
    }
}
