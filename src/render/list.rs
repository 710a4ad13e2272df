//! List context of a line: the enclosing list item or block, and its marker.

use crate::dom::{Document, NodeId};

/// Elements that start a block of their own.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "blockquote", "pre",
    "section", "article", "header", "footer", "nav", "aside", "main", "figure", "figcaption",
    "table", "tr", "td", "th", "dl", "dt", "dd", "address", "hr", "body", "html", "center",
];

/// True for block-level tags (ASCII case-insensitive).
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.iter().any(|block| block.eq_ignore_ascii_case(tag))
}

/// True for `ul` and `ol`.
pub fn is_list_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("ul") || tag.eq_ignore_ascii_case("ol")
}

/// Marker shown in the lead column of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListMarker {
    #[default]
    None,
    Bullet,
    /// 1-based position in an ordered list.
    Ordinal(u32),
}

impl ListMarker {
    /// Lead column text: empty for `None`, `bullet` for `Bullet`, `"{n}. "`
    /// for an ordinal.
    pub fn prefix(&self, bullet: &str) -> String {
        match self {
            ListMarker::None => String::new(),
            ListMarker::Bullet => bullet.to_string(),
            ListMarker::Ordinal(n) => format!("{n}. "),
        }
    }
}

/// Where a line sits with respect to lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListContext {
    /// The enclosing `li`, or the nearest block when there is none.
    pub anchor: NodeId,
    pub marker: ListMarker,
    /// The anchor is a list container or sits inside one.
    pub in_list: bool,
}

impl ListContext {
    /// Resolve the list context of the line starting at `first`.
    ///
    /// Returns `None` when `first` has neither a list item nor a block among
    /// itself and its ancestors; such a line is not rendered.
    pub fn resolve(doc: &Document, first: NodeId) -> Option<ListContext> {
        let anchor = find_list_item(doc, first).or_else(|| nearest_block(doc, first))?;

        let marker = if doc.has_tag(anchor, "li") {
            list_item_marker(doc, anchor)
        } else {
            ListMarker::None
        };
        let in_list = doc
            .self_and_ancestors(anchor)
            .any(|id| doc.tag_name(id).is_some_and(is_list_tag));

        Some(ListContext {
            anchor,
            marker,
            in_list,
        })
    }

    /// A lead column is laid out for list markers and for any line inside a
    /// list container, even without a marker.
    pub fn needs_lead_column(&self) -> bool {
        self.marker != ListMarker::None || self.in_list
    }
}

/// Nearest `li` among `node` and its ancestors. A `ul` or `ol` reached first
/// ends the search.
fn find_list_item(doc: &Document, node: NodeId) -> Option<NodeId> {
    for id in doc.self_and_ancestors(node) {
        match doc.tag_name(id) {
            Some(tag) if is_list_tag(tag) => return None,
            Some("li") => return Some(id),
            _ => {}
        }
    }
    None
}

fn nearest_block(doc: &Document, node: NodeId) -> Option<NodeId> {
    doc.self_and_ancestors(node)
        .find(|&id| doc.tag_name(id).is_some_and(is_block_tag))
}

/// Marker of a list item, decided by its nearest list container.
fn list_item_marker(doc: &Document, item: NodeId) -> ListMarker {
    let list = doc
        .self_and_ancestors(item)
        .skip(1)
        .find(|&id| doc.tag_name(id).is_some_and(is_list_tag));

    let Some(list) = list else {
        return ListMarker::None;
    };
    if doc.has_tag(list, "ul") {
        return ListMarker::Bullet;
    }

    let position = match doc.parent(item) {
        Some(parent) => doc
            .children(parent)
            .take_while(|&id| id != item)
            .filter(|&id| doc.has_tag(id, "li"))
            .count() as i64,
        None => 0,
    };
    let start = doc
        .get_attr(list, "start")
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(1);

    let ordinal = (start + position).clamp(1, i64::from(u32::MAX));
    ListMarker::Ordinal(ordinal as u32)
}
