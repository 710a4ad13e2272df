//! Arena-allocated markup tree.
//!
//! Nodes live in one vector and link to each other by index. Ownership flows
//! from parent to children; the `parent` index is a back-reference used only
//! for upward cascade and list walks.

use html5ever::{LocalName, QualName, ns};

use crate::error::{Error, Result};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value for no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }

    fn to_option(self) -> Option<NodeId> {
        self.is_some().then_some(self)
    }
}

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root.
    Document,
    /// Element with its name and attributes (including a raw `style`).
    Element { name: QualName, attrs: Vec<Attribute> },
    /// Literal text content.
    Text(String),
    /// Comment, kept so the html5ever sink has somewhere to put it.
    Comment(String),
    /// Document type declaration.
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
}

/// Element attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

/// A node in the arena.
#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

fn html_name(local: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(local.to_ascii_lowercase()))
}

/// Arena markup tree with a single document root.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create an empty tree holding only the document root.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId::NONE,
        };
        doc.root = doc.alloc(Node::new(NodeData::Document));
        doc
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a detached element. The tag name is lowercased.
    pub fn create_element(&mut self, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs = attrs
            .iter()
            .map(|(name, value)| Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name.to_ascii_lowercase())),
                value: (*value).to_string(),
            })
            .collect();
        self.create_element_named(html_name(tag), attrs)
    }

    pub(crate) fn create_element_named(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        self.alloc(Node::new(NodeData::Element { name, attrs }))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeData::Text(text.into())))
    }

    pub(crate) fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(Node::new(NodeData::Comment(text)))
    }

    pub(crate) fn create_doctype(
        &mut self,
        name: String,
        public_id: String,
        system_id: String,
    ) -> NodeId {
        self.alloc(Node::new(NodeData::Doctype {
            name,
            public_id,
            system_id,
        }))
    }

    /// Append a detached node as the last child of `parent`.
    ///
    /// Rejects unknown ids, parents that are not the root or an element,
    /// children that already have a parent, and links that would make the
    /// tree cyclic.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_node = self.get(parent).ok_or(Error::UnknownNode(parent))?;
        if !matches!(
            parent_node.data,
            NodeData::Document | NodeData::Element { .. }
        ) {
            return Err(Error::NotAContainer(parent));
        }
        let child_attached = self
            .get(child)
            .ok_or(Error::UnknownNode(child))?
            .parent
            .is_some();
        if child == self.root || self.self_and_ancestors(parent).any(|id| id == child) {
            return Err(Error::WouldCycle { parent, child });
        }
        if child_attached {
            return Err(Error::AlreadyAttached(child));
        }
        self.attach(parent, child);
        Ok(())
    }

    /// Link `child` as the last child of `parent` without validation.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
        }

        if last_child.is_some()
            && let Some(last_node) = self.get_mut(last_child)
        {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a node before a sibling.
    pub(crate) fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let (parent, prev) = match self.get(sibling) {
            Some(n) => (n.parent, n.prev_sibling),
            None => return,
        };

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Append text to the last child if it is a text node, or add a new one.
    pub(crate) fn append_text(&mut self, parent: NodeId, text: &str) {
        let last_child = self.get(parent).map(|n| n.last_child).unwrap_or(NodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let NodeData::Text(existing) = &mut last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text);
        self.attach(parent, text_node);
    }

    /// Unlink a node from its parent and siblings. Its subtree stays intact.
    pub(crate) fn detach(&mut self, target: NodeId) {
        let (parent, prev, next) = match self.get(target) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(target) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Parent of a node, if attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent.to_option())
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let first = self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children {
            doc: self,
            current: first,
        }
    }

    /// Iterate from a node up to the root, the node itself first.
    pub fn self_and_ancestors(&self, id: NodeId) -> Ancestors<'_> {
        let current = if self.get(id).is_some() {
            id
        } else {
            NodeId::NONE
        };
        Ancestors { doc: self, current }
    }

    /// Find the first node matching a predicate (depth-first, document order).
    pub fn find<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node) -> bool,
    {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                if predicate(node) {
                    return Some(id);
                }
                let mut children: Vec<_> = self.children(id).collect();
                children.reverse();
                stack.extend(children);
            }
        }
        None
    }

    /// Find the first element with the given tag name.
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.find(|node| match &node.data {
            NodeData::Element { name, .. } => (*name.local).eq_ignore_ascii_case(tag),
            _ => false,
        })
    }

    /// First text node whose content equals `text`.
    pub fn find_text(&self, text: &str) -> Option<NodeId> {
        self.find(|node| matches!(&node.data, NodeData::Text(t) if t == text))
    }

    /// All elements with the given tag name, in document order.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if self.has_tag(id, tag) {
                found.push(id);
            }
            let mut children: Vec<_> = self.children(id).collect();
            children.reverse();
            stack.extend(children);
        }
        found
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over children of a node.
pub struct Children<'a> {
    doc: &'a Document,
    current: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .doc
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(id)
    }
}

/// Iterator walking parent links toward the root.
pub struct Ancestors<'a> {
    doc: &'a Document,
    current: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self.doc.get(id).map(|n| n.parent).unwrap_or(NodeId::NONE);
        Some(id)
    }
}

/// Element and text accessors.
impl Document {
    /// Lowercase tag name of an element.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&*name.local),
            _ => None,
        })
    }

    /// True if `id` is an element with the given tag (ASCII case-insensitive).
    pub fn has_tag(&self, id: NodeId, tag: &str) -> bool {
        self.tag_name(id).is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    /// Get an attribute value.
    pub fn get_attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| (*a.name.local).eq_ignore_ascii_case(attr_name))
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    /// Check if node is an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    /// Check if node is a text node.
    pub fn is_text(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| matches!(n.data, NodeData::Text(_)))
    }

    /// Content of a text node.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    pub(crate) fn text_content_mut(&mut self, id: NodeId) -> Option<&mut String> {
        self.get_mut(id).and_then(|n| match &mut n.data {
            NodeData::Text(s) => Some(s),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_elements() {
        let mut doc = Document::new();
        let div = doc.create_element("DIV", &[("Style", "color: red")]);
        doc.append(doc.root(), div).unwrap();

        assert_eq!(doc.tag_name(div), Some("div"));
        assert!(doc.has_tag(div, "Div"));
        assert_eq!(doc.get_attr(div, "style"), Some("color: red"));
        assert_eq!(doc.parent(div), Some(doc.root()));
    }

    #[test]
    fn test_find_and_attr_lookup_ignore_case() {
        let mut doc = Document::new();
        let ol = doc.create_element("ol", &[("START", "4")]);
        let li = doc.create_element("li", &[]);
        doc.append(doc.root(), ol).unwrap();
        doc.append(ol, li).unwrap();

        assert_eq!(doc.find_by_tag("LI"), Some(li));
        assert_eq!(doc.find_by_tag("ul"), None);
        assert_eq!(doc.get_attr(ol, "Start"), Some("4"));
        assert_eq!(doc.get_attr(ol, "reversed"), None);
        assert_eq!(doc.get_attr(li, "start"), None);
    }

    #[test]
    fn test_append_children() {
        let mut doc = Document::new();
        let parent = doc.create_element("div", &[]);
        let child1 = doc.create_element("p", &[]);
        let child2 = doc.create_element("p", &[]);

        doc.append(doc.root(), parent).unwrap();
        doc.append(parent, child1).unwrap();
        doc.append(parent, child2).unwrap();

        let children: Vec<_> = doc.children(parent).collect();
        assert_eq!(children, vec![child1, child2]);
    }

    #[test]
    fn test_self_and_ancestors() {
        let mut doc = Document::new();
        let div = doc.create_element("div", &[]);
        let span = doc.create_element("span", &[]);
        let text = doc.create_text("hi");
        doc.append(doc.root(), div).unwrap();
        doc.append(div, span).unwrap();
        doc.append(span, text).unwrap();

        let chain: Vec<_> = doc.self_and_ancestors(text).collect();
        assert_eq!(chain, vec![text, span, div, doc.root()]);
        assert_eq!(doc.self_and_ancestors(NodeId::NONE).count(), 0);
    }

    #[test]
    fn test_append_rejects_text_parent() {
        let mut doc = Document::new();
        let text = doc.create_text("x");
        let span = doc.create_element("span", &[]);
        assert_eq!(doc.append(text, span), Err(Error::NotAContainer(text)));
    }

    #[test]
    fn test_append_rejects_attached_child() {
        let mut doc = Document::new();
        let a = doc.create_element("div", &[]);
        let b = doc.create_element("div", &[]);
        let c = doc.create_element("span", &[]);
        doc.append(a, c).unwrap();
        assert_eq!(doc.append(b, c), Err(Error::AlreadyAttached(c)));
    }

    #[test]
    fn test_append_rejects_cycle() {
        let mut doc = Document::new();
        let outer = doc.create_element("div", &[]);
        let inner = doc.create_element("div", &[]);
        doc.append(outer, inner).unwrap();
        assert_eq!(
            doc.append(inner, outer),
            Err(Error::WouldCycle {
                parent: inner,
                child: outer
            })
        );
        assert_eq!(
            doc.append(inner, inner),
            Err(Error::WouldCycle {
                parent: inner,
                child: inner
            })
        );
    }

    #[test]
    fn test_append_rejects_unknown_node() {
        let mut doc = Document::new();
        let ghost = NodeId(42);
        assert_eq!(doc.append(doc.root(), ghost), Err(Error::UnknownNode(ghost)));
    }

    #[test]
    fn test_text_merging() {
        let mut doc = Document::new();
        let p = doc.create_element("p", &[]);
        doc.append(doc.root(), p).unwrap();

        doc.append_text(p, "Hello, ");
        doc.append_text(p, "World!");

        let children: Vec<_> = doc.children(p).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(doc.text_content(children[0]), Some("Hello, World!"));
    }

    #[test]
    fn test_detach() {
        let mut doc = Document::new();
        let p = doc.create_element("p", &[]);
        let a = doc.create_text("a");
        let b = doc.create_text("b");
        let c = doc.create_text("c");
        doc.append(doc.root(), p).unwrap();
        doc.append(p, a).unwrap();
        doc.append(p, b).unwrap();
        doc.append(p, c).unwrap();

        doc.detach(b);
        assert_eq!(doc.children(p).collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(doc.parent(b), None);
        // Detached nodes can be re-attached through the checked path.
        doc.append(p, b).unwrap();
        assert_eq!(doc.children(p).collect::<Vec<_>>(), vec![a, c, b]);
    }
}
