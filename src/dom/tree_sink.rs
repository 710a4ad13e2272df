//! html5ever TreeSink implementation for the markup arena.

use std::cell::RefCell;
use std::collections::HashMap;

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName};

use super::arena::{Attribute, Document, NodeData, NodeId};

/// Handle used by TreeSink to reference nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeHandle(pub NodeId);

impl Default for NodeHandle {
    fn default() -> Self {
        NodeHandle(NodeId::NONE)
    }
}

/// TreeSink that builds a [`Document`].
///
/// html5ever's TreeSink takes `&self`, so the arena sits behind a RefCell.
pub struct ArenaSink {
    doc: RefCell<Document>,
    /// Element names handed out by `elem_name`. Boxed and never removed, so
    /// the pointees stay put while the arena vector grows.
    names: RefCell<HashMap<NodeId, Box<QualName>>>,
    quirks_mode: RefCell<QuirksMode>,
}

impl Default for ArenaSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaSink {
    pub fn new() -> Self {
        Self {
            doc: RefCell::new(Document::new()),
            names: RefCell::new(HashMap::new()),
            quirks_mode: RefCell::new(QuirksMode::NoQuirks),
        }
    }

    /// Consume the sink and return the tree.
    pub fn into_document(self) -> Document {
        self.doc.into_inner()
    }
}

impl TreeSink for ArenaSink {
    type Handle = NodeHandle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, msg: std::borrow::Cow<'static, str>) {
        tracing::trace!(error = %msg, "html parse error");
    }

    fn get_document(&self) -> Self::Handle {
        NodeHandle(self.doc.borrow().root())
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let names = self.names.borrow();
        match names.get(&target.0) {
            Some(name) => {
                let ptr: *const QualName = &**name;
                // SAFETY: boxes in `names` are only ever inserted, never
                // replaced or dropped before `self`, so the heap QualName
                // outlives the returned reference.
                unsafe { &*ptr }
            }
            None => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let converted_attrs: Vec<Attribute> = attrs
            .into_iter()
            .map(|a| Attribute {
                name: a.name,
                value: a.value.to_string(),
            })
            .collect();

        let id = self
            .doc
            .borrow_mut()
            .create_element_named(name.clone(), converted_attrs);
        self.names.borrow_mut().insert(id, Box::new(name));
        NodeHandle(id)
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        NodeHandle(self.doc.borrow_mut().create_comment(text.to_string()))
    }

    fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Self::Handle {
        NodeHandle(self.doc.borrow_mut().create_comment(String::new()))
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let mut doc = self.doc.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => doc.attach(parent.0, node.0),
            NodeOrText::AppendText(text) => doc.append_text(parent.0, &text),
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let parent = self.doc.borrow().parent(element.0);
        match parent {
            Some(_) => self.append_before_sibling(element, child),
            None => self.append(prev_element, child),
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        let mut doc = self.doc.borrow_mut();
        let root = doc.root();
        let doctype = doc.create_doctype(
            name.to_string(),
            public_id.to_string(),
            system_id.to_string(),
        );
        doc.attach(root, doctype);
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template contents are not tracked separately.
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x.0 == y.0
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        *self.quirks_mode.borrow_mut() = mode;
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let mut doc = self.doc.borrow_mut();
        match new_node {
            NodeOrText::AppendNode(node) => doc.insert_before(sibling.0, node.0),
            NodeOrText::AppendText(text) => {
                let text_node = doc.create_text(text.to_string());
                doc.insert_before(sibling.0, text_node);
            }
        }
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Html5Attribute>) {
        let mut doc = self.doc.borrow_mut();
        if let Some(node) = doc.get_mut(target.0)
            && let NodeData::Element {
                attrs: existing, ..
            } = &mut node.data
        {
            for attr in attrs {
                if !existing.iter().any(|a| a.name == attr.name) {
                    existing.push(Attribute {
                        name: attr.name,
                        value: attr.value.to_string(),
                    });
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.doc.borrow_mut().detach(target.0);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let children: Vec<_> = self.doc.borrow().children(node.0).collect();
        let mut doc = self.doc.borrow_mut();
        for child in children {
            doc.detach(child);
            doc.attach(new_parent.0, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_parse() {
        let doc = Document::parse_html("<html><body><p>Hello</p></body></html>");

        // document + html + head + body + p + text
        assert!(doc.len() > 3);

        let p = doc.find_by_tag("p").expect("should find p");
        let text_id = doc.children(p).next().expect("p should have child");
        assert_eq!(doc.text_content(text_id), Some("Hello"));
        assert_eq!(
            doc.parent(p).and_then(|body| doc.tag_name(body)),
            Some("body")
        );
    }

    #[test]
    fn test_style_attribute_survives() {
        let doc = Document::parse_html(r#"<b STYLE="color: blue">X</b>"#);
        let b = doc.find_by_tag("b").expect("should find b");
        assert_eq!(doc.get_attr(b, "style"), Some("color: blue"));
    }

    #[test]
    fn test_misnested_markup_is_repaired() {
        // The adoption agency algorithm exercises reparenting and
        // insertion before siblings.
        let doc = Document::parse_html("<p><b>1<i>2</b>3</i></p>");
        let p = doc.find_by_tag("p").expect("should find p");
        let mut text = String::new();
        let mut stack = vec![p];
        while let Some(id) = stack.pop() {
            if let Some(t) = doc.text_content(id) {
                text.push_str(t);
            }
            let mut children: Vec<_> = doc.children(id).collect();
            children.reverse();
            stack.extend(children);
        }
        assert_eq!(text, "123");
        assert_eq!(doc.find_all_by_tag("i").len(), 2);
    }
}
