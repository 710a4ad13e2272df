//! Flattening a line of markup into styled runs.

use crate::dom::{Document, NodeData, NodeId};
use crate::style::{Cascade, TypographicStyle};

/// One unit of output text.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedRun {
    Text {
        text: String,
        style: TypographicStyle,
    },
    /// An explicit `br`, rendered as a single newline in the enclosing style.
    LineBreak { style: TypographicStyle },
}

impl ResolvedRun {
    /// Literal text of the run. A line break reads as `"\n"`.
    pub fn text(&self) -> &str {
        match self {
            ResolvedRun::Text { text, .. } => text,
            ResolvedRun::LineBreak { .. } => "\n",
        }
    }

    pub fn style(&self) -> &TypographicStyle {
        match self {
            ResolvedRun::Text { style, .. } | ResolvedRun::LineBreak { style } => style,
        }
    }
}

/// Text-bearing leaves of a line, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf {
    Text(NodeId),
    Break,
}

fn is_line_break(doc: &Document, node: NodeId) -> bool {
    doc.has_tag(node, "br")
}

fn collect_leaves(doc: &Document, node: NodeId, leaves: &mut Vec<Leaf>) {
    let Some(data) = doc.get(node).map(|n| &n.data) else {
        return;
    };
    match data {
        NodeData::Text(_) => leaves.push(Leaf::Text(node)),
        NodeData::Element { .. } if is_line_break(doc, node) => leaves.push(Leaf::Break),
        NodeData::Element { .. } | NodeData::Document => {
            for child in doc.children(node) {
                collect_leaves(doc, child, leaves);
            }
        }
        NodeData::Comment(_) | NodeData::Doctype { .. } => {}
    }
}

/// Trim the whitespace that opens and closes a line.
///
/// Leading whitespace is removed from the first text of the line and
/// trailing whitespace from the last. A text that trims down to nothing
/// passes the trim on to the next one; a `br` stops it. This edits the text
/// nodes in place and is the only change the renderer makes to the tree.
pub fn trim_line(doc: &mut Document, line: &[NodeId]) {
    let mut leaves = Vec::new();
    for &node in line {
        collect_leaves(doc, node, &mut leaves);
    }

    for leaf in &leaves {
        let Leaf::Text(id) = *leaf else { break };
        let Some(text) = doc.text_content_mut(id) else {
            continue;
        };
        let leading = text.len() - text.trim_start().len();
        text.drain(..leading);
        if !text.is_empty() {
            break;
        }
    }

    for leaf in leaves.iter().rev() {
        let Leaf::Text(id) = *leaf else { break };
        let Some(text) = doc.text_content_mut(id) else {
            continue;
        };
        text.truncate(text.trim_end().len());
        if !text.is_empty() {
            break;
        }
    }
}

/// Walk the line depth-first and emit one run per text node and line break.
///
/// Each node's effective style is composed from its own style and its
/// parent's, threaded down the walk. Elements emit nothing themselves; empty
/// text emits nothing.
pub fn flatten_line(cascade: &Cascade<'_>, line: &[NodeId]) -> Vec<ResolvedRun> {
    let doc = cascade.document();
    let mut runs = Vec::new();
    let mut parent_style: Option<(NodeId, TypographicStyle)> = None;

    for &node in line {
        // Lines are usually siblings, so the parent's style is reused.
        let parent = doc.parent(node).unwrap_or(NodeId::NONE);
        if !matches!(&parent_style, Some((id, _)) if *id == parent) {
            let style = if parent.is_some() {
                cascade.effective_style(parent)
            } else {
                TypographicStyle::default()
            };
            parent_style = Some((parent, style));
        }
        if let Some((_, inherited)) = &parent_style {
            visit(cascade, node, inherited, &mut runs);
        }
    }

    runs
}

fn visit(
    cascade: &Cascade<'_>,
    node: NodeId,
    inherited: &TypographicStyle,
    runs: &mut Vec<ResolvedRun>,
) {
    let doc = cascade.document();
    let Some(data) = doc.get(node).map(|n| &n.data) else {
        return;
    };

    match data {
        NodeData::Text(text) => {
            if !text.is_empty() {
                // Text has no own style.
                runs.push(ResolvedRun::Text {
                    text: text.clone(),
                    style: inherited.clone(),
                });
            }
        }
        NodeData::Element { .. } => {
            let style = cascade.compose(&cascade.own_style(node), inherited);
            if is_line_break(doc, node) {
                runs.push(ResolvedRun::LineBreak { style });
            } else {
                for child in doc.children(node) {
                    visit(cascade, child, &style, runs);
                }
            }
        }
        NodeData::Document => {
            for child in doc.children(node) {
                visit(cascade, child, inherited, runs);
            }
        }
        NodeData::Comment(_) | NodeData::Doctype { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, TagStyleTable};

    fn body_line(doc: &Document) -> Vec<NodeId> {
        let p = doc.find_by_tag("p").expect("p");
        doc.children(p).collect()
    }

    fn texts(runs: &[ResolvedRun]) -> Vec<&str> {
        runs.iter().map(ResolvedRun::text).collect()
    }

    #[test]
    fn test_runs_in_document_order() {
        let doc = Document::parse_html("<p>a<b>b<i>c</i></b>d</p>");
        let table = TagStyleTable::html_defaults();
        let cascade = Cascade::new(&doc, &table);

        let runs = flatten_line(&cascade, &body_line(&doc));
        assert_eq!(texts(&runs), vec!["a", "b", "c", "d"]);
        assert!(!runs[0].style().bold);
        assert!(runs[1].style().bold);
        assert!(runs[2].style().bold && runs[2].style().italic);
        assert!(!runs[3].style().bold);
    }

    #[test]
    fn test_styles_match_effective_style() {
        let doc = Document::parse_html(
            r#"<div style="color: red"><p>x<b style="color: blue">y<u>z</u></b><br></p></div>"#,
        );
        let table = TagStyleTable::html_defaults();
        let cascade = Cascade::new(&doc, &table);

        let runs = flatten_line(&cascade, &body_line(&doc));
        let y = doc.find_text("y").unwrap();
        let z = doc.find_text("z").unwrap();
        assert_eq!(runs[1].style(), &cascade.effective_style(y));
        assert_eq!(runs[2].style(), &cascade.effective_style(z));
        assert_eq!(runs[2].style().color, Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_line_break_run() {
        let doc = Document::parse_html("<p>one<br>two</p>");
        let table = TagStyleTable::new();
        let cascade = Cascade::new(&doc, &table);

        let runs = flatten_line(&cascade, &body_line(&doc));
        assert_eq!(texts(&runs), vec!["one", "\n", "two"]);
        assert!(matches!(runs[1], ResolvedRun::LineBreak { .. }));
    }

    #[test]
    fn test_comments_emit_nothing() {
        let doc = Document::parse_html("<p>a<!-- note -->b</p>");
        let table = TagStyleTable::new();
        let cascade = Cascade::new(&doc, &table);
        let runs = flatten_line(&cascade, &body_line(&doc));
        assert_eq!(texts(&runs), vec!["a", "b"]);
    }

    #[test]
    fn test_trim_line_ends_only() {
        let mut doc = Document::parse_html("<p>  lead <b> mid </b> tail  </p>");
        let line = body_line(&doc);
        trim_line(&mut doc, &line);

        let table = TagStyleTable::new();
        let cascade = Cascade::new(&doc, &table);
        let runs = flatten_line(&cascade, &line);
        assert_eq!(texts(&runs), vec!["lead ", " mid ", " tail"]);
    }

    #[test]
    fn test_trim_passes_through_blank_text() {
        let mut doc = Document::new();
        let root = doc.root();
        let p = doc.create_element("p", &[]);
        doc.append(root, p).unwrap();
        let blank = doc.create_text("   ");
        let b = doc.create_element("b", &[]);
        let word = doc.create_text("  word  ");
        let tail = doc.create_text(" \n");
        doc.append(p, blank).unwrap();
        doc.append(p, b).unwrap();
        doc.append(b, word).unwrap();
        doc.append(p, tail).unwrap();

        let line: Vec<_> = doc.children(p).collect();
        trim_line(&mut doc, &line);
        assert_eq!(doc.text_content(blank), Some(""));
        assert_eq!(doc.text_content(word), Some("word"));
        assert_eq!(doc.text_content(tail), Some(""));

        let table = TagStyleTable::new();
        let runs = flatten_line(&Cascade::new(&doc, &table), &line);
        assert_eq!(texts(&runs), vec!["word"]);
    }

    #[test]
    fn test_trim_stops_at_break() {
        let mut doc = Document::parse_html("<p><br> x </p>");
        let line = body_line(&doc);
        trim_line(&mut doc, &line);
        let x = doc.find_text(" x").unwrap();
        assert_eq!(doc.text_content(x), Some(" x"));
    }

    #[test]
    fn test_trim_is_idempotent() {
        let mut doc = Document::parse_html("<p> a <i> b </i> c </p>");
        let line = body_line(&doc);
        let table = TagStyleTable::new();

        trim_line(&mut doc, &line);
        let first = flatten_line(&Cascade::new(&doc, &table), &line);
        trim_line(&mut doc, &line);
        let second = flatten_line(&Cascade::new(&doc, &table), &line);
        assert_eq!(first, second);
    }
}
