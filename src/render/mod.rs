//! Rendering lines of markup into layout sinks.
//!
//! A line is a run of sibling nodes laid out as one paragraph. Rendering a
//! line resolves its list context, opens a marker row when the line sits in
//! a list, trims the line's outer whitespace and emits its styled runs.
//!
//! ```
//! use runweave::dom::Document;
//! use runweave::render::{LineRenderer, Recorder};
//! use runweave::style::TagStyleTable;
//!
//! let mut doc = Document::parse_html("<ol><li> first <b>item</b></li></ol>");
//! let li = doc.find_by_tag("li").unwrap();
//! let line: Vec<_> = doc.children(li).collect();
//!
//! let renderer = LineRenderer::new(TagStyleTable::html_defaults());
//! let (mut container, mut text) = (Recorder::new(), Recorder::new());
//! assert!(renderer.render_line(&mut doc, &line, &mut container, &mut text));
//! assert_eq!(container.marker(), Some("1. "));
//! assert_eq!(text.text(), "first item");
//! ```

mod flatten;
mod list;
mod sink;

pub use flatten::{ResolvedRun, flatten_line, trim_line};
pub use list::{ListContext, ListMarker, is_block_tag, is_list_tag};
pub use sink::{ContainerSink, Recorder, SinkEvent, TextSink};

use crate::dom::{Document, NodeId};
use crate::style::{Cascade, CascadeOrder, ContainerStyle, StyleDeclarationSet, TagStyleTable};

/// Lead column glyph for unordered list items.
pub const DEFAULT_BULLET: &str = "•  ";

/// Minimum width of the lead column, in points.
pub const DEFAULT_LEAD_COLUMN_WIDTH: f32 = 26.0;

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Which end of the ancestor chain wins style conflicts.
    pub cascade_order: CascadeOrder,
    /// Minimum width of the list marker column, in points.
    pub lead_column_min_width: f32,
    /// Lead column text for unordered list items.
    pub bullet: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cascade_order: CascadeOrder::default(),
            lead_column_min_width: DEFAULT_LEAD_COLUMN_WIDTH,
            bullet: DEFAULT_BULLET.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn with_cascade_order(mut self, order: CascadeOrder) -> Self {
        self.cascade_order = order;
        self
    }

    pub fn with_lead_column_min_width(mut self, width: f32) -> Self {
        self.lead_column_min_width = width;
        self
    }

    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }
}

/// Renders lines of one or more documents against a fixed tag table.
#[derive(Debug, Clone, Default)]
pub struct LineRenderer {
    table: TagStyleTable,
    options: RenderOptions,
}

impl LineRenderer {
    pub fn new(table: TagStyleTable) -> Self {
        Self::with_options(table, RenderOptions::default())
    }

    pub fn with_options(table: TagStyleTable, options: RenderOptions) -> Self {
        Self { table, options }
    }

    pub fn table(&self) -> &TagStyleTable {
        &self.table
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Cascade over `doc` with this renderer's table and order.
    pub fn cascade<'a>(&'a self, doc: &'a Document) -> Cascade<'a> {
        Cascade::new(doc, &self.table).with_order(self.options.cascade_order)
    }

    /// Styled runs of a line, without trimming it.
    pub fn flatten(&self, doc: &Document, line: &[NodeId]) -> Vec<ResolvedRun> {
        flatten_line(&self.cascade(doc), line)
    }

    /// Render one line.
    ///
    /// Opens a marker row on `container` when the line needs a lead column,
    /// trims the line in `doc`, then starts a line on `text` and emits every
    /// run. Returns `false`, emitting nothing, when the line is empty or its
    /// first node has no enclosing list item or block.
    pub fn render_line<C, T>(
        &self,
        doc: &mut Document,
        line: &[NodeId],
        container: &mut C,
        text: &mut T,
    ) -> bool
    where
        C: ContainerSink + ?Sized,
        T: TextSink + ?Sized,
    {
        let Some(&first) = line.first() else {
            tracing::debug!("empty line skipped");
            return false;
        };
        let Some(context) = ListContext::resolve(doc, first) else {
            tracing::debug!(node = first.0, "line has no enclosing block, skipped");
            return false;
        };

        if context.needs_lead_column() {
            let prefix = context.marker.prefix(&self.options.bullet);
            container.begin_marker_row(&prefix, self.options.lead_column_min_width);
        }

        trim_line(doc, line);
        let runs = self.flatten(doc, line);

        text.begin_line();
        for run in &runs {
            text.emit_run(run.text(), run.style());
        }

        tracing::trace!(
            node = first.0,
            marker = ?context.marker,
            runs = runs.len(),
            "line rendered"
        );
        true
    }

    /// Map the inline style of a block onto `container` and return the
    /// resolved container style.
    pub fn apply_block_style<C>(&self, doc: &Document, node: NodeId, container: &mut C) -> ContainerStyle
    where
        C: ContainerSink + ?Sized,
    {
        let style = match doc.get_attr(node, "style") {
            Some(inline) => {
                ContainerStyle::default().with_declarations(&StyleDeclarationSet::parse(inline))
            }
            None => ContainerStyle::default(),
        };
        style.apply_to(container);
        style
    }
}
