//! Output interfaces for the external layout engine.

use crate::style::{Color, HorizontalAlign, Side, SizeBounds, TypographicStyle};

/// A layout container being configured for one line or block.
pub trait ContainerSink {
    fn set_alignment(&mut self, align: HorizontalAlign);

    fn set_background(&mut self, color: &Color);

    /// Inset on one side, in points.
    fn set_padding(&mut self, side: Side, inset: f32);

    fn set_size(&mut self, bounds: SizeBounds);

    /// Border of `width` points on every side.
    fn set_border(&mut self, width: f32, color: Option<&Color>);

    /// Split the container into a row: an auto-sized lead item of at least
    /// `min_width` points holding `prefix` centered, and a relative-width
    /// remainder. Everything emitted afterwards goes into the remainder.
    fn begin_marker_row(&mut self, prefix: &str, min_width: f32);
}

/// A paragraph of styled text being built.
pub trait TextSink {
    /// Start the text body of a line. Called once per rendered line, after
    /// any marker row.
    fn begin_line(&mut self);

    fn emit_run(&mut self, text: &str, style: &TypographicStyle);
}

/// One call recorded by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Alignment(HorizontalAlign),
    Background(Color),
    Padding(Side, f32),
    Size(SizeBounds),
    Border(f32, Option<Color>),
    MarkerRow { prefix: String, min_width: f32 },
    BeginLine,
    Run { text: String, style: TypographicStyle },
}

/// Sink that records every call in order, for inspection and tests.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub events: Vec<SinkEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every run, concatenated.
    pub fn text(&self) -> String {
        self.runs().map(|(text, _)| text).collect()
    }

    /// Recorded runs in order.
    pub fn runs(&self) -> impl Iterator<Item = (&str, &TypographicStyle)> {
        self.events.iter().filter_map(|event| match event {
            SinkEvent::Run { text, style } => Some((text.as_str(), style)),
            _ => None,
        })
    }

    /// Prefix of the marker row, if one was started.
    pub fn marker(&self) -> Option<&str> {
        self.events.iter().find_map(|event| match event {
            SinkEvent::MarkerRow { prefix, .. } => Some(prefix.as_str()),
            _ => None,
        })
    }
}

impl ContainerSink for Recorder {
    fn set_alignment(&mut self, align: HorizontalAlign) {
        self.events.push(SinkEvent::Alignment(align));
    }

    fn set_background(&mut self, color: &Color) {
        self.events.push(SinkEvent::Background(color.clone()));
    }

    fn set_padding(&mut self, side: Side, inset: f32) {
        self.events.push(SinkEvent::Padding(side, inset));
    }

    fn set_size(&mut self, bounds: SizeBounds) {
        self.events.push(SinkEvent::Size(bounds));
    }

    fn set_border(&mut self, width: f32, color: Option<&Color>) {
        self.events.push(SinkEvent::Border(width, color.cloned()));
    }

    fn begin_marker_row(&mut self, prefix: &str, min_width: f32) {
        self.events.push(SinkEvent::MarkerRow {
            prefix: prefix.to_string(),
            min_width,
        });
    }
}

impl TextSink for Recorder {
    fn begin_line(&mut self) {
        self.events.push(SinkEvent::BeginLine);
    }

    fn emit_run(&mut self, text: &str, style: &TypographicStyle) {
        self.events.push(SinkEvent::Run {
            text: text.to_string(),
            style: style.clone(),
        });
    }
}
