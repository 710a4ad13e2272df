//! Resolved style records: TypographicStyle and ContainerStyle.

use super::properties::{Color, HorizontalAlign, Side};

/// Character-level style of a text run.
///
/// Optional fields left as `None` were never set by any layer. Booleans are
/// only ever switched on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypographicStyle {
    // Colors
    pub color: Option<Color>,
    pub background: Option<Color>,

    // Emphasis
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,

    // Font
    pub font_family: Option<String>,
    /// Points.
    pub font_size: Option<f32>,
    /// Multiplier of the font size.
    pub line_height: Option<f32>,

    // Spacing, in points
    pub letter_spacing: Option<f32>,
    pub word_spacing: Option<f32>,
}

impl TypographicStyle {
    /// Check if no property has been set.
    pub fn is_default(&self) -> bool {
        *self == TypographicStyle::default()
    }

    /// Lay `layer` over this style.
    ///
    /// Every property set in `layer` replaces the current one. Flags are
    /// combined with OR, so a layer can switch emphasis on but never off.
    pub fn overlay(&self, layer: &TypographicStyle) -> TypographicStyle {
        TypographicStyle {
            color: layer.color.clone().or_else(|| self.color.clone()),
            background: layer.background.clone().or_else(|| self.background.clone()),
            bold: self.bold || layer.bold,
            italic: self.italic || layer.italic,
            underline: self.underline || layer.underline,
            strikethrough: self.strikethrough || layer.strikethrough,
            font_family: layer
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            font_size: layer.font_size.or(self.font_size),
            line_height: layer.line_height.or(self.line_height),
            letter_spacing: layer.letter_spacing.or(self.letter_spacing),
            word_spacing: layer.word_spacing.or(self.word_spacing),
        }
    }
}

/// Width and height constraints of a container, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeBounds {
    pub width: Option<f32>,
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub height: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
}

impl SizeBounds {
    /// True when no bound is set.
    pub fn is_empty(&self) -> bool {
        *self == SizeBounds::default()
    }
}

/// Box-level style of a layout container.
///
/// The target layout model has a single inset per side, so `padding-*` and
/// `margin-*` both resolve to the padding fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContainerStyle {
    pub align: HorizontalAlign,
    pub background: Option<Color>,

    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,

    pub size: SizeBounds,

    pub border_width: Option<f32>,
    pub border_color: Option<Color>,
}

impl ContainerStyle {
    /// Check if no property has been set.
    pub fn is_default(&self) -> bool {
        *self == ContainerStyle::default()
    }

    /// Inset on one side.
    pub fn padding(&self, side: Side) -> f32 {
        match side {
            Side::Top => self.padding_top,
            Side::Right => self.padding_right,
            Side::Bottom => self.padding_bottom,
            Side::Left => self.padding_left,
        }
    }

    pub(crate) fn padding_mut(&mut self, side: Side) -> &mut f32 {
        match side {
            Side::Top => &mut self.padding_top,
            Side::Right => &mut self.padding_right,
            Side::Bottom => &mut self.padding_bottom,
            Side::Left => &mut self.padding_left,
        }
    }
}
