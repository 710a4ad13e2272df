//! Container style mapper: inline declarations onto a ContainerStyle.

use crate::render::ContainerSink;

use super::declaration::{Applied, StyleDeclarationSet};
use super::parse::{
    resolve_background_color, resolve_border, resolve_border_width, resolve_box_shorthand,
    resolve_color, resolve_length, resolve_text_align,
};
use super::properties::{HorizontalAlign, Side};
use super::types::ContainerStyle;

impl ContainerStyle {
    /// A copy of this style with `declarations` applied in order.
    ///
    /// An empty declaration set returns an identical style.
    pub fn with_declarations(&self, declarations: &StyleDeclarationSet) -> ContainerStyle {
        apply_container_declarations(self, declarations)
    }

    /// Replay this style as calls on a layout container.
    ///
    /// Only properties that were set are emitted: alignment other than
    /// `None`, a background, non-zero insets, size bounds, and a border once
    /// it has a width.
    pub fn apply_to<C: ContainerSink + ?Sized>(&self, sink: &mut C) {
        if self.align != HorizontalAlign::None {
            sink.set_alignment(self.align);
        }
        if let Some(ref background) = self.background {
            sink.set_background(background);
        }
        for side in Side::ALL {
            let inset = self.padding(side);
            if inset != 0.0 {
                sink.set_padding(side, inset);
            }
        }
        if !self.size.is_empty() {
            sink.set_size(self.size);
        }
        if let Some(width) = self.border_width {
            sink.set_border(width, self.border_color.as_ref());
        }
    }
}

/// Apply a declaration set onto `base`, returning the new style.
pub fn apply_container_declarations(
    base: &ContainerStyle,
    declarations: &StyleDeclarationSet,
) -> ContainerStyle {
    let mut style = base.clone();
    declarations.apply_each("container", |property, value| {
        apply_container_declaration(&mut style, property, value)
    });
    style
}

fn apply_container_declaration(style: &mut ContainerStyle, property: &str, value: &str) -> Applied {
    match property {
        "text-align" => resolve_text_align(value)
            .map(|align| {
                // justify has no container counterpart
                if let Some(align) = HorizontalAlign::from_text_align(align) {
                    style.align = align;
                }
            })
            .into(),
        "background" => resolve_background_color(value)
            .map(|c| style.background = Some(c))
            .into(),
        "background-color" => resolve_color(value)
            .map(|c| style.background = Some(c))
            .into(),

        // Margins share the padding insets.
        "padding" | "margin" => resolve_box_shorthand(value)
            .map(|insets| {
                style.padding_top = insets.top;
                style.padding_right = insets.right;
                style.padding_bottom = insets.bottom;
                style.padding_left = insets.left;
            })
            .into(),
        "padding-top" | "margin-top" => set_inset(style, Side::Top, value),
        "padding-right" | "margin-right" => set_inset(style, Side::Right, value),
        "padding-bottom" | "margin-bottom" => set_inset(style, Side::Bottom, value),
        "padding-left" | "margin-left" => set_inset(style, Side::Left, value),

        "width" => resolve_length(value)
            .map(|v| style.size.width = Some(v))
            .into(),
        "min-width" => resolve_length(value)
            .map(|v| style.size.min_width = Some(v))
            .into(),
        "max-width" => resolve_length(value)
            .map(|v| style.size.max_width = Some(v))
            .into(),
        "height" => resolve_length(value)
            .map(|v| style.size.height = Some(v))
            .into(),
        "min-height" => resolve_length(value)
            .map(|v| style.size.min_height = Some(v))
            .into(),
        "max-height" => resolve_length(value)
            .map(|v| style.size.max_height = Some(v))
            .into(),

        "border" => resolve_border(value)
            .map(|border| {
                if let Some(width) = border.width {
                    style.border_width = Some(width);
                }
                if let Some(color) = border.color {
                    style.border_color = Some(color);
                }
            })
            .into(),
        "border-width" => resolve_border_width(value)
            .map(|w| style.border_width = Some(w))
            .into(),
        "border-color" => resolve_color(value)
            .map(|c| style.border_color = Some(c))
            .into(),
        _ => Applied::Ignored,
    }
}

fn set_inset(style: &mut ContainerStyle, side: Side, value: &str) -> Applied {
    resolve_length(value)
        .map(|v| *style.padding_mut(side) = v)
        .into()
}
