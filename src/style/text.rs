//! Text style mapper: inline declarations onto a TypographicStyle.

use super::declaration::{Applied, StyleDeclarationSet};
use super::parse::{
    resolve_background_color, resolve_color, resolve_font_family, resolve_font_size,
    resolve_font_style, resolve_font_weight, resolve_length, resolve_line_height,
    resolve_text_decoration,
};
use super::properties::FontStyle;
use super::types::TypographicStyle;

impl TypographicStyle {
    /// A copy of this style with `declarations` applied in order.
    ///
    /// Unrecognized properties and unresolvable values leave the style
    /// untouched.
    pub fn with_declarations(&self, declarations: &StyleDeclarationSet) -> TypographicStyle {
        apply_text_declarations(self, declarations)
    }
}

/// Apply a declaration set onto `base`, returning the new style.
pub fn apply_text_declarations(
    base: &TypographicStyle,
    declarations: &StyleDeclarationSet,
) -> TypographicStyle {
    let mut style = base.clone();
    declarations.apply_each("text", |property, value| {
        apply_text_declaration(&mut style, property, value)
    });
    style
}

fn apply_text_declaration(style: &mut TypographicStyle, property: &str, value: &str) -> Applied {
    match property {
        "color" => resolve_color(value).map(|c| style.color = Some(c)).into(),
        "background-color" => resolve_color(value)
            .map(|c| style.background = Some(c))
            .into(),
        "background" => resolve_background_color(value)
            .map(|c| style.background = Some(c))
            .into(),
        "font-weight" => resolve_font_weight(value)
            .map(|w| style.bold |= w.is_bold())
            .into(),
        "font-style" => resolve_font_style(value)
            .map(|s| style.italic |= matches!(s, FontStyle::Italic | FontStyle::Oblique))
            .into(),
        "font-family" => resolve_font_family(value)
            .map(|f| style.font_family = Some(f))
            .into(),
        "font-size" => resolve_font_size(value)
            .map(|s| style.font_size = Some(s))
            .into(),
        "text-decoration" | "text-decoration-line" => resolve_text_decoration(value)
            .map(|d| {
                style.underline |= d.underline;
                style.strikethrough |= d.line_through;
            })
            .into(),
        "line-height" => resolve_line_height(value)
            .map(|lh| style.line_height = Some(lh))
            .into(),
        "letter-spacing" => resolve_length(value)
            .map(|s| style.letter_spacing = Some(s))
            .into(),
        "word-spacing" => resolve_length(value)
            .map(|s| style.word_spacing = Some(s))
            .into(),
        _ => Applied::Ignored,
    }
}
