//! Font-related CSS parsing.

use cssparser::{Parser, Token};

use crate::style::properties::{FontStyle, FontWeight};

use super::keywords::parse_font_style;
use super::values::{parse_length, parse_value};

/// Reference font size in pixels used to turn `px` line heights into
/// multipliers.
const BASE_FONT_PX: f32 = 16.0;
/// Reference font size in points used to turn `pt` line heights into
/// multipliers.
const BASE_FONT_PT: f32 = 12.0;

/// Resolve a `font-size` value to points.
///
/// Absolute keywords map to fixed sizes. `smaller` and `larger` resolve to
/// -2 and 2, which the text mapper applies as the size itself rather than
/// as a step from the inherited size.
pub fn resolve_font_size(value: &str) -> Option<f32> {
    parse_value(value, parse_font_size)
}

/// Resolve a `line-height` value to a multiplier.
pub fn resolve_line_height(value: &str) -> Option<f32> {
    parse_value(value, parse_line_height)
}

/// Resolve a `font-weight` value.
pub fn resolve_font_weight(value: &str) -> Option<FontWeight> {
    parse_value(value, parse_font_weight)
}

/// Resolve a `font-style` value.
pub fn resolve_font_style(value: &str) -> Option<FontStyle> {
    parse_value(value, parse_font_style)
}

/// Resolve the first family of a `font-family` list, without quotes.
///
/// The name is taken verbatim up to the first comma outside quotes, so
/// families such as `3Dumb` or `Font 2` that do not tokenize as identifiers
/// survive intact. Fallback families are not used.
pub fn resolve_font_family(value: &str) -> Option<String> {
    let family = first_family(value)
        .trim()
        .trim_matches(|c: char| c == '\'' || c == '"')
        .trim();
    (!family.is_empty()).then(|| family.to_string())
}

fn first_family(value: &str) -> &str {
    let mut quote = None;
    for (i, c) in value.char_indices() {
        match (quote, c) {
            (None, '\'' | '"') => quote = Some(c),
            (Some(open), _) if c == open => quote = None,
            (None, ',') => return &value[..i],
            _ => {}
        }
    }
    value
}

/// Sizes must be positive. Only the relative keywords resolve below zero.
pub(crate) fn parse_font_size(input: &mut Parser<'_, '_>) -> Option<f32> {
    if let Ok(ident) = input.try_parse(|i| i.expect_ident_cloned()) {
        // Values from https://www.w3.org/TR/css-fonts-4/#absolute-size-mapping
        let size = match ident.to_ascii_lowercase().as_str() {
            "xx-small" => 9.0,
            "x-small" => 10.0,
            "small" => 13.0,
            "medium" => 16.0,
            "large" => 18.0,
            "x-large" => 24.0,
            "xx-large" => 32.0,
            "xxx-large" => 48.0,
            "smaller" => -2.0,
            "larger" => 2.0,
            _ => return None,
        };
        return Some(size);
    }

    parse_length(input).filter(|size| *size > 0.0)
}

pub(crate) fn parse_line_height(input: &mut Parser<'_, '_>) -> Option<f32> {
    let multiplier = match input.next().ok()? {
        // Unitless number is already a multiplier
        Token::Number { value, .. } => Some(*value),
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("px") => {
            Some(*value / BASE_FONT_PX)
        }
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("pt") => {
            Some(*value / BASE_FONT_PT)
        }
        _ => None,
    };
    multiplier.filter(|m| *m > 0.0)
}

pub(crate) fn parse_font_weight(input: &mut Parser<'_, '_>) -> Option<FontWeight> {
    if let Ok(token) = input.try_parse(|i| i.expect_ident_cloned()) {
        let weight = match token.to_ascii_lowercase().as_str() {
            "normal" => FontWeight::NORMAL,
            "bold" | "bolder" => FontWeight::BOLD,
            "lighter" => FontWeight(300),
            _ => return None,
        };
        return Some(weight);
    }

    match input.next().ok()? {
        Token::Number {
            int_value: Some(v), ..
        } => Some(FontWeight((*v).clamp(0, i32::from(u16::MAX)) as u16)),
        _ => None,
    }
}
