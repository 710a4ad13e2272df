//! Border shorthand parsing.

use cssparser::Parser;

use crate::style::properties::{BorderStyle, Color};

use super::keywords::parse_border_style_value;
use super::values::{parse_color, parse_length, parse_value};

/// Components of a `border` shorthand. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderValue {
    pub width: Option<f32>,
    pub style: Option<BorderStyle>,
    pub color: Option<Color>,
}

/// Resolve a `border` shorthand: width, style and color in any order.
pub fn resolve_border(value: &str) -> Option<BorderValue> {
    parse_value(value, |input| {
        let border = parse_border_values(input);
        if border.width.is_none() && border.style.is_none() && border.color.is_none() {
            return None;
        }
        Some(border)
    })
}

/// Resolve a `border-width` value.
pub fn resolve_border_width(value: &str) -> Option<f32> {
    parse_value(value, parse_border_width_value)
}

/// Parse a single border-width value (length or keyword).
pub(crate) fn parse_border_width_value(input: &mut Parser<'_, '_>) -> Option<f32> {
    if let Ok(token) = input.try_parse(|i| i.expect_ident_cloned()) {
        let width = match token.to_ascii_lowercase().as_str() {
            "thin" => 1.0,
            "medium" => 3.0,
            "thick" => 5.0,
            _ => return None,
        };
        return Some(width);
    }

    parse_length(input)
}

/// Parse border values (width, style, color) in any order.
pub(crate) fn parse_border_values(input: &mut Parser<'_, '_>) -> BorderValue {
    let mut border = BorderValue::default();

    for _ in 0..3 {
        if border.style.is_none()
            && let Ok(s) = input.try_parse(|i| {
                parse_border_style_value(i).ok_or_else(|| i.new_custom_error::<_, ()>(()))
            })
        {
            border.style = Some(s);
            continue;
        }

        if border.color.is_none()
            && let Ok(c) =
                input.try_parse(|i| parse_color(i).ok_or_else(|| i.new_custom_error::<_, ()>(())))
        {
            border.color = Some(c);
            continue;
        }

        if border.width.is_none()
            && let Ok(w) = input.try_parse(|i| {
                parse_border_width_value(i).ok_or_else(|| i.new_custom_error::<_, ()>(()))
            })
        {
            border.width = Some(w);
            continue;
        }

        break;
    }

    border
}
