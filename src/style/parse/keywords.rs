//! CSS keyword parsing.
//!
//! Keyword parsers lean on the `from_css` method that `enum_property!`
//! generates for each keyword enum.

use cssparser::Parser;

use crate::style::properties::{BorderStyle, FontStyle, TextAlign};

use super::values::parse_value;

/// Generates a keyword parser for an `enum_property!` type. Keywords match
/// ASCII case-insensitively.
macro_rules! keyword_parser {
    ($fn_name:ident, $type:ty) => {
        pub(crate) fn $fn_name(input: &mut Parser<'_, '_>) -> Option<$type> {
            let token = input.expect_ident_cloned().ok()?;
            <$type>::from_css(&token.to_ascii_lowercase())
        }
    };
}

keyword_parser!(parse_font_style, FontStyle);
keyword_parser!(parse_text_align, TextAlign);
keyword_parser!(parse_border_style_value, BorderStyle);

/// Resolve a `text-align` value.
pub fn resolve_text_align(value: &str) -> Option<TextAlign> {
    parse_value(value, parse_text_align)
}
