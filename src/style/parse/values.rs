//! CSS value parsing: lengths, colors, decorations.
//!
//! Every resolver is total. `None` means the value could not be resolved and
//! the caller must leave its target property untouched.

use cssparser::{ParseError, Parser, ParserInput, Token};

use crate::style::properties::Color;

/// Text decoration lines set by one value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextDecorationValue {
    pub underline: bool,
    pub line_through: bool,
}

/// Run a cssparser-based parser over a raw value. The whole value must be
/// consumed for the result to count.
pub(crate) fn parse_value<T>(
    value: &str,
    parse: impl FnOnce(&mut Parser<'_, '_>) -> Option<T>,
) -> Option<T> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let result = parse(&mut parser)?;
    parser.expect_exhausted().ok()?;
    Some(result)
}

/// Resolve a length to points.
///
/// A bare number, `px` and `pt` all give the same number: no DPI
/// conversion is applied. Percentages, font-relative units and keywords
/// are unresolved.
pub fn resolve_length(value: &str) -> Option<f32> {
    parse_value(value, parse_length)
}

/// Resolve a color to its normalized form.
pub fn resolve_color(value: &str) -> Option<Color> {
    hex_literal(value).or_else(|| parse_value(value, parse_color))
}

/// Resolve the color component of a `background` value, skipping images,
/// gradients, positions, sizes and repeat keywords.
pub fn resolve_background_color(value: &str) -> Option<Color> {
    hex_literal(value).or_else(|| parse_value(value, parse_background_shorthand))
}

/// A lone `#...` token is kept verbatim, without validating the digits.
fn hex_literal(value: &str) -> Option<Color> {
    let value = value.trim();
    (value.starts_with('#') && !value.contains(char::is_whitespace))
        .then(|| Color::hex_literal(value))
}

/// Resolve a `text-decoration` value by substring, so `underline
/// line-through` sets both lines.
pub fn resolve_text_decoration(value: &str) -> Option<TextDecorationValue> {
    let value = value.to_ascii_lowercase();
    let decoration = TextDecorationValue {
        underline: value.contains("underline"),
        line_through: value.contains("line-through"),
    };
    (decoration.underline || decoration.line_through).then_some(decoration)
}

pub(crate) fn parse_length(input: &mut Parser<'_, '_>) -> Option<f32> {
    match input.next().ok()? {
        Token::Number { value, .. } => Some(*value),
        Token::Dimension { value, unit, .. }
            if unit.eq_ignore_ascii_case("px") || unit.eq_ignore_ascii_case("pt") =>
        {
            Some(*value)
        }
        _ => None,
    }
}

pub(crate) fn parse_color(input: &mut Parser<'_, '_>) -> Option<Color> {
    if let Ok(ident) = input.try_parse(|i| i.expect_ident_cloned()) {
        return named_color(&ident.to_ascii_lowercase());
    }

    // Hex colors tokenize as IDHash or Hash (when starting with a digit).
    // The token type is checked inside try_parse so the position resets on
    // a mismatch.
    if let Ok(hash) = input.try_parse(|i| -> Result<_, ParseError<'_, ()>> {
        match i.next()? {
            Token::IDHash(h) | Token::Hash(h) => Ok(h.clone()),
            _ => Err(i.new_custom_error(())),
        }
    }) {
        return Some(Color::hex_literal(&format!("#{}", hash.as_ref() as &str)));
    }

    input.try_parse(parse_rgb_function).ok()
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::rgb(0, 0, 0),
        "white" => Color::rgb(255, 255, 255),
        "red" => Color::rgb(255, 0, 0),
        "green" => Color::rgb(0, 128, 0),
        "blue" => Color::rgb(0, 0, 255),
        "yellow" => Color::rgb(255, 255, 0),
        "cyan" | "aqua" => Color::rgb(0, 255, 255),
        "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "silver" => Color::rgb(192, 192, 192),
        "maroon" => Color::rgb(128, 0, 0),
        "olive" => Color::rgb(128, 128, 0),
        "lime" => Color::rgb(0, 255, 0),
        "teal" => Color::rgb(0, 128, 128),
        "navy" => Color::rgb(0, 0, 128),
        "purple" => Color::rgb(128, 0, 128),
        "orange" => Color::rgb(255, 165, 0),
        _ => return None,
    };
    Some(color)
}

/// `rgb(r, g, b)` or `rgba(r, g, b, a)`; alpha is accepted and ignored.
fn parse_rgb_function<'i>(input: &mut Parser<'i, '_>) -> Result<Color, ParseError<'i, ()>> {
    let name = input.expect_function()?.clone();
    if !name.eq_ignore_ascii_case("rgb") && !name.eq_ignore_ascii_case("rgba") {
        return Err(input.new_custom_error(()));
    }
    input.parse_nested_block(|input| {
        let r = parse_color_component(input)?;
        input.expect_comma()?;
        let g = parse_color_component(input)?;
        input.expect_comma()?;
        let b = parse_color_component(input)?;
        if input.try_parse(|i| i.expect_comma()).is_ok() {
            input.expect_number()?;
        }
        input.expect_exhausted()?;
        Ok(Color::rgb(r, g, b))
    })
}

fn parse_color_component<'i>(input: &mut Parser<'i, '_>) -> Result<u8, ParseError<'i, ()>> {
    let location = input.current_source_location();
    match input.next()? {
        Token::Number {
            int_value: Some(v), ..
        } => Ok((*v).clamp(0, 255) as u8),
        Token::Percentage { unit_value, .. } => {
            Ok((unit_value * 255.0).round().clamp(0.0, 255.0) as u8)
        }
        _ => Err(location.new_custom_error(())),
    }
}

/// Extract the color from a `background` shorthand.
///
/// Components may appear in any order; everything that is not a color is
/// skipped. See https://www.w3.org/TR/css-backgrounds-3/#background
pub(crate) fn parse_background_shorthand(input: &mut Parser<'_, '_>) -> Option<Color> {
    let mut color: Option<Color> = None;

    loop {
        if color.is_none()
            && let Ok(c) =
                input.try_parse(|i| parse_color(i).ok_or(i.new_custom_error::<_, ()>(())))
        {
            color = Some(c);
            continue;
        }

        // background-image: url(...)
        if input.try_parse(|i| i.expect_url()).is_ok() {
            continue;
        }

        // Gradients and other functions
        if input
            .try_parse(|i: &mut Parser<'_, '_>| {
                let _ = i.expect_function()?;
                i.parse_nested_block(
                    |nested: &mut Parser<'_, '_>| -> Result<(), ParseError<'_, ()>> {
                        while nested.next().is_ok() {}
                        Ok(())
                    },
                )
            })
            .is_ok()
        {
            continue;
        }

        if input
            .try_parse(|i| {
                let ident = i.expect_ident()?;
                match ident.to_ascii_lowercase().as_str() {
                // repeat
                "repeat" | "repeat-x" | "repeat-y" | "no-repeat" | "space" | "round" |
                // size
                "cover" | "contain" | "auto" |
                // attachment
                "scroll" | "fixed" | "local" |
                // origin/clip
                "padding-box" | "border-box" | "content-box" |
                // position
                "top" | "bottom" | "left" | "right" | "center" |
                "none" => Ok(()),
                _ => Err(i.new_custom_error::<_, ()>(())),
            }
            })
            .is_ok()
        {
            continue;
        }

        // Positions and sizes
        if input
            .try_parse(|i| match i.next()? {
                Token::Dimension { .. } | Token::Percentage { .. } | Token::Number { .. } => Ok(()),
                _ => Err(i.new_custom_error::<_, ()>(())),
            })
            .is_ok()
        {
            continue;
        }

        // Separator between position and size
        if input.try_parse(|i| i.expect_delim('/')).is_ok() {
            continue;
        }

        break;
    }

    color
}
