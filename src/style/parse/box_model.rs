//! Box model shorthand parsing (margin, padding).

use cssparser::Parser;

use super::values::{parse_length, parse_value};

/// Insets for the four sides of a box, in points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Resolve a `padding` or `margin` shorthand with one to four lengths.
pub fn resolve_box_shorthand(value: &str) -> Option<BoxInsets> {
    parse_value(value, parse_box_shorthand_values)
}

/// Parse margin/padding shorthand with 1-4 values.
pub(crate) fn parse_box_shorthand_values(input: &mut Parser<'_, '_>) -> Option<BoxInsets> {
    let mut values = Vec::with_capacity(4);

    while values.len() < 4 {
        match input.try_parse(|i| parse_length(i).ok_or_else(|| i.new_custom_error::<_, ()>(())))
        {
            Ok(len) => values.push(len),
            Err(_) => break,
        }
    }

    let (top, right, bottom, left) = expand_shorthand_4(values)?;
    Some(BoxInsets {
        top,
        right,
        bottom,
        left,
    })
}

/// Expand 1-4 values to (top, right, bottom, left) following CSS shorthand rules.
pub(crate) fn expand_shorthand_4<T: Copy>(values: Vec<T>) -> Option<(T, T, T, T)> {
    match values.len() {
        1 => {
            let v = values[0];
            Some((v, v, v, v))
        }
        2 => {
            let (tb, lr) = (values[0], values[1]);
            Some((tb, lr, tb, lr))
        }
        3 => {
            let (t, lr, b) = (values[0], values[1], values[2]);
            Some((t, lr, b, lr))
        }
        4 => Some((values[0], values[1], values[2], values[3])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insets(top: f32, right: f32, bottom: f32, left: f32) -> BoxInsets {
        BoxInsets {
            top,
            right,
            bottom,
            left,
        }
    }

    #[test]
    fn test_shorthand_expansion() {
        assert_eq!(resolve_box_shorthand("4px"), Some(insets(4.0, 4.0, 4.0, 4.0)));
        assert_eq!(resolve_box_shorthand("4 8"), Some(insets(4.0, 8.0, 4.0, 8.0)));
        assert_eq!(
            resolve_box_shorthand("1pt 2pt 3pt"),
            Some(insets(1.0, 2.0, 3.0, 2.0))
        );
        assert_eq!(
            resolve_box_shorthand("1px 2px 3px 4px"),
            Some(insets(1.0, 2.0, 3.0, 4.0))
        );
    }

    #[test]
    fn test_shorthand_rejects_unresolvable_parts() {
        assert_eq!(resolve_box_shorthand(""), None);
        assert_eq!(resolve_box_shorthand("4px auto"), None);
        assert_eq!(resolve_box_shorthand("1em"), None);
        assert_eq!(resolve_box_shorthand("1 2 3 4 5"), None);
    }
}
