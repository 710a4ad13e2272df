//! Inline `style` attribute parsing.
//!
//! An inline style is split into raw `property: value` pairs. Values stay as
//! text here; the mappers resolve them on demand.

/// Ordered mapping from lowercase property name to trimmed raw value.
///
/// Property names are unique. Inserting an existing property replaces its
/// value in place, so the first occurrence keeps its position and the last
/// occurrence supplies the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarationSet {
    entries: Vec<(String, String)>,
}

impl StyleDeclarationSet {
    /// Parse an inline style attribute.
    ///
    /// Declarations end at a `;` outside parentheses, so function arguments
    /// such as `rgb(1,2,3)` never split a declaration. Declarations without a
    /// `:`, or with an empty property or value, are dropped. A trailing
    /// `!important` is removed from the value; priority has no effect here.
    pub fn parse(style: &str) -> Self {
        let mut set = Self::default();
        for declaration in split_declarations(style) {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim();
            let value = strip_important(value.trim());
            if property.is_empty() || value.is_empty() {
                continue;
            }
            set.insert(property, value);
        }
        set
    }

    /// Insert or replace a declaration. The property is lowercased.
    pub fn insert(&mut self, property: &str, value: &str) {
        let property = property.to_ascii_lowercase();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((property, value.to_string())),
        }
    }

    /// Raw value of a property (case-insensitive lookup).
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str())
    }

    /// Declarations in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feed every declaration to a style mapper, logging the ones it drops.
    pub(crate) fn apply_each(
        &self,
        mapper: &'static str,
        mut apply: impl FnMut(&str, &str) -> Applied,
    ) {
        for (property, value) in self.iter() {
            match apply(property, value) {
                Applied::Set => {}
                Applied::Unresolved => {
                    tracing::debug!(mapper, property = %property, value = %value, "unresolved value dropped");
                }
                Applied::Ignored => {
                    tracing::trace!(mapper, property = %property, "property ignored");
                }
            }
        }
    }
}

/// What a style mapper did with one declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Applied {
    /// The value resolved and was applied.
    Set,
    /// The property is known but its value could not be resolved.
    Unresolved,
    /// The mapper does not handle this property.
    Ignored,
}

impl<T> From<Option<T>> for Applied {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(_) => Applied::Set,
            None => Applied::Unresolved,
        }
    }
}

/// Remove a trailing `!important` (any case, optional space after `!`) and
/// the whitespace before it.
pub(crate) fn strip_important(value: &str) -> &str {
    let value = value.trim_end();
    let Some(split) = value.len().checked_sub("important".len()) else {
        return value;
    };
    match value.get(split..) {
        Some(suffix) if suffix.eq_ignore_ascii_case("important") => {
            match value[..split].trim_end().strip_suffix('!') {
                Some(rest) => rest.trim_end(),
                None => value,
            }
        }
        _ => value,
    }
}

/// Split on `;` at parenthesis depth zero. A trailing declaration without a
/// terminating `;` is kept; whitespace-only pieces are not.
fn split_declarations(style: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    // All three delimiters are ASCII, so every hit is a char boundary.
    for idx in memchr::memchr3_iter(b'(', b')', b';', style.as_bytes()) {
        match style.as_bytes()[idx] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ if depth == 0 => {
                let piece = &style[start..idx];
                if !piece.trim().is_empty() {
                    declarations.push(piece);
                }
                start = idx + 1;
            }
            _ => {}
        }
    }

    let tail = &style[start..];
    if !tail.trim().is_empty() {
        declarations.push(tail);
    }

    declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(set: &StyleDeclarationSet) -> Vec<(&str, &str)> {
        set.iter().collect()
    }

    #[test]
    fn test_parse_simple_declarations() {
        let set = StyleDeclarationSet::parse("color: red; background: rgb(0,0,0)");
        assert_eq!(
            pairs(&set),
            vec![("color", "red"), ("background", "rgb(0,0,0)")]
        );
    }

    #[test]
    fn test_function_arguments_do_not_split() {
        let set = StyleDeclarationSet::parse("a: rgb(1,2,3); b: 4");
        assert_eq!(pairs(&set), vec![("a", "rgb(1,2,3)"), ("b", "4")]);

        let set = StyleDeclarationSet::parse("background: url(a;b.png); color: red");
        assert_eq!(
            pairs(&set),
            vec![("background", "url(a;b.png)"), ("color", "red")]
        );
    }

    #[test]
    fn test_unbalanced_parens_run_to_end() {
        let set = StyleDeclarationSet::parse("color: rgb(1,2; font-weight: bold");
        assert_eq!(pairs(&set), vec![("color", "rgb(1,2; font-weight: bold")]);

        let set = StyleDeclarationSet::parse("a: x); b: 1");
        assert_eq!(pairs(&set), vec![("a", "x); b: 1")]);
    }

    #[test]
    fn test_trailing_semicolon_optional() {
        let with = StyleDeclarationSet::parse("color: red;");
        let without = StyleDeclarationSet::parse("color: red");
        assert_eq!(with, without);
        assert_eq!(with.len(), 1);
    }

    #[test]
    fn test_invalid_declarations_dropped() {
        let set = StyleDeclarationSet::parse("novalue; : red; color: ; ;; font-size: 12px");
        assert_eq!(pairs(&set), vec![("font-size", "12px")]);
    }

    #[test]
    fn test_split_on_first_colon() {
        let set = StyleDeclarationSet::parse("background: url(http://x/y.png)");
        assert_eq!(set.get("background"), Some("url(http://x/y.png)"));
    }

    #[test]
    fn test_property_names_lowercased() {
        let set = StyleDeclarationSet::parse("COLOR: Red; Font-Weight: BOLD");
        assert_eq!(pairs(&set), vec![("color", "Red"), ("font-weight", "BOLD")]);
        assert_eq!(set.get("Color"), Some("Red"));
    }

    #[test]
    fn test_duplicate_keeps_first_position_last_value() {
        let set = StyleDeclarationSet::parse("color: red; font-weight: bold; Color: blue");
        assert_eq!(
            pairs(&set),
            vec![("color", "blue"), ("font-weight", "bold")]
        );
    }

    #[test]
    fn test_important_is_stripped() {
        let set = StyleDeclarationSet::parse(
            "color: rgb(1,2,3) !important; font-weight: bold!IMPORTANT; margin: 1px ! important",
        );
        assert_eq!(
            pairs(&set),
            vec![("color", "rgb(1,2,3)"), ("font-weight", "bold"), ("margin", "1px")]
        );

        let set = StyleDeclarationSet::parse("color: !important; font-family: important");
        assert_eq!(pairs(&set), vec![("font-family", "important")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(StyleDeclarationSet::parse("").is_empty());
        assert!(StyleDeclarationSet::parse("   ").is_empty());
        assert!(StyleDeclarationSet::parse(";;").is_empty());
    }
}
