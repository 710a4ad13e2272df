//! Tag-default text styles.
//!
//! A [`TagStyleTable`] maps a lowercase tag name to the [`TypographicStyle`]
//! an element starts from before its inline `style` is applied. Tables can be
//! assembled by hand or loaded from CSS whose selectors are plain tag names.

use std::collections::HashMap;

use cssparser::{
    AtRuleParser, DeclarationParser, ParseError, Parser, ParserInput, QualifiedRuleParser,
    RuleBodyItemParser, RuleBodyParser, StyleSheetParser,
};

use super::declaration::{StyleDeclarationSet, strip_important};
use super::types::TypographicStyle;

/// Default text styles for common HTML elements, in points.
const HTML_DEFAULTS_CSS: &str = r#"
    /* Emphasis */
    b, strong { font-weight: bold; }
    i, em, cite, var, dfn { font-style: italic; }
    u, ins { text-decoration: underline; }
    s, strike, del { text-decoration: line-through; }
    mark { background-color: yellow; }

    /* Headings */
    h1, h2, h3, h4, h5, h6 { font-weight: bold; }
    h1 { font-size: 24pt; }
    h2 { font-size: 18pt; }
    h3 { font-size: 14pt; }
    h4 { font-size: 12pt; }
    h5 { font-size: 10pt; }
    h6 { font-size: 8pt; }

    /* Monospace */
    code, kbd, samp, tt, pre { font-family: monospace; }

    /* Links */
    a { color: blue; text-decoration: underline; }
"#;

/// Lowercase tag name to default text style. Read-only during rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagStyleTable {
    styles: HashMap<String, TypographicStyle>,
}

impl TagStyleTable {
    /// An empty table: every tag falls back to the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in defaults for emphasis, headings, code and links.
    pub fn html_defaults() -> Self {
        Self::parse_css(HTML_DEFAULTS_CSS)
    }

    /// Load a table from CSS.
    ///
    /// Only rules whose selectors are all bare tag names are used; rules with
    /// other selectors and at-rules are skipped. Rules for the same tag layer
    /// in source order, so a later rule's properties replace earlier ones.
    pub fn parse_css(css: &str) -> Self {
        let mut table = Self::new();
        table.extend_css(css);
        table
    }

    /// Layer the rules of `css` over this table.
    pub fn extend_css(&mut self, css: &str) {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut rule_parser = TagRuleParser { table: self };

        for result in StyleSheetParser::new(&mut parser, &mut rule_parser) {
            if let Err((_, rule)) = result {
                tracing::debug!(rule = %rule.trim(), "tag style rule skipped");
            }
        }
    }

    /// Set the style of a tag, replacing any previous entry.
    pub fn insert(&mut self, tag: &str, style: TypographicStyle) {
        self.styles.insert(tag.to_ascii_lowercase(), style);
    }

    /// Style of a tag (case-insensitive).
    pub fn get(&self, tag: &str) -> Option<&TypographicStyle> {
        match self.styles.get(tag) {
            Some(style) => Some(style),
            None => self.styles.get(&tag.to_ascii_lowercase()),
        }
    }

    /// Style of a tag, or the default style for unknown tags.
    pub fn style_for(&self, tag: &str) -> TypographicStyle {
        self.get(tag).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Tags with an entry, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

/// Parser for top-level tag rules.
struct TagRuleParser<'a> {
    table: &'a mut TagStyleTable,
}

impl<'i> AtRuleParser<'i> for TagRuleParser<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for TagRuleParser<'_> {
    type Prelude = Vec<String>;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        parse_tag_list(input)
    }

    fn parse_block<'t>(
        &mut self,
        prelude: Self::Prelude,
        _start: &cssparser::ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut declarations = StyleDeclarationSet::default();
        let mut decl_parser = DeclarationCollector {
            declarations: &mut declarations,
        };

        for result in RuleBodyParser::new(input, &mut decl_parser) {
            // Ignore errors - lenient parsing
            let _ = result;
        }

        for tag in prelude {
            let style = self
                .table
                .styles
                .get(&tag)
                .cloned()
                .unwrap_or_default()
                .with_declarations(&declarations);
            self.table.styles.insert(tag, style);
        }

        Ok(())
    }
}

/// Parse a comma-separated list of bare tag names.
fn parse_tag_list<'i>(input: &mut Parser<'i, '_>) -> Result<Vec<String>, ParseError<'i, ()>> {
    input.parse_comma_separated(parse_tag_name)
}

fn parse_tag_name<'i>(input: &mut Parser<'i, '_>) -> Result<String, ParseError<'i, ()>> {
    let tag = input.expect_ident()?;
    Ok(tag.to_ascii_lowercase())
}

/// Collects a rule body as raw declarations, so it goes through the same
/// mapper as inline styles.
struct DeclarationCollector<'a> {
    declarations: &'a mut StyleDeclarationSet,
}

impl<'i> AtRuleParser<'i> for DeclarationCollector<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for DeclarationCollector<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();
}

impl<'i> DeclarationParser<'i> for DeclarationCollector<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: cssparser::CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _start: &cssparser::ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        // Nested blocks are skipped whole, so the slice covers every
        // function argument up to the end of the declaration.
        while input.next().is_ok() {}
        // Priority does not matter for a single origin.
        let value = strip_important(input.slice_from(start).trim()).to_string();

        if value.is_empty() {
            return Err(input.new_custom_error(()));
        }
        self.declarations.insert(&name, &value);
        Ok(())
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for DeclarationCollector<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}
