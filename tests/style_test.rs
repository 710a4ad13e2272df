//! Declaration parsing, value resolution and style mapping through the
//! public API.

use proptest::prelude::*;

use runweave::style::parse::{
    resolve_border, resolve_box_shorthand, resolve_color, resolve_font_family,
    resolve_font_size, resolve_font_weight, resolve_length, resolve_line_height,
    resolve_text_align, resolve_text_decoration,
};
use runweave::style::{
    Color, ContainerStyle, HorizontalAlign, StyleDeclarationSet, TagStyleTable, TextAlign,
    TypographicStyle,
};

fn text_style(css: &str) -> TypographicStyle {
    TypographicStyle::default().with_declarations(&StyleDeclarationSet::parse(css))
}

fn container_style(css: &str) -> ContainerStyle {
    ContainerStyle::default().with_declarations(&StyleDeclarationSet::parse(css))
}

#[test]
fn test_declarations_keep_functions_whole() {
    let decls = StyleDeclarationSet::parse("color: red; background: rgb(0,0,0)");
    let pairs: Vec<_> = decls.iter().collect();
    assert_eq!(pairs, vec![("color", "red"), ("background", "rgb(0,0,0)")]);

    let decls = StyleDeclarationSet::parse("a: rgb(1,2,3); b: 4");
    assert_eq!(decls.len(), 2);
    assert_eq!(decls.get("a"), Some("rgb(1,2,3)"));
    assert_eq!(decls.get("b"), Some("4"));
}

#[test]
fn test_unbalanced_parens_run_to_end() {
    let decls = StyleDeclarationSet::parse("a: f(1; b: 2");
    assert_eq!(decls.len(), 1);
    assert_eq!(decls.get("a"), Some("f(1; b: 2"));
}

#[test]
fn test_malformed_declarations_dropped() {
    let decls = StyleDeclarationSet::parse("nocolon; : x; y: ; COLOR : Blue ;");
    let pairs: Vec<_> = decls.iter().collect();
    assert_eq!(pairs, vec![("color", "Blue")]);
    assert!(StyleDeclarationSet::parse("   ").is_empty());
}

#[test]
fn test_duplicate_keeps_first_position() {
    let decls = StyleDeclarationSet::parse("color: red; font-size: 9pt; color: blue");
    let pairs: Vec<_> = decls.iter().collect();
    assert_eq!(pairs, vec![("color", "blue"), ("font-size", "9pt")]);
}

#[test]
fn test_color_resolution() {
    assert_eq!(resolve_color("rgb(255,0,0)"), Some(Color::rgb(255, 0, 0)));
    assert_eq!(resolve_color("RED").map(|c| c.as_str().to_string()), Some("#FF0000".into()));
    assert_eq!(resolve_color("#abc").map(|c| c.as_str().to_string()), Some("#abc".into()));
    assert_eq!(resolve_color("notacolor"), None);
}

#[test]
fn test_length_resolution() {
    for value in ["12px", "12pt", "12", " 12PX "] {
        assert_eq!(resolve_length(value), Some(12.0), "{value}");
    }
    for value in ["12%", "12em", "", "auto", "12 px 3"] {
        assert_eq!(resolve_length(value), None, "{value}");
    }
}

#[test]
fn test_font_resolvers() {
    assert_eq!(resolve_font_size("x-large"), Some(24.0));
    assert_eq!(resolve_font_size("smaller"), Some(-2.0));
    assert_eq!(resolve_line_height("1.5"), Some(1.5));
    assert!(resolve_font_weight("700").unwrap().is_bold());
    assert!(!resolve_font_weight("normal").unwrap().is_bold());
    assert_eq!(
        resolve_font_family("'Fira Code', monospace").as_deref(),
        Some("Fira Code")
    );
}

#[test]
fn test_keyword_and_shorthand_resolvers() {
    assert_eq!(resolve_text_align("CENTER"), Some(TextAlign::Center));
    assert_eq!(resolve_text_align("middle"), None);

    let decoration = resolve_text_decoration("underline line-through").unwrap();
    assert!(decoration.underline && decoration.line_through);

    let insets = resolve_box_shorthand("1px 2px").unwrap();
    assert_eq!(
        (insets.top, insets.right, insets.bottom, insets.left),
        (1.0, 2.0, 1.0, 2.0)
    );

    let border = resolve_border("2px solid #123456").unwrap();
    assert_eq!(border.width, Some(2.0));
    assert_eq!(border.color, Some(Color::hex_literal("#123456")));
}

#[test]
fn test_weight_threshold() {
    assert!(text_style("font-weight: 700").bold);
    assert!(text_style("font-weight: bold").bold);
    assert!(!text_style("font-weight: 400").bold);
    assert!(!text_style("font-weight: normal").bold);
}

#[test]
fn test_text_mapper_ignores_unknown_and_unresolved() {
    let style = text_style("color: nope; frobnicate: 3; font-size: big; font-style: italic");
    assert_eq!(style.color, None);
    assert_eq!(style.font_size, None);
    assert!(style.italic);
}

#[test]
fn test_text_mapper_never_clears() {
    let base = text_style("font-weight: bold; color: red");
    let style = base.with_declarations(&StyleDeclarationSet::parse("font-weight: normal"));
    assert!(style.bold);
    assert_eq!(style.color, Some(Color::rgb(255, 0, 0)));
}

#[test]
fn test_container_mapper() {
    let style = container_style(
        "text-align: right; padding: 1pt 2pt 3pt 4pt; margin-top: 9px; width: 100; \
         max-height: 50pt; background-color: #fff; border-width: thick",
    );
    assert_eq!(style.align, HorizontalAlign::End);
    assert_eq!(
        (style.padding_top, style.padding_right, style.padding_bottom, style.padding_left),
        (9.0, 2.0, 3.0, 4.0)
    );
    assert_eq!(style.size.width, Some(100.0));
    assert_eq!(style.size.max_height, Some(50.0));
    assert_eq!(style.background, Some(Color::hex_literal("#fff")));
    assert_eq!(style.border_width, Some(5.0));
}

#[test]
fn test_container_mapper_empty_is_identity() {
    let base = container_style("padding-left: 3px; text-align: center");
    let same = base.with_declarations(&StyleDeclarationSet::default());
    assert_eq!(same, base);
}

#[test]
fn test_tag_table_from_css() {
    let table = TagStyleTable::parse_css(
        "h1, H2 { font-weight: bold; font-size: 20pt } .cls { color: red } code { font-family: monospace }",
    );
    assert!(table.style_for("h2").bold);
    assert_eq!(table.style_for("H1").font_size, Some(20.0));
    assert_eq!(table.style_for("code").font_family.as_deref(), Some("monospace"));
    assert!(table.style_for("blink").is_default());
    assert_eq!(table.len(), 3);
}

proptest! {
    #[test]
    fn prop_declaration_parse_is_total(input in any::<String>()) {
        let decls = StyleDeclarationSet::parse(&input);
        for (property, value) in decls.iter() {
            prop_assert!(!property.is_empty());
            prop_assert!(!value.is_empty());
            prop_assert_eq!(property.to_ascii_lowercase(), property);
        }
    }

    #[test]
    fn prop_resolvers_are_total(input in any::<String>()) {
        let _ = resolve_length(&input);
        let _ = resolve_color(&input);
        let _ = resolve_font_size(&input);
        let _ = resolve_font_weight(&input);
        let _ = resolve_font_family(&input);
        let _ = resolve_text_align(&input);
        let _ = resolve_box_shorthand(&input);
        let _ = resolve_border(&input);
    }

    #[test]
    fn prop_mappers_are_total(input in "[a-z: ;()#0-9.,-]{0,64}") {
        let decls = StyleDeclarationSet::parse(&input);
        let _ = TypographicStyle::default().with_declarations(&decls);
        let _ = ContainerStyle::default().with_declarations(&decls);
    }

    #[test]
    fn prop_px_and_pt_agree(n in 0u16..10_000) {
        prop_assert_eq!(resolve_length(&format!("{n}px")), Some(f32::from(n)));
        prop_assert_eq!(resolve_length(&format!("{n}pt")), Some(f32::from(n)));
    }

    #[test]
    fn prop_rgb_is_uppercase_hex(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = resolve_color(&format!("rgb({r}, {g}, {b})")).unwrap();
        prop_assert_eq!(color.as_str(), format!("#{r:02X}{g:02X}{b:02X}"));
    }
}
