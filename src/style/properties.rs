//! CSS property value types and the enum_property! macro.

use std::fmt;

/// Macro for defining CSS keyword enums that map to and from their keywords.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Font style (normal, italic, oblique).
///     pub enum FontStyle {
///         #[default]
///         Normal => "normal",
///         Italic => "italic",
///         Oblique => "oblique",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a lowercase CSS keyword into this enum.
            #[inline]
            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css => Some($name::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

/// Font weight (numeric, with named constants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    /// Weights of 600 and above render bold.
    pub fn is_bold(self) -> bool {
        self.0 >= 600
    }
}

enum_property! {
    /// Font style (normal, italic, oblique).
    pub enum FontStyle {
        #[default]
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

enum_property! {
    /// The `text-align` keywords.
    pub enum TextAlign {
        #[default]
        Start => "start",
        End => "end",
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

enum_property! {
    /// Border style keywords. Only recognized so the `border` shorthand can
    /// skip them; the target box model draws plain borders.
    pub enum BorderStyle {
        #[default]
        None => "none",
        Hidden => "hidden",
        Solid => "solid",
        Dotted => "dotted",
        Dashed => "dashed",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
}

enum_property! {
    /// Horizontal alignment of a layout container.
    pub enum HorizontalAlign {
        #[default]
        None => "none",
        Start => "left",
        Center => "center",
        End => "right",
    }
}

impl HorizontalAlign {
    /// Container alignment for a `text-align` keyword. `justify` has no box
    /// model counterpart.
    pub fn from_text_align(align: TextAlign) -> Option<Self> {
        match align {
            TextAlign::Start | TextAlign::Left => Some(HorizontalAlign::Start),
            TextAlign::End | TextAlign::Right => Some(HorizontalAlign::End),
            TextAlign::Center => Some(HorizontalAlign::Center),
            TextAlign::Justify => None,
        }
    }
}

enum_property! {
    /// One side of a box.
    pub enum Side {
        #[default]
        Top => "top",
        Right => "right",
        Bottom => "bottom",
        Left => "left",
    }
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

/// Normalized color.
///
/// `rgb()`, `rgba()` and named colors normalize to uppercase `#RRGGBB`.
/// Values written with a leading `#` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Create an opaque color from its channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(format!("#{r:02X}{g:02X}{b:02X}"))
    }

    /// Keep a `#`-prefixed color literal as written.
    pub fn hex_literal(value: &str) -> Self {
        Color(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
