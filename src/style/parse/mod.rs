//! CSS value resolvers.
//!
//! Each `resolve_*` function takes one raw declaration value and returns the
//! typed quantity, or `None` when the value cannot be resolved.

pub(crate) mod border;
pub(crate) mod box_model;
pub(crate) mod font;
pub(crate) mod keywords;
pub(crate) mod values;

pub use border::{BorderValue, resolve_border, resolve_border_width};
pub use box_model::{BoxInsets, resolve_box_shorthand};
pub use font::{
    resolve_font_family, resolve_font_size, resolve_font_style, resolve_font_weight,
    resolve_line_height,
};
pub use keywords::resolve_text_align;
pub use values::{
    TextDecorationValue, resolve_background_color, resolve_color, resolve_length,
    resolve_text_decoration,
};
