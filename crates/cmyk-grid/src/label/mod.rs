//! Cell labels: value text, font fitting and placement.

mod fit;
mod layout;
mod text;

pub use fit::{fit_font_size, FontFit, LabelBox, TextExtent};
pub use layout::{label_anchor, LabelAnchor, LABEL_INSET_RATIO};
pub use text::format_label;
