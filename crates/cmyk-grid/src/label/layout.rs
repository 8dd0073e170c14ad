use crate::grid::Bounds;

/// Left inset of a label, as a fraction of the cell width.
pub const LABEL_INSET_RATIO: f32 = 0.1;

/// Position of a label's top-left corner in host coordinates (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabelAnchor {
    pub left: f32,
    pub top: f32,
}

/// Anchor a label inside `cell`: inset 10% from the left edge and sitting
/// on the bottom edge once its rendered height is known.
///
/// ```
/// use cmyk_grid::{label_anchor, Bounds};
///
/// let cell = Bounds::new(100.0, 200.0, 50.0, 30.0);
/// let anchor = label_anchor(cell, 6.0);
/// assert_eq!(anchor.left, 105.0);
/// assert_eq!(anchor.top, 176.0);
/// ```
pub fn label_anchor(cell: Bounds, text_height: f32) -> LabelAnchor {
    LabelAnchor {
        left: cell.x + cell.width * LABEL_INSET_RATIO,
        top: cell.y - cell.height + text_height,
    }
}
