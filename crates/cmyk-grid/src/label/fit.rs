//! Font fitting for cell labels.
//!
//! The planner does not know how text renders; the host supplies a
//! measurement callback and [`fit_font_size`] drives the shrink loop.

/// Rendered size of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

impl TextExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Area a label has to fit into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub max_width: f32,
    pub max_height: f32,
}

impl LabelBox {
    /// Fraction of the cell width available to the label.
    pub const WIDTH_RATIO: f32 = 0.9;
    /// Fraction of the cell height available to the label.
    pub const HEIGHT_RATIO: f32 = 0.2;

    pub fn new(max_width: f32, max_height: f32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Label box for a cell: 90% of its width by 20% of its height.
    ///
    /// ```
    /// use cmyk_grid::LabelBox;
    ///
    /// let bounds = LabelBox::for_cell(100.0, 50.0);
    /// assert_eq!(bounds.max_width, 90.0);
    /// assert_eq!(bounds.max_height, 10.0);
    /// ```
    pub fn for_cell(width: f32, height: f32) -> Self {
        Self::new(width * Self::WIDTH_RATIO, height * Self::HEIGHT_RATIO)
    }

    /// Whether text of the given extent fits in both dimensions.
    #[inline]
    pub fn fits(&self, extent: TextExtent) -> bool {
        extent.width <= self.max_width && extent.height <= self.max_height
    }
}

/// Font size search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontFit {
    /// Size tried first
    pub start: f32,
    /// Floor; the search never applies a size below it
    pub min: f32,
    /// Decrement between attempts
    pub step: f32,
}

impl FontFit {
    pub fn new(start: f32, min: f32, step: f32) -> Self {
        Self { start, min, step }
    }
}

impl Default for FontFit {
    /// 12pt start, 4pt floor, 0.5pt steps.
    fn default() -> Self {
        Self {
            start: 12.0,
            min: 4.0,
            step: 0.5,
        }
    }
}

/// Find the largest font size (stepping down from `fit.start`) at which
/// `text` fits inside `bounds`.
///
/// `measure` returns the rendered extent of `text` at a given size. If even
/// the floor size overflows, the floor is returned anyway: overflow at the
/// minimum size is accepted.
///
/// ```
/// use cmyk_grid::{fit_font_size, FontFit, LabelBox, TextExtent};
///
/// // Glyphs 0.6 em wide, lines 1.2 em tall.
/// let measure = |text: &str, size: f32| {
///     TextExtent::new(text.chars().count() as f32 * size * 0.6, size * 1.2)
/// };
///
/// let size = fit_font_size("C:0 M:0", LabelBox::new(40.0, 20.0), FontFit::default(), measure);
/// assert_eq!(size, 9.5);
/// ```
pub fn fit_font_size<F>(text: &str, bounds: LabelBox, fit: FontFit, mut measure: F) -> f32
where
    F: FnMut(&str, f32) -> TextExtent,
{
    let mut size = fit.start;
    if fit.step <= 0.0 || !fit.step.is_finite() {
        return size;
    }

    while !bounds.fits(measure(text, size)) {
        let next = size - fit.step;
        if next < fit.min {
            break;
        }
        size = next;
    }

    size
}
