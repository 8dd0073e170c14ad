use crate::error::CanvasError;
use crate::models::{Shape, ShapeId, TextLabel};
use cmyk_grid::{Bounds, Cmyk, TextExtent};

/// The drawing host the grid is applied to.
///
/// Implementations own the document; the generator only asks for the
/// current selection and issues per-cell edits in row-major order.
pub trait Canvas {
    /// The currently selected object, if any
    fn selection(&self) -> Option<Shape>;

    /// Duplicate `source` and place the copy at `bounds`
    fn duplicate(&mut self, source: &Shape, bounds: Bounds) -> Result<ShapeId, CanvasError>;

    /// Set the fill of a shape created by [`Canvas::duplicate`]
    fn set_fill(&mut self, shape: ShapeId, color: Cmyk) -> Result<(), CanvasError>;

    /// Rendered extent of `text` at `font_size`
    fn measure_text(&self, text: &str, font_size: f32) -> TextExtent;

    /// Place a point-text label
    fn add_label(&mut self, label: TextLabel) -> Result<(), CanvasError>;
}
