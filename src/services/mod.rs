pub mod canvas;
pub mod grid_generator;
pub mod svg_canvas;
pub mod text_measure;

pub use canvas::Canvas;
pub use grid_generator::{GridGenerator, GridReport};
pub use svg_canvas::SvgCanvas;
pub use text_measure::{ApproxMeasure, FontMeasure, TextMeasure};
