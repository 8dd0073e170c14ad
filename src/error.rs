use crate::models::ShapeId;
use cmyk_grid::{GridError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Invalid color: {0}")]
    Color(#[from] ParseColorError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Canvas error at cell {sequence}: {source}")]
    Canvas {
        sequence: usize,
        #[source]
        source: CanvasError,
    },

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by a canvas host while applying a cell
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CanvasError {
    #[error("Unknown shape {0}")]
    UnknownShape(ShapeId),

    #[error("Host error: {0}")]
    Host(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}
