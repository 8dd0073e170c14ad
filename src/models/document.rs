use cmyk_grid::{Bounds, Cmyk, SourceColor};

/// Handle to a shape created on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub usize);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An object on the page: where it is and how it is filled
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub bounds: Bounds,
    pub fill: SourceColor,
}

impl Shape {
    pub fn new(bounds: Bounds, fill: SourceColor) -> Self {
        Self { bounds, fill }
    }
}

/// A left-aligned point-text label to place on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    /// Left edge (host coordinates)
    pub left: f32,
    /// Top edge (host coordinates, y up)
    pub top: f32,
    pub font_size: f32,
    pub color: Cmyk,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_id_display() {
        assert_eq!(ShapeId(7).to_string(), "#7");
    }
}
