use crate::color::Cmyk;

/// Position and size of an object in host coordinates.
///
/// `x` is the left edge, `y` the top edge; y grows upward as in print
/// layout applications, so lower rows have smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same size, moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Bottom edge (`y - height`).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y - self.height
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Everything the host needs to realize one grid cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellPlan {
    /// 0-based row index (outer loop)
    pub row: u32,
    /// 0-based column index (inner loop)
    pub column: u32,
    /// 1-based position in row-major order
    pub sequence: usize,
    /// Horizontal offset from the origin object's left edge
    pub offset_x: f32,
    /// Vertical offset from the origin object's top edge
    pub offset_y: f32,
    /// Fill color of the duplicated shape
    pub color: Cmyk,
    /// Value label printed on the cell
    pub label_text: String,
    /// Black or white, whichever contrasts with `color`
    pub label_color: Cmyk,
}

impl CellPlan {
    /// Where this cell lands when the grid starts at `origin`.
    pub fn bounds(&self, origin: Bounds) -> Bounds {
        origin.translate(self.offset_x, self.offset_y)
    }

    /// Completed share of a grid of `total` cells once this cell is done,
    /// rounded to a whole percentage.
    pub fn progress_percent(&self, total: usize) -> u32 {
        if total == 0 {
            return 100;
        }
        ((self.sequence as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(sequence: usize) -> CellPlan {
        CellPlan {
            row: 0,
            column: 0,
            sequence,
            offset_x: 60.0,
            offset_y: -40.0,
            color: Cmyk::WHITE,
            label_text: String::new(),
            label_color: Cmyk::BLACK,
        }
    }

    #[test]
    fn test_bounds_edges() {
        let b = Bounds::new(10.0, 100.0, 50.0, 30.0);
        assert_eq!(b.right(), 60.0);
        assert_eq!(b.bottom(), 70.0);
    }

    #[test]
    fn test_cell_bounds_apply_offset() {
        let origin = Bounds::new(10.0, 100.0, 50.0, 30.0);
        assert_eq!(
            cell(1).bounds(origin),
            Bounds::new(70.0, 60.0, 50.0, 30.0)
        );
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(cell(100).progress_percent(400), 25);
        assert_eq!(cell(1).progress_percent(3), 33);
        assert_eq!(cell(3).progress_percent(3), 100);
        assert_eq!(cell(1).progress_percent(0), 100);
    }
}
