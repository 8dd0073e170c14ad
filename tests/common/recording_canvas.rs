//! A canvas that records every host call, optionally failing on a given cell.

use chromagrid::error::CanvasError;
use chromagrid::models::{Shape, ShapeId, TextLabel};
use chromagrid::services::{ApproxMeasure, Canvas, TextMeasure};
use cmyk_grid::{Bounds, Cmyk, TextExtent};

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Duplicate { id: ShapeId, bounds: Bounds },
    SetFill { id: ShapeId, color: Cmyk },
    AddLabel(TextLabel),
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub selection: Option<Shape>,
    pub ops: Vec<CanvasOp>,
    /// 1-based duplicate call that should fail
    pub fail_on_duplicate: Option<usize>,
    duplicates: usize,
}

impl RecordingCanvas {
    pub fn with_selection(shape: Shape) -> Self {
        Self {
            selection: Some(shape),
            ..Default::default()
        }
    }

    pub fn failing_at(mut self, cell: usize) -> Self {
        self.fail_on_duplicate = Some(cell);
        self
    }

    pub fn duplicates(&self) -> Vec<Bounds> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Duplicate { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<Cmyk> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::SetFill { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<&TextLabel> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::AddLabel(label) => Some(label),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn selection(&self) -> Option<Shape> {
        self.selection.clone()
    }

    fn duplicate(&mut self, _source: &Shape, bounds: Bounds) -> Result<ShapeId, CanvasError> {
        self.duplicates += 1;
        if self.fail_on_duplicate == Some(self.duplicates) {
            return Err(CanvasError::Host("document is locked".to_string()));
        }
        let id = ShapeId(self.duplicates - 1);
        self.ops.push(CanvasOp::Duplicate { id, bounds });
        Ok(id)
    }

    fn set_fill(&mut self, id: ShapeId, color: Cmyk) -> Result<(), CanvasError> {
        self.ops.push(CanvasOp::SetFill { id, color });
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: f32) -> TextExtent {
        ApproxMeasure::default().measure(text, font_size)
    }

    fn add_label(&mut self, label: TextLabel) -> Result<(), CanvasError> {
        self.ops.push(CanvasOp::AddLabel(label));
        Ok(())
    }
}
