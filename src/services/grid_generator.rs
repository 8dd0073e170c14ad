use super::canvas::Canvas;
use crate::error::AppError;
use crate::models::TextLabel;
use cmyk_grid::{
    fit_font_size, label_anchor, Cmyk, FontFit, GridError, GridPlanner, GridSpec, LabelBox,
    SourceColor,
};

/// Cells between progress log lines
const PROGRESS_INTERVAL: usize = 100;

/// Outcome of a completed grid run
#[derive(Debug, Clone, PartialEq)]
pub struct GridReport {
    /// Cells created, in row-major order
    pub cells: usize,
    /// CMYK the variation was computed from
    pub base: Cmyk,
    /// Model name of the selection's fill
    pub source_model: String,
}

/// Applies a planned grid to a [`Canvas`]: one duplicated, recolored and
/// labeled copy of the selection per cell.
pub struct GridGenerator {
    spec: GridSpec,
    fit: FontFit,
}

impl GridGenerator {
    pub fn new(spec: GridSpec, fit: FontFit) -> Self {
        Self { spec, fit }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Build the grid on `canvas`.
    ///
    /// Stops at the first host failure; cells created before it stay on the
    /// canvas and the error names the failing cell's sequence number.
    pub fn generate<C: Canvas>(&self, canvas: &mut C) -> Result<GridReport, AppError> {
        let selection = canvas.selection().ok_or(GridError::NoSelection)?;

        if let SourceColor::Unsupported(model) = &selection.fill {
            tracing::warn!(%model, "Unsupported fill color model, using black");
        }
        let base = selection.fill.to_cmyk();
        let total = self.spec.cell_count();

        tracing::info!(
            columns = self.spec.columns(),
            rows = self.spec.rows(),
            spacing = self.spec.spacing(),
            variation = ?self.spec.variation(),
            source = selection.fill.model(),
            "Creating color grid"
        );

        for cell in GridPlanner::new(selection.bounds, self.spec, base) {
            let bounds = cell.bounds(selection.bounds);
            let at_cell = |source| AppError::Canvas {
                sequence: cell.sequence,
                source,
            };

            let shape = canvas.duplicate(&selection, bounds).map_err(at_cell)?;
            canvas.set_fill(shape, cell.color).map_err(at_cell)?;

            let label_box = LabelBox::for_cell(bounds.width, bounds.height);
            let font_size = fit_font_size(&cell.label_text, label_box, self.fit, |text, size| {
                canvas.measure_text(text, size)
            });
            let extent = canvas.measure_text(&cell.label_text, font_size);
            let anchor = label_anchor(bounds, extent.height);

            canvas
                .add_label(TextLabel {
                    text: cell.label_text.clone(),
                    left: anchor.left,
                    top: anchor.top,
                    font_size,
                    color: cell.label_color,
                })
                .map_err(at_cell)?;

            if cell.sequence % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    done = cell.sequence,
                    total,
                    percent = cell.progress_percent(total),
                    "Grid progress"
                );
            }
            tracing::trace!(
                sequence = cell.sequence,
                row = cell.row,
                column = cell.column,
                font_size,
                "Cell created"
            );
        }

        tracing::info!(cells = total, "Grid creation complete");

        Ok(GridReport {
            cells: total,
            base,
            source_model: selection.fill.model().to_string(),
        })
    }
}
