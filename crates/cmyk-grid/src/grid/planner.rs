//! Grid cell planning.
//!
//! Cells are visited rows outer, columns inner. That order defines
//! [`CellPlan::sequence`], which hosts use for progress reporting, so every
//! entry point here (sequential, iterator and parallel) yields the same
//! cells in the same order.

use super::cell::{Bounds, CellPlan};
use super::spec::GridSpec;
use crate::color::{contrast_color, Cmyk};
use crate::label::format_label;

/// Value of the swept channel at `(row, column)`, in `0.0..=100.0`.
///
/// The sweep runs along the grid diagonal: 0 in the first cell, 100 in the
/// last. A 1x1 grid has no diagonal to sweep and yields 0.
///
/// ```
/// use cmyk_grid::{variation_value, GridSpec};
///
/// let spec = GridSpec::new(3, 3, 0.0).unwrap();
/// assert_eq!(variation_value(&spec, 0, 0), 0.0);
/// assert_eq!(variation_value(&spec, 1, 1), 50.0);
/// assert_eq!(variation_value(&spec, 2, 2), 100.0);
/// ```
pub fn variation_value(spec: &GridSpec, row: u32, column: u32) -> f32 {
    // Widened so grids near `u32::MAX` cells per side cannot overflow
    let steps = u64::from(spec.rows()) + u64::from(spec.columns()) - 2;
    if steps == 0 {
        return 0.0;
    }

    let t = (u64::from(row) + u64::from(column)) as f64 / steps as f64 * 100.0;
    t.clamp(0.0, 100.0) as f32
}

/// Plan the cell at `(row, column)`.
///
/// `origin` only contributes its size: offsets are relative to the origin
/// object's position.
pub fn plan_cell(origin: Bounds, spec: &GridSpec, base: Cmyk, row: u32, column: u32) -> CellPlan {
    let offset_x = column as f32 * (origin.width + spec.spacing());
    // Rows grow downward in a y-up space; `0.0 -` keeps row 0 at +0
    let offset_y = 0.0 - row as f32 * (origin.height + spec.spacing());

    let color = match spec.variation() {
        Some(channel) => base.with_channel(channel, variation_value(spec, row, column)),
        None => base,
    };

    CellPlan {
        row,
        column,
        sequence: row as usize * spec.columns() as usize + column as usize + 1,
        offset_x,
        offset_y,
        color,
        label_text: format_label(color),
        label_color: contrast_color(color),
    }
}

/// Plan every cell of the grid, in row-major order.
///
/// # Example
///
/// ```
/// use cmyk_grid::{plan_grid, Bounds, Channel, Cmyk, GridSpec};
///
/// let spec = GridSpec::new(3, 2, 10.0).unwrap().with_variation(Channel::Cyan);
/// let origin = Bounds::new(0.0, 0.0, 50.0, 30.0);
/// let cells = plan_grid(origin, &spec, Cmyk::new(0.0, 40.0, 0.0, 0.0));
///
/// assert_eq!(cells.len(), 6);
/// assert_eq!((cells[4].row, cells[4].column), (1, 1));
/// assert_eq!(cells[4].offset_x, 60.0);
/// assert_eq!(cells[4].offset_y, -40.0);
/// assert_eq!(cells[5].label_text, "C:100 M:40 Y:0 K:0");
/// ```
pub fn plan_grid(origin: Bounds, spec: &GridSpec, base: Cmyk) -> Vec<CellPlan> {
    GridPlanner::new(origin, *spec, base).collect()
}

/// Parallel [`plan_grid`]. Cells are computed on the rayon pool and
/// collected back in row-major order.
#[cfg(feature = "parallel")]
pub fn plan_grid_par(origin: Bounds, spec: &GridSpec, base: Cmyk) -> Vec<CellPlan> {
    use rayon::prelude::*;

    let columns = spec.columns() as usize;
    (0..spec.cell_count())
        .into_par_iter()
        .map(|index| {
            let row = (index / columns) as u32;
            let column = (index % columns) as u32;
            plan_cell(origin, spec, base, row, column)
        })
        .collect()
}

/// Lazy row-major iterator over a grid's cells.
///
/// Useful when the host applies cells as they are produced and wants to
/// stop early without planning the rest.
#[derive(Debug, Clone)]
pub struct GridPlanner {
    origin: Bounds,
    spec: GridSpec,
    base: Cmyk,
    next: usize,
}

impl GridPlanner {
    pub fn new(origin: Bounds, spec: GridSpec, base: Cmyk) -> Self {
        Self {
            origin,
            spec,
            base,
            next: 0,
        }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn base(&self) -> Cmyk {
        self.base
    }
}

impl Iterator for GridPlanner {
    type Item = CellPlan;

    fn next(&mut self) -> Option<CellPlan> {
        if self.next >= self.spec.cell_count() {
            return None;
        }

        let columns = self.spec.columns() as usize;
        let row = (self.next / columns) as u32;
        let column = (self.next % columns) as u32;
        self.next += 1;

        Some(plan_cell(self.origin, &self.spec, self.base, row, column))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.spec.cell_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridPlanner {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Channel;

    fn origin() -> Bounds {
        Bounds::new(0.0, 0.0, 50.0, 30.0)
    }

    #[test]
    fn test_variation_on_widest_grid() {
        let spec = GridSpec::new(u32::MAX, 2, 0.0)
            .unwrap()
            .with_variation(Channel::Black);

        assert_eq!(variation_value(&spec, 0, 0), 0.0);
        assert_eq!(variation_value(&spec, 1, u32::MAX - 1), 100.0);

        let first = plan_cell(Bounds::new(0.0, 0.0, 1.0, 1.0), &spec, Cmyk::WHITE, 0, 0);
        assert_eq!(first.color.black, 0.0);
        assert_eq!(first.sequence, 1);
    }

    #[test]
    fn test_row_major_traversal() {
        let spec = GridSpec::new(3, 2, 0.0).unwrap();
        let order: Vec<(u32, u32, usize)> = plan_grid(origin(), &spec, Cmyk::WHITE)
            .iter()
            .map(|c| (c.row, c.column, c.sequence))
            .collect();

        assert_eq!(
            order,
            vec![
                (0, 0, 1),
                (0, 1, 2),
                (0, 2, 3),
                (1, 0, 4),
                (1, 1, 5),
                (1, 2, 6),
            ]
        );
    }

    #[test]
    fn test_offsets_grow_right_and_down_the_page() {
        let spec = GridSpec::new(4, 3, 10.0).unwrap();
        let cell = plan_cell(origin(), &spec, Cmyk::WHITE, 2, 3);
        assert_eq!(cell.offset_x, 180.0);
        assert_eq!(cell.offset_y, -80.0);
    }

    #[test]
    fn test_no_variation_copies_base() {
        let base = Cmyk::new(10.0, 20.0, 30.0, 40.0);
        let spec = GridSpec::new(4, 4, 1.0).unwrap();
        assert!(plan_grid(origin(), &spec, base)
            .iter()
            .all(|c| c.color == base));
    }

    #[test]
    fn test_variation_sweeps_selected_channel() {
        let base = Cmyk::new(10.0, 20.0, 30.0, 40.0);
        let spec = GridSpec::new(5, 1, 0.0)
            .unwrap()
            .with_variation(Channel::Magenta);
        let sweep: Vec<f32> = plan_grid(origin(), &spec, base)
            .iter()
            .map(|c| c.color.magenta)
            .collect();
        assert_eq!(sweep, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_single_cell_variation_is_zero() {
        let spec = GridSpec::new(1, 1, 0.0)
            .unwrap()
            .with_variation(Channel::Yellow);
        let cells = plan_grid(origin(), &spec, Cmyk::new(0.0, 0.0, 80.0, 0.0));
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].color.yellow, 0.0);
        assert!(cells[0].color.to_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_label_uses_final_color() {
        let base = Cmyk::new(0.0, 0.0, 0.0, 0.0);
        let spec = GridSpec::new(2, 1, 0.0)
            .unwrap()
            .with_variation(Channel::Black);
        let cells = plan_grid(origin(), &spec, base);

        assert_eq!(cells[0].label_text, "C:0 M:0 Y:0 K:0");
        assert_eq!(cells[0].label_color, Cmyk::BLACK);
        assert_eq!(cells[1].label_text, "C:0 M:0 Y:0 K:100");
        assert_eq!(cells[1].label_color, Cmyk::WHITE);
    }

    #[test]
    fn test_iterator_is_exact_size_and_resumable() {
        let spec = GridSpec::new(3, 3, 0.0).unwrap();
        let mut planner = GridPlanner::new(origin(), spec, Cmyk::WHITE);
        assert_eq!(planner.len(), 9);

        let first = planner.next().unwrap();
        assert_eq!(first.sequence, 1);
        assert_eq!(planner.len(), 8);

        let rest: Vec<_> = planner.collect();
        assert_eq!(rest.len(), 8);
        assert_eq!(rest.last().map(|c| c.sequence), Some(9));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let spec = GridSpec::new(17, 23, 2.5)
            .unwrap()
            .with_variation(Channel::Cyan);
        let base = Cmyk::new(5.0, 50.0, 95.0, 10.0);
        assert_eq!(
            plan_grid_par(origin(), &spec, base),
            plan_grid(origin(), &spec, base)
        );
    }
}
