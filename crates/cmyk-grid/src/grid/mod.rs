//! Grid specification and per-cell planning
//!
//! [`GridSpec`] holds the validated layout parameters; [`plan_grid`] (or the
//! lazy [`GridPlanner`]) turns a spec, the origin geometry and a base color
//! into one [`CellPlan`] per cell.

mod cell;
mod planner;
mod spec;

pub use cell::{Bounds, CellPlan};
#[cfg(feature = "parallel")]
pub use planner::plan_grid_par;
pub use planner::{plan_cell, plan_grid, variation_value, GridPlanner};
pub use spec::GridSpec;
