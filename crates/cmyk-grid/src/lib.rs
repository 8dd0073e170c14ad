//! cmyk-grid: planning CMYK color-variation grids
//!
//! Given an origin object (its geometry and fill color) and a [`GridSpec`],
//! this crate computes everything a host application needs to lay out a
//! grid of color swatches: each cell's offset, its CMYK fill, a value label
//! and a legible label color. It performs no I/O and never touches the
//! host's document; applying the plan is the caller's job.
//!
//! # Quick Start
//!
//! ```
//! use cmyk_grid::{plan_grid, Bounds, Channel, GridSpec, SourceColor};
//!
//! let fill: SourceColor = "#3366cc".parse().unwrap();
//! let spec = GridSpec::new(5, 5, 10.0).unwrap().with_variation(Channel::Black);
//! let origin = Bounds::new(0.0, 0.0, 50.0, 30.0);
//!
//! let cells = plan_grid(origin, &spec, fill.to_cmyk());
//! assert_eq!(cells.len(), 25);
//! assert_eq!(cells[0].color.black, 0.0);
//! assert_eq!(cells[24].color.black, 100.0);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! SourceColor (RGB / gray / CMYK / other)
//!     |
//!     v  to_cmyk()
//! base Cmyk ------------------+
//!     |                       |
//!     v  per cell (row-major) |
//! with_channel(sweep value)   |  (variation disabled: base as-is)
//!     |<----------------------+
//!     v
//! CellPlan { offset, color, format_label(color), contrast_color(color) }
//! ```
//!
//! Label font sizes depend on how the host renders text, so they are not
//! part of [`CellPlan`]; hosts call [`fit_font_size`] with their own
//! measurement function and place the result with [`label_anchor`].
//!
//! # Features
//!
//! - `parallel`: [`plan_grid_par`] computes cells on the rayon pool.
//! - `serde`: `Serialize` for the plan types, `Deserialize` for colors.

pub mod color;
pub mod error;
pub mod grid;
pub mod label;


pub use color::{contrast_color, perceived_brightness, Channel, Cmyk, SourceColor};
pub use error::{GridError, ParseColorError};
#[cfg(feature = "parallel")]
pub use grid::plan_grid_par;
pub use grid::{plan_cell, plan_grid, variation_value, Bounds, CellPlan, GridPlanner, GridSpec};
pub use label::{
    fit_font_size, format_label, label_anchor, FontFit, LabelAnchor, LabelBox, TextExtent,
};
