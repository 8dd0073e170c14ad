//! Error types for grid planning and color parsing.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised before any grid is generated.
///
/// Everything else in the planner is total: unsupported color models fall
/// back to black instead of failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Columns or rows are zero, or spacing is negative or not finite.
    #[error(
        "invalid grid: {columns} columns x {rows} rows with spacing {spacing} \
         (columns and rows must be positive, spacing must be non-negative)"
    )]
    InvalidGridSpec {
        columns: u32,
        rows: u32,
        spacing: f32,
    },

    /// The host has no selected object to use as the grid origin.
    #[error("no object selected to duplicate")]
    NoSelection,
}

/// Error type for parsing colors and channel names from text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidHexLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),

    /// `model:values` form with an empty model name
    #[error("missing color model before ':'")]
    MissingModel,

    /// Wrong number of comma-separated components for the model
    #[error("expected {expected} color components, found {found}")]
    ComponentCount { expected: usize, found: usize },

    /// A component could not be parsed as a number in range
    #[error("invalid color component: {0:?}")]
    InvalidComponent(String),

    /// Channel name is not one of C, M, Y, K
    #[error("unknown channel {0:?} (expected C, M, Y or K)")]
    UnknownChannel(String),
}
