//! Validated grid parameters.

use crate::color::Channel;
use crate::error::GridError;

/// Grid layout and color-variation settings.
///
/// A `GridSpec` can only be obtained through [`GridSpec::new`], so every
/// instance has at least one row and column and a finite, non-negative
/// spacing.
///
/// # Example
///
/// ```
/// use cmyk_grid::{Channel, GridSpec};
///
/// let spec = GridSpec::new(5, 3, 10.0)
///     .unwrap()
///     .with_variation(Channel::Black);
///
/// assert_eq!(spec.cell_count(), 15);
/// assert_eq!(spec.variation(), Some(Channel::Black));
///
/// assert!(GridSpec::new(0, 3, 10.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridSpec {
    columns: u32,
    rows: u32,
    spacing: f32,
    variation: Option<Channel>,
}

impl GridSpec {
    /// Validate and create a grid without color variation.
    pub fn new(columns: u32, rows: u32, spacing: f32) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 || !spacing.is_finite() || spacing < 0.0 {
            return Err(GridError::InvalidGridSpec {
                columns,
                rows,
                spacing,
            });
        }

        Ok(Self {
            columns,
            rows,
            spacing,
            variation: None,
        })
    }

    /// Sweep `channel` from 0 to 100 across the grid diagonal.
    #[inline]
    pub fn with_variation(mut self, channel: Channel) -> Self {
        self.variation = Some(channel);
        self
    }

    /// Keep the base color in every cell.
    #[inline]
    pub fn without_variation(mut self) -> Self {
        self.variation = None;
        self
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// The swept channel, if variation is enabled.
    #[inline]
    pub fn variation(&self) -> Option<Channel> {
        self.variation
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}
