//! Color types and conversion utilities
//!
//! - [`Cmyk`]: canonical ink representation used for every planned cell.
//! - [`SourceColor`]: whatever the host reports as the origin fill.
//! - [`contrast_color`]: black/white label color for a background.
//!
//! # Example
//!
//! ```
//! use cmyk_grid::{contrast_color, Cmyk, SourceColor};
//!
//! let fill: SourceColor = "#ff0000".parse().unwrap();
//! let cmyk = fill.to_cmyk();
//! assert_eq!(cmyk.rounded(), [0, 100, 100, 0]);
//! assert_eq!(contrast_color(cmyk), Cmyk::WHITE);
//! ```

mod cmyk;
mod contrast;
mod source;

pub use cmyk::{Channel, Cmyk};
pub use contrast::{contrast_color, perceived_brightness, DARK_THRESHOLD};
pub use source::SourceColor;
