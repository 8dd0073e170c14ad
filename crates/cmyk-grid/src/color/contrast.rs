//! Label contrast selection
//!
//! Labels are printed either in solid black or in paper white, whichever
//! reads better on the cell behind them.

use super::cmyk::Cmyk;

/// Luma weight applied to the inverted cyan channel (red light).
const RED_WEIGHT: f32 = 0.30;
/// Luma weight applied to the inverted magenta channel (green light).
const GREEN_WEIGHT: f32 = 0.59;
/// Luma weight applied to the inverted yellow channel (blue light).
const BLUE_WEIGHT: f32 = 0.11;

/// Brightness below which a background counts as dark.
pub const DARK_THRESHOLD: f32 = 0.5;

/// Approximate perceived brightness of a CMYK color in `0.0..=1.0`.
///
/// Each chromatic ink is inverted into the light it lets through, weighted
/// with Rec. 601 luma coefficients, and the sum is scaled down by the black
/// plate.
pub fn perceived_brightness(color: Cmyk) -> f32 {
    let light = (1.0 - color.cyan / 100.0) * RED_WEIGHT
        + (1.0 - color.magenta / 100.0) * GREEN_WEIGHT
        + (1.0 - color.yellow / 100.0) * BLUE_WEIGHT;

    light * (1.0 - color.black / 100.0)
}

/// Pick black or white text for a background color.
///
/// Returns [`Cmyk::WHITE`] on dark backgrounds and [`Cmyk::BLACK`]
/// otherwise; there are no intermediate values.
///
/// ```
/// use cmyk_grid::{contrast_color, Cmyk};
///
/// assert_eq!(contrast_color(Cmyk::WHITE), Cmyk::BLACK);
/// assert_eq!(contrast_color(Cmyk::BLACK), Cmyk::WHITE);
/// ```
pub fn contrast_color(background: Cmyk) -> Cmyk {
    if perceived_brightness(background) < DARK_THRESHOLD {
        Cmyk::WHITE
    } else {
        Cmyk::BLACK
    }
}
