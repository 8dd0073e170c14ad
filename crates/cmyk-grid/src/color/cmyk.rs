//! CMYK color type
//!
//! CMYK expresses a color as four ink coverage percentages. Every grid cell,
//! label and contrast color in this crate is a [`Cmyk`] value.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// One of the four CMYK ink channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    #[cfg_attr(feature = "serde", serde(rename = "C", alias = "c"))]
    Cyan,
    #[cfg_attr(feature = "serde", serde(rename = "M", alias = "m"))]
    Magenta,
    #[cfg_attr(feature = "serde", serde(rename = "Y", alias = "y"))]
    Yellow,
    #[cfg_attr(feature = "serde", serde(rename = "K", alias = "k"))]
    Black,
}

impl Channel {
    /// All channels in label order.
    pub const ALL: [Channel; 4] = [
        Channel::Cyan,
        Channel::Magenta,
        Channel::Yellow,
        Channel::Black,
    ];

    /// Single-letter name used in labels and on the command line.
    pub fn letter(self) -> char {
        match self {
            Channel::Cyan => 'C',
            Channel::Magenta => 'M',
            Channel::Yellow => 'Y',
            Channel::Black => 'K',
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Channel {
    type Err = ParseColorError;

    /// Parse a channel from its letter or full name, case-insensitively.
    ///
    /// ```
    /// use cmyk_grid::Channel;
    ///
    /// assert_eq!("K".parse::<Channel>().unwrap(), Channel::Black);
    /// assert_eq!("magenta".parse::<Channel>().unwrap(), Channel::Magenta);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "cyan" => Ok(Channel::Cyan),
            "m" | "magenta" => Ok(Channel::Magenta),
            "y" | "yellow" => Ok(Channel::Yellow),
            "k" | "black" | "key" => Ok(Channel::Black),
            other => Err(ParseColorError::UnknownChannel(other.to_string())),
        }
    }
}

/// A color in CMYK space.
///
/// Channels are ink percentages in `0.0..=100.0`. The type is an immutable
/// value: operations such as [`with_channel`](Self::with_channel) return a
/// new color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan ink (0.0..=100.0)
    pub cyan: f32,
    /// Magenta ink (0.0..=100.0)
    pub magenta: f32,
    /// Yellow ink (0.0..=100.0)
    pub yellow: f32,
    /// Black (key) ink (0.0..=100.0)
    pub black: f32,
}

impl Cmyk {
    /// Paper white: no ink at all.
    pub const WHITE: Self = Self {
        cyan: 0.0,
        magenta: 0.0,
        yellow: 0.0,
        black: 0.0,
    };

    /// Solid black from the key plate only.
    pub const BLACK: Self = Self {
        cyan: 0.0,
        magenta: 0.0,
        yellow: 0.0,
        black: 100.0,
    };

    /// Create a color from four percentages.
    ///
    /// Values are clamped to `0.0..=100.0`; NaN becomes `0.0`.
    pub fn new(cyan: f32, magenta: f32, yellow: f32, black: f32) -> Self {
        Self {
            cyan: clamp_percent(cyan),
            magenta: clamp_percent(magenta),
            yellow: clamp_percent(yellow),
            black: clamp_percent(black),
        }
    }

    /// Read one channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Cyan => self.cyan,
            Channel::Magenta => self.magenta,
            Channel::Yellow => self.yellow,
            Channel::Black => self.black,
        }
    }

    /// Return a copy with one channel replaced, leaving the other three as
    /// they are.
    ///
    /// ```
    /// use cmyk_grid::{Channel, Cmyk};
    ///
    /// let base = Cmyk::new(10.0, 20.0, 30.0, 50.0);
    /// let swept = base.with_channel(Channel::Black, 75.0);
    /// assert_eq!(swept, Cmyk::new(10.0, 20.0, 30.0, 75.0));
    /// assert_eq!(base.black, 50.0);
    /// ```
    #[must_use]
    pub fn with_channel(self, channel: Channel, value: f32) -> Self {
        let value = clamp_percent(value);
        match channel {
            Channel::Cyan => Self { cyan: value, ..self },
            Channel::Magenta => Self {
                magenta: value,
                ..self
            },
            Channel::Yellow => Self {
                yellow: value,
                ..self
            },
            Channel::Black => Self {
                black: value,
                ..self
            },
        }
    }

    /// Channels in C, M, Y, K order.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.cyan, self.magenta, self.yellow, self.black]
    }

    /// Channels rounded to whole percentages, half away from zero.
    pub fn rounded(self) -> [i32; 4] {
        self.to_array().map(|v| v.round() as i32)
    }

    /// Approximate on-screen sRGB bytes for previewing this ink mix.
    ///
    /// Uses the naive uncalibrated inverse of [`SourceColor::to_cmyk`]
    /// (no ICC profile), so it round-trips with the RGB conversion.
    ///
    /// [`SourceColor::to_cmyk`]: crate::SourceColor::to_cmyk
    pub fn to_rgb(self) -> [u8; 3] {
        let k = 1.0 - self.black / 100.0;
        [self.cyan, self.magenta, self.yellow]
            .map(|ink| (255.0 * (1.0 - ink / 100.0) * k).round().clamp(0.0, 255.0) as u8)
    }

    /// Preview color as a `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_out_of_range_values() {
        let color = Cmyk::new(-5.0, 150.0, f32::NAN, 42.0);
        assert_eq!(color, Cmyk::new(0.0, 100.0, 0.0, 42.0));
    }

    #[test]
    fn test_with_channel_replaces_only_selected_channel() {
        let base = Cmyk::new(10.0, 20.0, 30.0, 40.0);

        for channel in Channel::ALL {
            let swept = base.with_channel(channel, 99.0);
            for other in Channel::ALL {
                if other == channel {
                    assert_eq!(swept.channel(other), 99.0);
                } else {
                    assert_eq!(swept.channel(other), base.channel(other));
                }
            }
        }
    }

    #[test]
    fn test_rounded_rounds_each_channel_independently() {
        let color = Cmyk::new(12.4, 12.5, 99.6, 0.49);
        assert_eq!(color.rounded(), [12, 13, 100, 0]);
    }

    #[test]
    fn test_to_rgb_key_values() {
        assert_eq!(Cmyk::WHITE.to_rgb(), [255, 255, 255]);
        assert_eq!(Cmyk::BLACK.to_rgb(), [0, 0, 0]);
        assert_eq!(Cmyk::new(100.0, 0.0, 0.0, 0.0).to_rgb(), [0, 255, 255]);
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 50.0).to_rgb(), [128, 128, 128]);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Cmyk::WHITE.to_hex(), "#ffffff");
        assert_eq!(Cmyk::new(0.0, 100.0, 100.0, 0.0).to_hex(), "#ff0000");
    }

    #[test]
    fn test_channel_parsing() {
        assert_eq!("c".parse::<Channel>().unwrap(), Channel::Cyan);
        assert_eq!(" Y ".parse::<Channel>().unwrap(), Channel::Yellow);
        assert_eq!("Key".parse::<Channel>().unwrap(), Channel::Black);
        assert!(matches!(
            "Z".parse::<Channel>(),
            Err(ParseColorError::UnknownChannel(_))
        ));
    }

    #[test]
    fn test_channel_display_round_trips() {
        for channel in Channel::ALL {
            assert_eq!(channel.to_string().parse::<Channel>().unwrap(), channel);
        }
    }
}
