//! Source colors in any model the host may hand us
//!
//! An origin object can be filled with RGB, grayscale, CMYK or some model
//! this crate does not understand (spot colors, gradients, patterns). All of
//! them convert to [`Cmyk`] without failing.

use std::fmt;
use std::str::FromStr;

use super::cmyk::Cmyk;
use crate::error::ParseColorError;

/// A fill color as reported by the host, before conversion to CMYK.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceColor {
    /// 8-bit RGB
    Rgb { red: u8, green: u8, blue: u8 },
    /// Grayscale ink percentage (0.0..=100.0, 100 is black)
    Gray(f32),
    /// Already CMYK
    Cmyk(Cmyk),
    /// Any other model, identified by name
    Unsupported(String),
}

impl SourceColor {
    /// Convert to CMYK.
    ///
    /// - RGB uses the naive key-extraction formula; pure black maps to
    ///   `(0, 0, 0, 100)` instead of dividing by zero.
    /// - Gray becomes a key-only color.
    /// - CMYK is returned unchanged.
    /// - Unsupported models fall back to solid black.
    ///
    /// ```
    /// use cmyk_grid::{Cmyk, SourceColor};
    ///
    /// let white = SourceColor::Rgb { red: 255, green: 255, blue: 255 };
    /// assert_eq!(white.to_cmyk(), Cmyk::WHITE);
    ///
    /// let spot = SourceColor::Unsupported("spot".into());
    /// assert_eq!(spot.to_cmyk(), Cmyk::BLACK);
    /// ```
    pub fn to_cmyk(&self) -> Cmyk {
        match self {
            SourceColor::Rgb { red, green, blue } => rgb_to_cmyk(*red, *green, *blue),
            SourceColor::Gray(gray) => Cmyk::new(0.0, 0.0, 0.0, *gray),
            SourceColor::Cmyk(cmyk) => *cmyk,
            SourceColor::Unsupported(_) => Cmyk::BLACK,
        }
    }

    /// Name of the color model, as used in the text form.
    pub fn model(&self) -> &str {
        match self {
            SourceColor::Rgb { .. } => "rgb",
            SourceColor::Gray(_) => "gray",
            SourceColor::Cmyk(_) => "cmyk",
            SourceColor::Unsupported(name) => name,
        }
    }
}

impl From<Cmyk> for SourceColor {
    fn from(cmyk: Cmyk) -> Self {
        SourceColor::Cmyk(cmyk)
    }
}

fn rgb_to_cmyk(red: u8, green: u8, blue: u8) -> Cmyk {
    let r = red as f32 / 255.0;
    let g = green as f32 / 255.0;
    let b = blue as f32 / 255.0;

    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Cmyk::BLACK;
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    Cmyk::new(c * 100.0, m * 100.0, y * 100.0, k * 100.0)
}

impl fmt::Display for SourceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceColor::Rgb { red, green, blue } => write!(f, "#{red:02x}{green:02x}{blue:02x}"),
            SourceColor::Gray(gray) => write!(f, "gray:{gray}"),
            SourceColor::Cmyk(c) => write!(
                f,
                "cmyk:{},{},{},{}",
                c.cyan, c.magenta, c.yellow, c.black
            ),
            SourceColor::Unsupported(name) => write!(f, "{name}:"),
        }
    }
}

impl FromStr for SourceColor {
    type Err = ParseColorError;

    /// Parse a fill color from text.
    ///
    /// Supported forms:
    /// - `#RRGGBB` / `#RGB` (hash optional) - RGB
    /// - `rgb:<r>,<g>,<b>` - RGB with decimal bytes
    /// - `gray:<percent>` - grayscale
    /// - `cmyk:<c>,<m>,<y>,<k>` - CMYK percentages
    /// - `<model>:<anything>` - any other model, kept as [`SourceColor::Unsupported`]
    ///
    /// ```
    /// use cmyk_grid::SourceColor;
    ///
    /// let gray: SourceColor = "gray:40".parse().unwrap();
    /// assert_eq!(gray, SourceColor::Gray(40.0));
    ///
    /// let spot: SourceColor = "spot:PANTONE 185 C".parse().unwrap();
    /// assert_eq!(spot, SourceColor::Unsupported("spot".into()));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((model, values)) = s.split_once(':') {
            let model = model.trim().to_ascii_lowercase();
            return match model.as_str() {
                "rgb" => {
                    let [red, green, blue] = parse_list::<u8, 3>(values)?;
                    Ok(SourceColor::Rgb { red, green, blue })
                }
                "gray" | "grey" => {
                    let [gray] = parse_list::<f32, 1>(values)?;
                    Ok(SourceColor::Gray(gray))
                }
                "cmyk" => {
                    let [c, m, y, k] = parse_list::<f32, 4>(values)?;
                    Ok(SourceColor::Cmyk(Cmyk::new(c, m, y, k)))
                }
                "" => Err(ParseColorError::MissingModel),
                _ => Ok(SourceColor::Unsupported(model)),
            };
        }

        parse_hex(s)
    }
}

fn parse_hex(s: &str) -> Result<SourceColor, ParseColorError> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(ParseColorError::InvalidHexLength);
    }

    let (red, green, blue) = match s.len() {
        3 => (
            u8::from_str_radix(&s[0..1], 16)? * 17,
            u8::from_str_radix(&s[1..2], 16)? * 17,
            u8::from_str_radix(&s[2..3], 16)? * 17,
        ),
        6 => (
            u8::from_str_radix(&s[0..2], 16)?,
            u8::from_str_radix(&s[2..4], 16)?,
            u8::from_str_radix(&s[4..6], 16)?,
        ),
        _ => return Err(ParseColorError::InvalidHexLength),
    };

    Ok(SourceColor::Rgb { red, green, blue })
}

fn parse_list<T, const N: usize>(values: &str) -> Result<[T; N], ParseColorError>
where
    T: FromStr + Default + Copy,
{
    let parts: [&str; N] = values
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|parts: Vec<&str>| ParseColorError::ComponentCount {
            expected: N,
            found: parts.len(),
        })?;

    let mut parsed = [T::default(); N];
    for (slot, part) in parsed.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| ParseColorError::InvalidComponent(part.to_string()))?;
    }
    Ok(parsed)
}
