//! RGBA color values and conversions.

use std::fmt;
use std::str::FromStr;

/// An immutable RGBA color.
///
/// Channels are `u8`, so every constructed value is in range by type.
/// Paths that go through floating-point arithmetic (`lighter`, `darker`,
/// `mix`, HSL conversion) clamp before narrowing back to `u8`.
///
/// Every transformation returns a new value; `Color` is `Copy` and can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl Color {
    /// Fully opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Pure red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Pure green.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Pure blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Pure yellow.
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    /// Pure cyan.
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    /// Pure magenta.
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    /// Mid gray.
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create an opaque color from RGB components.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA components.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a packed `0xRRGGBB` integer.
    ///
    /// Bits above the low 24 are ignored.
    #[must_use]
    pub const fn from_rgb(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Create a color from a packed `0xAARRGGBB` integer.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self::rgba(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            ((argb >> 24) & 0xFF) as u8,
        )
    }

    /// Create an opaque color from HSL components.
    ///
    /// Hue wraps modulo 360 (negative hues included); saturation and
    /// lightness are percentages clamped to [0, 100] before conversion.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let mut h = hue % 360.0;
        if h < 0.0 {
            h += 360.0;
        }
        let s = saturation.clamp(0.0, 100.0) / 100.0;
        let l = lightness.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self::rgb(
            (((r + m) * 255.0).round()).clamp(0.0, 255.0) as u8,
            (((g + m) * 255.0).round()).clamp(0.0, 255.0) as u8,
            (((b + m) * 255.0).round()).clamp(0.0, 255.0) as u8,
        )
    }

    /// Parse a hex color string.
    ///
    /// Accepts 3, 6, or 8 hex digits with or without a leading `#`;
    /// surrounding whitespace is ignored. The 3-digit form duplicates each
    /// nibble (`F0A` → `FF00AA`); the 8-digit form is `AARRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(ParseColorError::Digit);
        }

        match digits.len() {
            3 => {
                let r = dup_nibble(parse_nibble(digits, 0)?);
                let g = dup_nibble(parse_nibble(digits, 1)?);
                let b = dup_nibble(parse_nibble(digits, 2)?);
                Ok(Self::rgb(r, g, b))
            }
            6 => {
                let r = parse_byte(digits, 0)?;
                let g = parse_byte(digits, 2)?;
                let b = parse_byte(digits, 4)?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let a = parse_byte(digits, 0)?;
                let r = parse_byte(digits, 2)?;
                let g = parse_byte(digits, 4)?;
                let b = parse_byte(digits, 6)?;
                Ok(Self::rgba(r, g, b, a))
            }
            len => Err(ParseColorError::Length(len)),
        }
    }

    /// Render as a hex string: `#RRGGBB` when fully opaque, `#AARRGGBB`
    /// otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }

    /// Pack into a `0xRRGGBB` integer, discarding alpha.
    #[must_use]
    pub const fn to_rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Pack into a `0xAARRGGBB` integer.
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | self.to_rgb()
    }

    /// Return the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::rgba(self.r, self.g, self.b, alpha)
    }

    /// Interpolate each RGB channel toward 255 by `factor` (clamped to
    /// [0, 1]). Alpha is preserved.
    #[must_use]
    pub fn lighter(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self::rgba(
            lerp_channel(self.r, 255, factor),
            lerp_channel(self.g, 255, factor),
            lerp_channel(self.b, 255, factor),
            self.a,
        )
    }

    /// Interpolate each RGB channel toward 0 by `factor` (clamped to
    /// [0, 1]). Alpha is preserved.
    #[must_use]
    pub fn darker(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self::rgba(
            lerp_channel(self.r, 0, factor),
            lerp_channel(self.g, 0, factor),
            lerp_channel(self.b, 0, factor),
            self.a,
        )
    }

    /// Mix with another color. All four channels are interpolated;
    /// `ratio` is clamped to [0, 1], where 0 keeps this color and 1
    /// yields `other`.
    #[must_use]
    pub fn mix(self, other: Color, ratio: f64) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        Self::rgba(
            lerp_channel(self.r, other.r, ratio),
            lerp_channel(self.g, other.g, ratio),
            lerp_channel(self.b, other.b, ratio),
            lerp_channel(self.a, other.a, ratio),
        )
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black,
    /// 255 = white). Alpha is ignored.
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        // ITU-R BT.709 luma: 0.2126 R + 0.7152 G + 0.0722 B
        let r = self.r as u32;
        let g = self.g as u32;
        let b = self.b as u32;
        let luma = 2126 * r + 7152 * g + 722 * b;
        ((luma + 5000) / 10_000) as u8
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    // Truncating interpolation; the result is always within [0, 255].
    (from as f64 + (to as f64 - from as f64) * t).clamp(0.0, 255.0) as u8
}

fn parse_nibble(digits: &str, index: usize) -> Result<u8, ParseColorError> {
    let slice = &digits[index..index + 1];
    if !slice.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::Digit);
    }
    u8::from_str_radix(slice, 16).map_err(|_| ParseColorError::Digit)
}

const fn dup_nibble(nibble: u8) -> u8 {
    (nibble << 4) | nibble
}

fn parse_byte(digits: &str, index: usize) -> Result<u8, ParseColorError> {
    let slice = &digits[index..index + 2];
    if !slice.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::Digit);
    }
    u8::from_str_radix(slice, 16).map_err(|_| ParseColorError::Digit)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Errors raised while parsing a hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// The digit count was not 3, 6, or 8.
    Length(usize),
    /// A character was not a hex digit.
    Digit,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => {
                write!(f, "hex color must have 3, 6, or 8 digits, got {len}")
            }
            Self::Digit => f.write_str("hex color contains a non-hex digit"),
        }
    }
}

impl std::error::Error for ParseColorError {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hex_round_trips_any_color(r: u8, g: u8, b: u8, a: u8) {
            let color = Color::rgba(r, g, b, a);
            prop_assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
        }

        #[test]
        fn mix_stays_between_endpoints(r1: u8, r2: u8, ratio in 0.0f64..=1.0) {
            let a = Color::rgb(r1, 0, 0);
            let b = Color::rgb(r2, 0, 0);
            let mixed = a.mix(b, ratio);
            let (lo, hi) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
            prop_assert!(mixed.r >= lo && mixed.r <= hi);
        }

        #[test]
        fn lighter_never_darkens(r: u8, g: u8, b: u8, factor in 0.0f64..=1.0) {
            let color = Color::rgb(r, g, b);
            let lighter = color.lighter(factor);
            prop_assert!(lighter.r >= color.r);
            prop_assert!(lighter.g >= color.g);
            prop_assert!(lighter.b >= color.b);
        }

        #[test]
        fn hsl_always_in_range(h in -720.0f64..=720.0, s in -50.0f64..=150.0, l in -50.0f64..=150.0) {
            // Conversion must never panic and always produces opaque output
            let color = Color::from_hsl(h, s, l);
            prop_assert_eq!(color.a, 255);
        }
    }
}
