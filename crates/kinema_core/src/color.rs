//! Color parsing, serialization, and blending

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing a hex color string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    #[error("color must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),

    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

/// An sRGB color with 8-bit channels.
///
/// Parsed from `#rgb` or `#rrggbb` and always serialized back as
/// lowercase 6-digit `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 3- or 6-digit hex color. Shorthand digits are doubled,
    /// so `#abc` normalizes to `#aabbcc`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        let bad_digit = |_| ColorParseError::BadDigit(s.to_string());

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, ch) in digits.chars().enumerate() {
                    let v = ch
                        .to_digit(16)
                        .ok_or_else(|| ColorParseError::BadDigit(s.to_string()))?
                        as u8;
                    channels[i] = v * 17;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).map_err(bad_digit)?;
                let g = u8::from_str_radix(&digits[2..4], 16).map_err(bad_digit)?;
                let b = u8::from_str_radix(&digits[4..6], 16).map_err(bad_digit)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ColorParseError::BadLength(s.to_string())),
        }
    }

    /// Blend toward `other` by fraction `t`.
    ///
    /// `t` may lie outside [0,1] (overshooting easings); each channel is
    /// rounded to the nearest integer and clamped to 0..=255. Identical
    /// endpoints reproduce the exact color for every `t`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let v = a as f32 + (b as f32 - a as f32) * t;
    v.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
