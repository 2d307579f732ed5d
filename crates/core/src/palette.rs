//! Brand colours and hex conversion helpers.

use std::fmt;
use thiserror::Error;

pub const ACCENT: &str = "#FD0363";
pub const ACCENT_DARK_1: &str = "#CC095D";
pub const ACCENT_DARK_2: &str = "#9C1057";
pub const ACCENT_DARK_3: &str = "#6B1650";
pub const ACCENT_DARK_4: &str = "#3B1D4A";
pub const BACKGROUND: &str = "#0A2344";

/// Bar colour for phages above the recommendation threshold.
pub const RECOMMENDED: &str = "#00cc00";
/// Bar colour for every other phage.
pub const NOT_RECOMMENDED: &str = "#2196F3";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    InvalidLength(String),
    #[error("invalid hex digits in {0:?}")]
    InvalidDigit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional).
///
/// # Errors
///
/// Returns `ColorError` when the input is not six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorError::InvalidLength(hex.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidDigit(hex.to_owned()))
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Parse `#RRGGBB` and attach an alpha channel, clamped to `[0, 1]`.
///
/// # Errors
///
/// Returns `ColorError` when the input is not six hex digits.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Result<Rgba, ColorError> {
    let Rgb { r, g, b } = hex_to_rgb(hex)?;
    let a = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    Ok(Rgba { r, g, b, a })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_converts_to_rgb() {
        assert_eq!(hex_to_rgb(ACCENT), Ok(Rgb { r: 253, g: 3, b: 99 }));
        assert_eq!(hex_to_rgb("0A2344"), Ok(Rgb { r: 10, g: 35, b: 68 }));
    }

    #[test]
    fn rgba_defaults_and_clamps_alpha() {
        let rgba = hex_to_rgba(BACKGROUND, 2.0).unwrap();
        assert_eq!(rgba.a, 1.0);
        assert_eq!(rgba.to_string(), "rgba(10, 35, 68, 1)");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(matches!(hex_to_rgb("#FFF"), Err(ColorError::InvalidLength(_))));
        assert!(matches!(hex_to_rgb("#GGGGGG"), Err(ColorError::InvalidDigit(_))));
    }
}
