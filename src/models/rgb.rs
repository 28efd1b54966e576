//! RGB color handling with hex parsing, HLS conversion and hue rotation.
//!
//! Conversions follow the classic HLS model (hue, lightness, saturation, all
//! in `[0, 1)`). Converting back to 8-bit channels truncates rather than
//! rounds, so a hex -> HLS -> hex trip may drift by one step per channel.
//! Existing palettes depend on that drift; do not "fix" it.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Exact comparisons are part of the HLS algorithm (grey detection)
#![allow(clippy::float_cmp)]

use crate::error::{PromptError, Result};
use std::fmt;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// Transient hue/lightness/saturation triple, each component in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    /// Hue as a fraction of a full turn.
    pub h: f64,
    /// Lightness.
    pub l: f64,
    /// Saturation.
    pub s: f64,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use ebu_prompt_helper::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InvalidHex`] unless the input is exactly six
    /// hex digits after stripping an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if digits.len() != 6 {
            return Err(PromptError::invalid_hex(
                hex,
                "expected 6 hex digits (RRGGBB)",
            ));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PromptError::invalid_hex(hex, "contains non-hex characters"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| PromptError::invalid_hex(hex, e.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a lowercase hex string in the format "#rrggbb".
    ///
    /// ```
    /// use ebu_prompt_helper::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to `[0, 1]`.
    #[must_use]
    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Builds a color from `[0, 1]` channels, truncating each to an integer.
    ///
    /// Out-of-range inputs saturate at 0 or 255.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }

    /// Converts to HLS.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_hls(&self) -> Hls {
        let (r, g, b) = self.to_unit();
        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let sumc = maxc + minc;
        let rangec = maxc - minc;
        let l = sumc / 2.0;

        if minc == maxc {
            return Hls { h: 0.0, l, s: 0.0 };
        }

        let s = if l <= 0.5 {
            rangec / sumc
        } else {
            rangec / (2.0 - maxc - minc)
        };

        let rc = (maxc - r) / rangec;
        let gc = (maxc - g) / rangec;
        let bc = (maxc - b) / rangec;

        let h = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hls {
            h: (h / 6.0).rem_euclid(1.0),
            l,
            s,
        }
    }

    /// Converts from HLS, truncating channels on the way back to 8 bits.
    #[must_use]
    pub fn from_hls(hls: Hls) -> Self {
        let Hls { h, l, s } = hls;
        if s == 0.0 {
            return Self::from_unit(l, l, l);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
        let m1 = 2.0 * l - m2;

        Self::from_unit(
            hue_channel(m1, m2, h + ONE_THIRD),
            hue_channel(m1, m2, h),
            hue_channel(m1, m2, h - ONE_THIRD),
        )
    }

    /// Rotates the hue by `degrees`, keeping lightness and saturation.
    ///
    /// ```
    /// use ebu_prompt_helper::models::RgbColor;
    ///
    /// let red = RgbColor::new(255, 0, 0);
    /// assert_eq!(red.shift_hue(120.0), RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    pub fn shift_hue(&self, degrees: f64) -> Self {
        let hls = self.to_hls();
        Self::from_hls(Hls {
            h: (hls.h + degrees / 360.0).rem_euclid(1.0),
            ..hls
        })
    }

    /// Euclidean distance to `other` in 0-255 RGB space.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Parses a hex code into `[0, 1]` channels.
///
/// # Errors
///
/// Returns [`PromptError::InvalidHex`] for malformed input.
pub fn hex_to_rgb(hex: &str) -> Result<(f64, f64, f64)> {
    Ok(RgbColor::from_hex(hex)?.to_unit())
}

/// Formats `[0, 1]` channels as `#rrggbb`, truncating each channel.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    RgbColor::from_unit(r, g, b).to_hex()
}

/// Euclidean distance between two colors in 0-255 space.
#[must_use]
pub fn color_distance(a: RgbColor, b: RgbColor) -> f64 {
    a.distance(&b)
}

/// Rotates the hue of a hex code by `degrees`.
///
/// # Errors
///
/// Returns [`PromptError::InvalidHex`] for malformed input.
pub fn shift_hue(hex: &str, degrees: f64) -> Result<String> {
    Ok(RgbColor::from_hex(hex)?.shift_hue(degrees).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("+FFFFF").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("ééé").is_err());
    }

    #[test]
    fn test_invalid_hex_error_kind() {
        let err = RgbColor::from_hex("#12345").unwrap_err();
        assert!(matches!(err, PromptError::InvalidHex { .. }));
        assert!(err.to_string().contains("#12345"));
    }

    #[test]
    fn test_to_hex_is_lowercase() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(RgbColor::new(171, 205, 239).to_string(), "#abcdef");
    }

    #[test]
    fn test_unit_roundtrip_every_channel_value() {
        for v in 0..=255u8 {
            let hex = RgbColor::new(v, 255 - v, v / 2).to_hex();
            let (r, g, b) = hex_to_rgb(&hex).unwrap();
            assert_eq!(rgb_to_hex(r, g, b), hex);
        }
    }

    #[test]
    fn test_from_unit_truncates() {
        // 0.5 * 255 = 127.5 truncates to 127, not 128
        assert_eq!(RgbColor::from_unit(0.5, 0.5, 0.5), RgbColor::new(127, 127, 127));
        assert_eq!(RgbColor::from_unit(1.2, -0.1, 0.999), RgbColor::new(255, 0, 254));
    }

    #[test]
    fn test_hls_primary_colors() {
        let red = RgbColor::new(255, 0, 0).to_hls();
        assert!((red.h - 0.0).abs() < 1e-9);
        assert!((red.l - 0.5).abs() < 1e-9);
        assert!((red.s - 1.0).abs() < 1e-9);

        let green = RgbColor::new(0, 255, 0).to_hls();
        assert!((green.h - ONE_THIRD).abs() < 1e-9);

        let blue = RgbColor::new(0, 0, 255).to_hls();
        assert!((blue.h - TWO_THIRDS).abs() < 1e-9);
    }

    #[test]
    fn test_hls_grayscale() {
        let gray = RgbColor::new(128, 128, 128).to_hls();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 128.0 / 255.0).abs() < 1e-9);

        // Greys survive a hue shift untouched apart from truncation
        let shifted = RgbColor::new(128, 128, 128).shift_hue(90.0);
        assert!(shifted.r.abs_diff(128) <= 1);
        assert_eq!(shifted.r, shifted.g);
        assert_eq!(shifted.g, shifted.b);
    }

    #[test]
    fn test_hls_roundtrip_within_truncation() {
        let colors = [
            RgbColor::new(255, 0, 0),
            RgbColor::new(255, 255, 0),
            RgbColor::new(128, 64, 192),
            RgbColor::new(200, 100, 50),
            RgbColor::new(12, 34, 56),
        ];

        for color in colors {
            let back = RgbColor::from_hls(color.to_hls());
            assert!(color.r.abs_diff(back.r) <= 1, "{color} -> {back}");
            assert!(color.g.abs_diff(back.g) <= 1, "{color} -> {back}");
            assert!(color.b.abs_diff(back.b) <= 1, "{color} -> {back}");
        }
    }

    #[test]
    fn test_shift_hue_primaries() {
        let red = RgbColor::new(255, 0, 0);
        assert_eq!(red.shift_hue(120.0), RgbColor::new(0, 255, 0));
        assert_eq!(red.shift_hue(240.0), RgbColor::new(0, 0, 255));
        assert_eq!(red.shift_hue(-120.0), RgbColor::new(0, 0, 255));
        assert_eq!(red.shift_hue(360.0), red);
    }

    #[test]
    fn test_shift_hue_inverse_within_tolerance() {
        let samples = ["#cb4154", "#4682b4", "#93c572", "#eaa221", "#702963"];
        for hex in samples {
            for degrees in [15.0, 30.0, 120.0, 180.0, -45.0, 300.0] {
                let there = shift_hue(hex, degrees).unwrap();
                let back = RgbColor::from_hex(&shift_hue(&there, -degrees).unwrap()).unwrap();
                let orig = RgbColor::from_hex(hex).unwrap();
                assert!(orig.r.abs_diff(back.r) <= 2, "{hex} {degrees}: {back}");
                assert!(orig.g.abs_diff(back.g) <= 2, "{hex} {degrees}: {back}");
                assert!(orig.b.abs_diff(back.b) <= 2, "{hex} {degrees}: {back}");
            }
        }
    }

    #[test]
    fn test_shift_hue_preserves_lightness_and_saturation() {
        let base = RgbColor::new(200, 100, 50);
        let before = base.to_hls();
        let after = base.shift_hue(77.0).to_hls();
        assert!((before.l - after.l).abs() < 0.01);
        assert!((before.s - after.s).abs() < 0.02);
    }

    #[test]
    fn test_shift_hue_rejects_bad_hex() {
        assert!(shift_hue("#abc", 15.0).is_err());
    }

    #[test]
    fn test_distance() {
        let black = RgbColor::new(0, 0, 0);
        let white = RgbColor::new(255, 255, 255);
        assert_eq!(color_distance(black, black), 0.0);
        assert!((color_distance(black, white) - (3.0f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
        assert_eq!(
            RgbColor::new(3, 0, 0).distance(&RgbColor::new(0, 4, 0)),
            5.0
        );
    }
}
