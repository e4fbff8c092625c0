//! Hex colors, relative luminance and contrast text selection.

use peniko::Color;
use rand::{Rng, RngExt};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Luminance above which dark text is used on a swatch.
pub const DEFAULT_CONTRAST_THRESHOLD: f64 = 0.5;

/// Color parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// An opaque sRGB color with 8-bit channels, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`, case-insensitive.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidHex(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Draw a uniformly random color, one of the 2^24 possible values.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value: u32 = rng.random_range(0..=0x00FF_FFFF);
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// The six hex digits without the leading `#`.
    pub fn digits(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

/// sRGB channel to linear light.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.digits())
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Color> for HexColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, 255)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Readable text color for a swatch background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    Black,
    #[default]
    White,
}

impl TextColor {
    /// Black on bright backgrounds, white otherwise. No hysteresis.
    pub fn for_background(background: HexColor, threshold: f64) -> Self {
        if background.luminance() > threshold {
            TextColor::Black
        } else {
            TextColor::White
        }
    }

    /// CSS color keyword.
    pub fn css(&self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }

    pub fn to_color(self) -> Color {
        match self {
            TextColor::Black => Color::BLACK,
            TextColor::White => Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(HexColor::parse("#ff8000").unwrap(), HexColor::new(255, 128, 0));
        assert_eq!(HexColor::parse("FF8000").unwrap(), HexColor::new(255, 128, 0));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "#", "#fff", "#ff00zz", "#ff00001", "ff-000"] {
            assert!(
                matches!(HexColor::parse(bad), Err(ColorError::InvalidHex(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_is_lowercase() {
        let color: HexColor = "#A1B2C3".parse().unwrap();
        assert_eq!(color.to_string(), "#a1b2c3");
        assert_eq!(color.digits(), "a1b2c3");
    }

    #[test]
    fn test_luminance_extremes() {
        assert!((HexColor::WHITE.luminance() - 1.0).abs() < 1e-9);
        assert!(HexColor::BLACK.luminance().abs() < 1e-9);
    }

    #[test]
    fn test_luminance_weights_green_highest() {
        let red = HexColor::new(255, 0, 0).luminance();
        let green = HexColor::new(0, 255, 0).luminance();
        let blue = HexColor::new(0, 0, 255).luminance();
        assert!(green > red && red > blue);
        assert!((green - 0.7152).abs() < 1e-9);
    }

    #[test]
    fn test_text_color_contrast() {
        let t = DEFAULT_CONTRAST_THRESHOLD;
        assert_eq!(TextColor::for_background(HexColor::WHITE, t), TextColor::Black);
        assert_eq!(TextColor::for_background(HexColor::BLACK, t), TextColor::White);
        // Pure green is bright, pure red is not.
        assert_eq!(TextColor::for_background(HexColor::new(0, 255, 0), t), TextColor::Black);
        assert_eq!(TextColor::for_background(HexColor::new(255, 0, 0), t), TextColor::White);
    }

    #[test]
    fn test_text_color_css() {
        assert_eq!(TextColor::Black.css(), "black");
        assert_eq!(TextColor::White.css(), "white");
        assert_eq!(HexColor::from(TextColor::Black.to_color()), HexColor::BLACK);
        assert_eq!(HexColor::from(TextColor::White.to_color()), HexColor::WHITE);
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..8).map(|_| HexColor::random(&mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..8).map(|_| HexColor::random(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_peniko_conversion() {
        let color = HexColor::new(12, 34, 56);
        let peniko: Color = color.into();
        assert_eq!(HexColor::from(peniko), color);
    }

    #[test]
    fn test_serde_as_string() {
        let color = HexColor::new(0, 255, 16);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#00ff10\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<HexColor>("\"nope\"").is_err());
    }
}
