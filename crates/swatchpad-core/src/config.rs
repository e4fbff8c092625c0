//! Palette configuration.

use crate::color::DEFAULT_CONTRAST_THRESHOLD;

/// Number of swatches when the platform does not dictate one.
pub const DEFAULT_SWATCH_COUNT: usize = 5;

/// Palette controller configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Number of swatch slots.
    pub swatch_count: usize,
    /// Luminance above which swatch text is drawn black.
    pub contrast_threshold: f64,
    /// Key code (`KeyboardEvent.code`) that regenerates the palette.
    pub regenerate_key: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            swatch_count: DEFAULT_SWATCH_COUNT,
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            regenerate_key: "Space".to_string(),
        }
    }
}

impl PaletteConfig {
    /// Same configuration with a different swatch count.
    pub fn with_swatch_count(mut self, swatch_count: usize) -> Self {
        self.swatch_count = swatch_count;
        self
    }
}
