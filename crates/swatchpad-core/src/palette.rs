//! Swatch and palette model.

use crate::color::{HexColor, TextColor};
use serde::{Deserialize, Serialize};

/// Lock state of a single swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    #[default]
    Unlocked,
    Locked,
}

impl LockState {
    pub fn from_locked(locked: bool) -> Self {
        if locked { Self::Locked } else { Self::Unlocked }
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Unlocked => Self::Locked,
            Self::Locked => Self::Unlocked,
        }
    }
}

/// One color slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub color: HexColor,
    pub text_color: TextColor,
    pub lock: LockState,
}

impl Swatch {
    pub fn new(color: HexColor, threshold: f64) -> Self {
        Self {
            color,
            text_color: TextColor::for_background(color, threshold),
            lock: LockState::Unlocked,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Set the color and recompute the text color.
    pub fn set_color(&mut self, color: HexColor, threshold: f64) {
        self.color = color;
        self.text_color = TextColor::for_background(color, threshold);
    }
}

/// Ordered swatch colors, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<HexColor>);

impl Palette {
    pub fn new(colors: Vec<HexColor>) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[HexColor] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<HexColor> {
        self.0.get(index).copied()
    }

    /// URL fragment text for this palette.
    pub fn to_fragment(&self) -> String {
        crate::fragment::encode_fragment(&self.0)
    }
}

impl<'a> FromIterator<&'a Swatch> for Palette {
    fn from_iter<I: IntoIterator<Item = &'a Swatch>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| s.color).collect())
    }
}
