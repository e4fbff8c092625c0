//! In-memory platform implementations.

use super::{ClipboardSink, FragmentStore, SwatchView};
use crate::color::{HexColor, TextColor};

/// In-memory fragment for testing and the terminal shell.
#[derive(Debug, Clone, Default)]
pub struct MemoryFragment {
    fragment: String,
    writes: usize,
}

impl MemoryFragment {
    /// Create a fragment store holding `fragment`.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            writes: 0,
        }
    }

    /// Current fragment text.
    pub fn as_str(&self) -> &str {
        &self.fragment
    }

    /// Number of writes since creation.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl FragmentStore for MemoryFragment {
    fn read(&self) -> String {
        self.fragment.clone()
    }

    fn write(&mut self, fragment: &str) {
        self.fragment = format!("#{}", fragment.trim_start_matches('#'));
        self.writes += 1;
    }
}

/// Clipboard that records every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently copied text.
    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}

/// Swatch view that keeps what was rendered into it.
#[derive(Debug, Clone, Default)]
pub struct MemorySwatch {
    pub color: Option<HexColor>,
    pub text_color: Option<TextColor>,
    pub locked: bool,
    pub renders: usize,
}

impl MemorySwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already shows `color` and is locked.
    pub fn locked_with(color: HexColor) -> Self {
        Self {
            color: Some(color),
            locked: true,
            ..Self::default()
        }
    }
}

impl SwatchView for MemorySwatch {
    fn displayed_color(&self) -> Option<HexColor> {
        self.color
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn render(&mut self, color: HexColor, text_color: TextColor) {
        self.color = Some(color);
        self.text_color = Some(text_color);
        self.renders += 1;
    }

    fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}
