//! Platform seams for the palette controller.
//!
//! The controller never touches the DOM, the location bar or the clipboard
//! directly. Each platform provides these three traits: the browser shell
//! implements them with `web-sys`, tests and the terminal shell use the
//! in-memory versions.

mod memory;

pub use memory::{MemoryClipboard, MemoryFragment, MemorySwatch};

use crate::color::{HexColor, TextColor};

/// One rendered swatch slot.
pub trait SwatchView {
    /// Color currently shown by the slot, if it shows a valid one.
    fn displayed_color(&self) -> Option<HexColor>;

    /// Whether the slot is shown as locked when the controller starts.
    fn is_locked(&self) -> bool;

    /// Show a background color and its label in the given text color.
    fn render(&mut self, color: HexColor, text_color: TextColor);

    /// Show the lock indicator in the given state.
    fn set_locked(&mut self, locked: bool);
}

/// Where the palette is persisted (the URL fragment in a browser).
pub trait FragmentStore {
    /// Current fragment text, with or without the leading `#`.
    fn read(&self) -> String;

    /// Replace the fragment text.
    fn write(&mut self, fragment: &str);
}

/// Fire-and-forget clipboard writes.
pub trait ClipboardSink {
    /// Submit text to the clipboard. Failures are not reported back.
    fn write_text(&mut self, text: &str);
}
