//! Swatchpad Core Library
//!
//! Platform-agnostic palette logic: hex colors and contrast, the URL
//! fragment codec, and the palette controller that ties swatches to a
//! fragment store and a clipboard.

pub mod color;
pub mod config;
pub mod controller;
pub mod fragment;
pub mod input;
pub mod palette;
pub mod platform;

pub use color::{ColorError, HexColor, TextColor, DEFAULT_CONTRAST_THRESHOLD};
pub use config::{PaletteConfig, DEFAULT_SWATCH_COUNT};
pub use controller::{PaletteController, PaletteError};
pub use fragment::{decode_fragment, encode_fragment, parse_fragment, FragmentError};
pub use input::{click_action, KeyResponse, PaletteAction, TargetRole};
pub use palette::{LockState, Palette, Swatch};
pub use platform::{ClipboardSink, FragmentStore, MemoryClipboard, MemoryFragment, MemorySwatch, SwatchView};
