//! Mapping of keyboard and pointer input to palette actions.

use crate::config::PaletteConfig;

/// Something the palette controller can do in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    /// Give every unlocked swatch a new random color.
    RegenerateAll,
    /// Flip the lock of one swatch.
    ToggleLock(usize),
    /// Put text on the clipboard.
    Copy(String),
}

/// How a key press should be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    pub action: Option<PaletteAction>,
    /// Suppress the platform's default action for the key.
    pub prevent_default: bool,
}

impl KeyResponse {
    /// Response for a key code such as `"Space"` or `"KeyA"`.
    ///
    /// The default action is suppressed for every key, not only the
    /// regenerate key.
    pub fn for_key(code: &str, config: &PaletteConfig) -> Self {
        let action = code
            .eq_ignore_ascii_case(&config.regenerate_key)
            .then_some(PaletteAction::RegenerateAll);
        Self {
            action,
            prevent_default: true,
        }
    }
}

/// Role of a clicked element, taken from its `data-type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRole {
    Lock,
    Copy,
}

impl TargetRole {
    pub fn from_data_type(value: &str) -> Option<Self> {
        match value {
            "lock" => Some(Self::Lock),
            "copy" => Some(Self::Copy),
            _ => None,
        }
    }
}

/// Action for a click on an element with `role`, inside swatch `slot`,
/// whose text content is `text`.
pub fn click_action(role: Option<TargetRole>, slot: Option<usize>, text: &str) -> Option<PaletteAction> {
    match role? {
        TargetRole::Lock => slot.map(PaletteAction::ToggleLock),
        TargetRole::Copy => Some(PaletteAction::Copy(text.to_string())),
    }
}
