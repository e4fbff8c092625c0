//! Input reference for the browser and terminal shells.

/// One way of driving the palette.
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Browser input (key or click target).
    pub input: &'static str,
    /// Equivalent terminal command, if any.
    pub command: Option<&'static str>,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        input: &'static str,
        command: Option<&'static str>,
        description: &'static str,
    ) -> Self {
        Self {
            input,
            command,
            description,
        }
    }

    /// Format for display (e.g., "Space / <enter>").
    pub fn format(&self) -> String {
        match self.command {
            Some(command) => format!("{} / {}", self.input, command),
            None => self.input.to_string(),
        }
    }
}

/// Registry of all inputs.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Space", Some("<enter>"), "Regenerate unlocked swatches"),
            Shortcut::new("Click lock", Some("lock N"), "Lock or unlock swatch N"),
            Shortcut::new("Click hex", Some("copy N"), "Copy swatch N to the clipboard"),
            Shortcut::new("URL #hash", Some("<argument>"), "Restore a saved palette"),
            Shortcut::new("-", Some("json"), "Print the palette as JSON"),
            Shortcut::new("-", Some("quit"), "Exit"),
        ]
    }

    /// Print all shortcuts to stdout.
    pub fn print_all() {
        println!("\n=== Controls ===");
        for shortcut in Self::all() {
            println!("  {:28} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let shortcut = Shortcut::new("Space", Some("<enter>"), "Regenerate");
        assert_eq!(shortcut.format(), "Space / <enter>");
        let shortcut = Shortcut::new("Space", None, "Regenerate");
        assert_eq!(shortcut.format(), "Space");
    }

    #[test]
    fn test_registry_covers_regenerate() {
        assert!(ShortcutRegistry::all().iter().any(|s| s.input == "Space"));
    }
}
