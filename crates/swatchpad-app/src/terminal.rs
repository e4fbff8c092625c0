//! Terminal shell (native).
//!
//! Reads commands from stdin and drives the same controller as the
//! browser build. The fragment lives in memory and is printed after every
//! change so it can be pasted back as the first argument.

use std::io::{self, BufRead, Write};

use swatchpad_core::{
    ClipboardSink, HexColor, MemoryFragment, PaletteAction, PaletteConfig, PaletteController,
    SwatchView, TextColor,
};

use crate::shortcuts::ShortcutRegistry;

/// Swatch rendered as an ANSI truecolor line.
#[derive(Debug, Clone, Default)]
pub struct TerminalSwatch {
    color: Option<HexColor>,
    text_color: TextColor,
    locked: bool,
}

impl TerminalSwatch {
    /// Line for slot `number` (1-based).
    pub fn line(&self, number: usize) -> String {
        let Some(color) = self.color else {
            return format!("{number}  (empty)");
        };
        let fg = match self.text_color {
            TextColor::Black => "30",
            TextColor::White => "97",
        };
        let lock = if self.locked { "  [locked]" } else { "" };
        format!(
            "{number}  \x1b[48;2;{};{};{}m\x1b[{fg}m  {color}  \x1b[0m{lock}",
            color.r, color.g, color.b
        )
    }
}

impl SwatchView for TerminalSwatch {
    fn displayed_color(&self) -> Option<HexColor> {
        self.color
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn render(&mut self, color: HexColor, text_color: TextColor) {
        self.color = Some(color);
        self.text_color = text_color;
    }

    fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

/// System clipboard through `arboard`. Failures are logged only.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) {
        if self.clipboard.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => {
                    log::warn!("Failed to access clipboard: {}", e);
                    return;
                }
            }
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.set_text(text) {
                Ok(()) => log::info!("Copied {} to clipboard", text),
                Err(e) => log::warn!("Failed to copy to clipboard: {}", e),
            }
        }
    }
}

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Regenerate,
    /// 0-based slot.
    Lock(usize),
    /// 0-based slot.
    Copy(usize),
    Json,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Slots are typed 1-based.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Some(Self::Regenerate);
        };
        let slot = |arg: Option<&str>| {
            arg.and_then(|s| s.parse::<usize>().ok())
                .and_then(|n| n.checked_sub(1))
        };

        match word.to_ascii_lowercase().as_str() {
            "space" | "r" | "regenerate" => Some(Self::Regenerate),
            "lock" | "l" => slot(words.next()).map(Self::Lock),
            "copy" | "c" => slot(words.next()).map(Self::Copy),
            "json" => Some(Self::Json),
            "help" | "?" => Some(Self::Help),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

type TerminalController<R> = PaletteController<TerminalSwatch, MemoryFragment, SystemClipboard, R>;

fn print_palette<R: rand::Rng>(controller: &TerminalController<R>, out: &mut impl Write) -> io::Result<()> {
    for (index, view) in controller.views().iter().enumerate() {
        writeln!(out, "{}", view.line(index + 1))?;
    }
    writeln!(out, "{}", controller.fragment().as_str())
}

/// Run the terminal shell until `quit` or end of input.
pub fn run(fragment: Option<String>) -> io::Result<()> {
    let config = PaletteConfig::default();
    let views = vec![TerminalSwatch::default(); config.swatch_count];
    let mut controller = PaletteController::new(
        config,
        views,
        MemoryFragment::new(fragment.unwrap_or_default()),
        SystemClipboard::default(),
        rand::rng(),
    );
    controller.initialize();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_palette(&controller, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let action = match Command::parse(&line) {
            Some(Command::Regenerate) => PaletteAction::RegenerateAll,
            Some(Command::Lock(slot)) => PaletteAction::ToggleLock(slot),
            Some(Command::Copy(slot)) => match controller.palette().get(slot) {
                Some(color) => PaletteAction::Copy(color.to_string()),
                None => {
                    writeln!(out, "No swatch {}", slot + 1)?;
                    continue;
                }
            },
            Some(Command::Json) => {
                let json = serde_json::to_string(&controller.palette())
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
                continue;
            }
            Some(Command::Help) => {
                ShortcutRegistry::print_all();
                continue;
            }
            Some(Command::Quit) => break,
            None => {
                writeln!(out, "Unknown command {:?} (try `help`)", line.trim())?;
                continue;
            }
        };

        if let Err(e) = controller.dispatch(action) {
            writeln!(out, "{e}")?;
            continue;
        }
        print_palette(&controller, &mut out)?;
    }

    Ok(())
}
