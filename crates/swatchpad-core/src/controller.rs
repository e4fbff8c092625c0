//! The palette controller.
//!
//! Owns the swatch models and their views, and keeps the persisted
//! fragment in sync after every change. All methods run on the UI thread;
//! the only asynchronous work (clipboard writes) is delegated to the
//! [`ClipboardSink`] and never reported back.

use crate::color::{HexColor, TextColor};
use crate::config::PaletteConfig;
use crate::fragment::decode_fragment;
use crate::input::PaletteAction;
use crate::palette::{LockState, Palette, Swatch};
use crate::platform::{ClipboardSink, FragmentStore, SwatchView};
use rand::Rng;
use thiserror::Error;

/// Palette controller errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Swatch {slot} out of range (palette has {len})")]
    SlotOutOfRange { slot: usize, len: usize },
}

/// Drives a fixed set of swatches.
pub struct PaletteController<V, F, C, R> {
    config: PaletteConfig,
    swatches: Vec<Swatch>,
    views: Vec<V>,
    fragment: F,
    clipboard: C,
    rng: R,
}

impl<V, F, C, R> PaletteController<V, F, C, R>
where
    V: SwatchView,
    F: FragmentStore,
    C: ClipboardSink,
    R: Rng,
{
    /// Create a controller over `views`; the swatch count is `views.len()`.
    ///
    /// Lock state and any color the views already show are adopted as the
    /// starting state. Nothing is rendered until [`Self::initialize`].
    pub fn new(config: PaletteConfig, views: Vec<V>, fragment: F, clipboard: C, mut rng: R) -> Self {
        let threshold = config.contrast_threshold;
        let swatches = views
            .iter()
            .map(|view| {
                let color = view
                    .displayed_color()
                    .unwrap_or_else(|| HexColor::random(&mut rng));
                let mut swatch = Swatch::new(color, threshold);
                swatch.lock = LockState::from_locked(view.is_locked());
                swatch
            })
            .collect();

        Self {
            config,
            swatches,
            views,
            fragment,
            clipboard,
            rng,
        }
    }

    /// Load the palette from the fragment, filling gaps with random colors.
    ///
    /// Decoded colors are assigned by position. Missing or malformed tokens
    /// leave their slot randomized and surplus tokens are ignored.
    pub fn initialize(&mut self) -> Palette {
        let decoded = decode_fragment(&self.fragment.read());
        log::info!(
            "Initializing {} swatches ({} colors from fragment)",
            self.swatches.len(),
            decoded.iter().flatten().count()
        );
        self.assign(&decoded)
    }

    /// New random colors for every unlocked swatch.
    pub fn regenerate_all(&mut self) -> Palette {
        let palette = self.assign(&[]);
        log::debug!("Regenerated palette: {}", palette.to_fragment());
        palette
    }

    fn assign(&mut self, decoded: &[Option<HexColor>]) -> Palette {
        let threshold = self.config.contrast_threshold;

        for (index, (swatch, view)) in self.swatches.iter_mut().zip(self.views.iter_mut()).enumerate() {
            if swatch.is_locked() {
                if view.displayed_color() != Some(swatch.color) {
                    view.render(swatch.color, swatch.text_color);
                }
                continue;
            }

            let color = decoded
                .get(index)
                .copied()
                .flatten()
                .unwrap_or_else(|| HexColor::random(&mut self.rng));
            swatch.set_color(color, threshold);
            view.render(swatch.color, swatch.text_color);
        }

        let palette = self.palette();
        self.fragment.write(&palette.to_fragment());
        palette
    }

    /// Flip the lock of `slot`. The color is left alone.
    pub fn toggle_lock(&mut self, slot: usize) -> Result<LockState, PaletteError> {
        let len = self.swatches.len();
        let swatch = self
            .swatches
            .get_mut(slot)
            .ok_or(PaletteError::SlotOutOfRange { slot, len })?;

        swatch.lock = swatch.lock.toggled();
        self.views[slot].set_locked(swatch.is_locked());
        log::debug!("Swatch {} is now {:?}", slot, swatch.lock);
        Ok(swatch.lock)
    }

    /// Send `text` to the clipboard, fire-and-forget.
    pub fn copy_color(&mut self, text: &str) {
        self.clipboard.write_text(text);
    }

    /// Readable text color for a background.
    pub fn apply_text_contrast(&self, color: HexColor) -> TextColor {
        TextColor::for_background(color, self.config.contrast_threshold)
    }

    /// Run an input action.
    pub fn dispatch(&mut self, action: PaletteAction) -> Result<(), PaletteError> {
        match action {
            PaletteAction::RegenerateAll => {
                self.regenerate_all();
            }
            PaletteAction::ToggleLock(slot) => {
                self.toggle_lock(slot)?;
            }
            PaletteAction::Copy(text) => self.copy_color(&text),
        }
        Ok(())
    }

    /// Current colors, left to right.
    pub fn palette(&self) -> Palette {
        self.swatches.iter().collect()
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn views(&self) -> &[V] {
        &self.views
    }

    pub fn fragment(&self) -> &F {
        &self.fragment
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::parse_fragment;
    use crate::platform::{MemoryClipboard, MemoryFragment, MemorySwatch};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type TestController = PaletteController<MemorySwatch, MemoryFragment, MemoryClipboard, StdRng>;

    fn controller(fragment: &str) -> TestController {
        controller_with_views(fragment, vec![MemorySwatch::new(); 5])
    }

    fn controller_with_views(fragment: &str, views: Vec<MemorySwatch>) -> TestController {
        PaletteController::new(
            PaletteConfig::default(),
            views,
            MemoryFragment::new(fragment),
            MemoryClipboard::new(),
            StdRng::seed_from_u64(42),
        )
    }

    fn rgb(r: u8, g: u8, b: u8) -> HexColor {
        HexColor::new(r, g, b)
    }

    #[test]
    fn test_initialize_from_partial_fragment() {
        let mut c = controller("#ff0000-00ff00");
        let palette = c.initialize();

        assert_eq!(palette.len(), 5);
        assert_eq!(palette.get(0), Some(rgb(255, 0, 0)));
        assert_eq!(palette.get(1), Some(rgb(0, 255, 0)));

        let written = parse_fragment(c.fragment().as_str()).unwrap();
        assert_eq!(written.len(), 5);
        assert_eq!(written, palette.colors());
    }

    #[test]
    fn test_initialize_ignores_extra_tokens() {
        let fragment = "#000001-000002-000003-000004-000005-000006-000007";
        let mut c = controller(fragment);
        let palette = c.initialize();

        assert_eq!(palette.len(), 5);
        assert_eq!(palette.get(4), Some(rgb(0, 0, 5)));
        assert_eq!(c.fragment().as_str(), "#000001-000002-000003-000004-000005");
    }

    #[test]
    fn test_initialize_randomizes_malformed_tokens() {
        let mut c = controller("#ff0000-nothex-0000ff");
        let palette = c.initialize();

        assert_eq!(palette.get(0), Some(rgb(255, 0, 0)));
        assert_eq!(palette.get(2), Some(rgb(0, 0, 255)));
        // Every written token is well formed.
        assert_eq!(parse_fragment(c.fragment().as_str()).unwrap().len(), 5);
    }

    #[test]
    fn test_initialize_without_fragment_renders_every_slot() {
        let mut c = controller("");
        c.initialize();

        assert_eq!(c.fragment().writes(), 1);
        for (swatch, view) in c.swatches().iter().zip(c.views()) {
            assert_eq!(view.color, Some(swatch.color));
            assert_eq!(view.text_color, Some(swatch.text_color));
        }
    }

    #[test]
    fn test_initialize_keeps_locked_slot() {
        let mut views = vec![MemorySwatch::new(); 5];
        views[2] = MemorySwatch::locked_with(rgb(1, 2, 3));
        let mut c = controller_with_views("#ff0000-00ff00-0000ff", views);
        let palette = c.initialize();

        assert!(c.swatches()[2].is_locked());
        assert_eq!(palette.get(2), Some(rgb(1, 2, 3)));
        assert_eq!(c.views()[2].renders, 0);
    }

    #[test]
    fn test_regenerate_all_unlocked() {
        let mut c = controller("#ff0000-00ff00-0000ff-ffffff-000000");
        let before = c.initialize();
        let after = c.regenerate_all();

        assert_eq!(after.len(), 5);
        assert_ne!(before, after);
        assert_eq!(parse_fragment(c.fragment().as_str()).unwrap(), after.colors());
        assert_eq!(c.fragment().writes(), 2);
    }

    #[test]
    fn test_regenerate_all_ignores_fragment() {
        let mut c = controller("#ff0000-00ff00-0000ff-ffffff-000000");
        c.initialize();
        c.regenerate_all();
        let again = c.regenerate_all();
        assert_ne!(again.to_fragment(), "ff0000-00ff00-0000ff-ffffff-000000");
    }

    #[test]
    fn test_regenerate_all_keeps_locked_color() {
        let mut c = controller("#ff0000-00ff00-0000ff-ffffff-000000");
        c.initialize();
        c.toggle_lock(1).unwrap();

        for _ in 0..3 {
            let palette = c.regenerate_all();
            assert_eq!(palette.get(1), Some(rgb(0, 255, 0)));
            let written = parse_fragment(c.fragment().as_str()).unwrap();
            assert_eq!(written[1], rgb(0, 255, 0));
        }
        assert_eq!(c.views()[1].renders, 1);
    }

    #[test]
    fn test_toggle_lock_twice_restores_state() {
        let mut c = controller("#ff0000");
        c.initialize();
        let color = c.swatches()[0].color;

        assert_eq!(c.toggle_lock(0).unwrap(), LockState::Locked);
        assert!(c.views()[0].locked);
        assert_eq!(c.toggle_lock(0).unwrap(), LockState::Unlocked);
        assert!(!c.views()[0].locked);
        assert_eq!(c.swatches()[0].color, color);
        assert_eq!(c.fragment().writes(), 1);
    }

    #[test]
    fn test_toggle_lock_out_of_range() {
        let mut c = controller("");
        assert_eq!(
            c.toggle_lock(5),
            Err(PaletteError::SlotOutOfRange { slot: 5, len: 5 })
        );
    }

    #[test]
    fn test_copy_color() {
        let mut c = controller("");
        c.copy_color("#abcdef");
        assert_eq!(c.clipboard().last(), Some("#abcdef"));
    }

    #[test]
    fn test_apply_text_contrast() {
        let c = controller("");
        assert_eq!(c.apply_text_contrast(HexColor::WHITE), TextColor::Black);
        assert_eq!(c.apply_text_contrast(HexColor::BLACK), TextColor::White);
    }

    #[test]
    fn test_dispatch() {
        let mut c = controller("#ff0000");
        c.initialize();

        c.dispatch(PaletteAction::ToggleLock(0)).unwrap();
        c.dispatch(PaletteAction::RegenerateAll).unwrap();
        c.dispatch(PaletteAction::Copy("#ff0000".to_string())).unwrap();

        assert_eq!(c.palette().get(0), Some(rgb(255, 0, 0)));
        assert_eq!(c.clipboard().last(), Some("#ff0000"));
        assert!(c.dispatch(PaletteAction::ToggleLock(9)).is_err());
    }
}
