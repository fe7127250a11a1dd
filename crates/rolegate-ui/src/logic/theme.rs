//! Light/dark theme state and the controller that reflects it on the page.
//!
//! # Design
//! - [`ThemeMode`] is the single source of truth; the body class, the stored
//!   preference, and the glyph are all derived from it.
//! - The stored value is never computed by reading the DOM back.

use crate::error::UiError;
use crate::logic::page::{PreferenceStore, ThemeSurface};

/// Glyph shown while the dark theme is active (offers the way back to light).
pub const SUN_GLYPH: &str = "\u{2600}\u{fe0f}";
/// Glyph shown while the light theme is active.
pub const MOON_GLYPH: &str = "\u{1f319}";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// Value persisted in local storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored preference. Only the exact value `"dark"` selects
    /// the dark theme; absent or unrecognised values fall back to light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the dark marker class belongs on the body.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Indicator glyph for this mode.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Light => MOON_GLYPH,
            Self::Dark => SUN_GLYPH,
        }
    }
}

/// Owns the current [`ThemeMode`] and pushes it to the page and the store.
#[derive(Debug)]
pub struct ThemeController<S, P> {
    surface: S,
    store: P,
    key: String,
    mode: ThemeMode,
}

impl<S: ThemeSurface, P: PreferenceStore> ThemeController<S, P> {
    /// Build a controller in the light state. Call [`Self::load`] before use.
    #[must_use]
    pub fn new(surface: S, store: P, key: impl Into<String>) -> Self {
        Self {
            surface,
            store,
            key: key.into(),
            mode: ThemeMode::Light,
        }
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Apply the stored preference.
    ///
    /// An unreadable store counts as no preference. The dark class is only
    /// ever added here, never removed, and the stored value is left as-is.
    ///
    /// # Errors
    ///
    /// Returns an error when the body class or glyph cannot be updated.
    pub fn load(&mut self) -> Result<ThemeMode, UiError> {
        let stored = self.store.read(&self.key).ok().flatten();
        let mode = ThemeMode::from_stored(stored.as_deref());
        if mode.is_dark() {
            self.surface.set_dark_marker(true)?;
        }
        self.surface.set_glyph(mode.glyph())?;
        self.mode = mode;
        Ok(mode)
    }

    /// Flip the mode, then derive class, glyph, and stored value from it.
    ///
    /// # Errors
    ///
    /// Returns the first DOM or storage failure. The mode has already
    /// flipped by then, so the next toggle re-derives every output.
    pub fn toggle(&mut self) -> Result<ThemeMode, UiError> {
        let next = self.mode.toggled();
        self.mode = next;
        self.surface.set_dark_marker(next.is_dark())?;
        self.surface.set_glyph(next.glyph())?;
        self.store.write(&self.key, next.as_str())?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::page::testing::MemoryPage;

    const KEY: &str = "theme";

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn only_exact_dark_selects_dark() {
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("Dark")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("\"dark\"")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn stored_dark_applies_class_and_sun() {
        let page = MemoryPage::with_stored(KEY, "dark");
        let mut controller = ThemeController::new(&page, &page, KEY);
        assert_eq!(controller.load().unwrap(), ThemeMode::Dark);
        assert!(page.is_dark());
        assert_eq!(page.glyph().as_deref(), Some(SUN_GLYPH));
    }

    #[test]
    fn absent_or_unknown_preference_shows_moon_without_class() {
        for page in [MemoryPage::new(), MemoryPage::with_stored(KEY, "sepia")] {
            let mut controller = ThemeController::new(&page, &page, KEY);
            assert_eq!(controller.load().unwrap(), ThemeMode::Light);
            assert!(!page.is_dark());
            assert_eq!(page.glyph().as_deref(), Some(MOON_GLYPH));
        }
    }

    #[test]
    fn load_leaves_unrecognised_value_untouched() {
        let page = MemoryPage::with_stored(KEY, "sepia");
        let mut controller = ThemeController::new(&page, &page, KEY);
        controller.load().unwrap();
        assert_eq!(page.stored(KEY).as_deref(), Some("sepia"));
    }

    #[test]
    fn unreadable_store_counts_as_absent() {
        let page = MemoryPage::new();
        page.fail_reads.set(true);
        let mut controller = ThemeController::new(&page, &page, KEY);
        assert_eq!(controller.load().unwrap(), ThemeMode::Light);
        assert_eq!(page.glyph().as_deref(), Some(MOON_GLYPH));
    }

    #[test]
    fn toggle_round_trip_updates_class_store_and_glyph() {
        let page = MemoryPage::new();
        let mut controller = ThemeController::new(&page, &page, KEY);
        controller.load().unwrap();

        assert_eq!(controller.toggle().unwrap(), ThemeMode::Dark);
        assert!(page.is_dark());
        assert_eq!(page.stored(KEY).as_deref(), Some("dark"));
        assert_eq!(page.glyph().as_deref(), Some(SUN_GLYPH));

        assert_eq!(controller.toggle().unwrap(), ThemeMode::Light);
        assert!(!page.is_dark());
        assert_eq!(page.stored(KEY).as_deref(), Some("light"));
        assert_eq!(page.glyph().as_deref(), Some(MOON_GLYPH));
    }

    #[test]
    fn toggle_from_stored_dark_goes_light() {
        let page = MemoryPage::with_stored(KEY, "dark");
        let mut controller = ThemeController::new(&page, &page, KEY);
        controller.load().unwrap();
        assert_eq!(controller.toggle().unwrap(), ThemeMode::Light);
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert_eq!(page.stored(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn failed_write_keeps_page_consistent_with_mode() {
        let page = MemoryPage::new();
        page.fail_writes.set(true);
        let mut controller = ThemeController::new(&page, &page, KEY);
        controller.load().unwrap();

        let err = controller.toggle().unwrap_err();
        assert!(matches!(err, UiError::Storage { .. }));
        assert_eq!(controller.mode(), ThemeMode::Dark);
        assert!(page.is_dark());
        assert_eq!(page.glyph().as_deref(), Some(SUN_GLYPH));
        assert_eq!(page.stored(KEY), None);
    }
}
