//! Dark/light theme state and persistence.
//!
//! The active theme is a body class (`dark-mode` or `light-mode`, never both)
//! mirrored into the preference store under a fixed key. The toggle's icon
//! shows a moon in dark mode and a sun in light mode.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A store that cannot be written is logged and
//! the theme still applies for the current page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::store::PreferenceStore;

/// One of the two mutually exclusive page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Body class for this theme; also the value written to the store.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => "dark-mode",
            Self::Light => "light-mode",
        }
    }

    /// Font Awesome glyph class shown on the toggle control.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "fa-moon",
            Self::Light => "fa-sun",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Parse a stored value. Only the two body class names are recognized.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark-mode" => Some(Self::Dark),
            "light-mode" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Owns the current theme and writes every change through to the store.
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into(), current: Theme::default() }
    }

    /// Apply the stored preference, or the dark default when none is stored.
    pub fn restore(&mut self) -> Theme {
        let stored = self.store.load(&self.key);
        let theme = match stored.as_deref().map(|raw| (raw, Theme::parse(raw))) {
            Some((_, Some(theme))) => theme,
            Some((raw, None)) => {
                log::warn!("ignoring unknown stored theme {raw:?}");
                Theme::default()
            }
            None => Theme::default(),
        };
        self.apply(theme);
        theme
    }

    /// Make `theme` current and persist it.
    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.save(&self.key, theme.class()) {
            log::warn!("theme not persisted: {e}");
        }
    }

    /// Switch to the opposite theme and return it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        next
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }
}
