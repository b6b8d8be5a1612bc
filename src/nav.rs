//! Mobile menu state.

/// Class toggled on the navigation panel while the mobile menu is open.
pub const NAVBAR_OPEN_CLASS: &str = "active";
/// Menu button glyph while the menu is closed.
pub const MENU_OPEN_ICON: &str = "fa-bars";
/// Menu button glyph while the menu is open.
pub const MENU_CLOSE_ICON: &str = "fa-xmark";
/// Class marking the nav link of the section in view.
pub const NAV_ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip the menu and return whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu, as when a nav link is followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Glyph class the menu button should show.
    #[must_use]
    pub fn icon(self) -> &'static str {
        if self.open { MENU_CLOSE_ICON } else { MENU_OPEN_ICON }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_resets() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.open);
        menu.close();
        assert!(!menu.open);
    }

    #[test]
    fn icon_follows_state() {
        let mut menu = MenuState::default();
        assert_eq!(menu.icon(), "fa-bars");
        menu.toggle();
        assert_eq!(menu.icon(), "fa-xmark");
    }
}
