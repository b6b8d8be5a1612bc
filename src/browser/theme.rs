use web_sys::{Element, HtmlElement};

use super::on;
use super::page::Page;
use super::storage::LocalStore;
use crate::config::SiteConfig;
use crate::error::FolioError;
use crate::theme::{Theme, ThemeController};

/// Restore the saved theme and wire the toggle control.
pub fn bind(page: &Page, config: &SiteConfig) -> Result<(), FolioError> {
    let body = page.body()?;
    let toggle = page.by_id("theme-toggle")?;
    let icon = toggle.query_selector("i")?;

    let mut controller = ThemeController::new(LocalStore::open(&page.window), config.theme_key.clone());
    render(&body, icon.as_ref(), controller.restore())?;

    on(&toggle, "click", move |_| {
        let theme = controller.toggle();
        if let Err(e) = render(&body, icon.as_ref(), theme) {
            log::warn!("theme toggle: {e}");
        }
    })
}

fn render(body: &HtmlElement, icon: Option<&Element>, theme: Theme) -> Result<(), FolioError> {
    let classes = body.class_list();
    classes.remove_2(Theme::Dark.class(), Theme::Light.class())?;
    classes.add_1(theme.class())?;

    if let Some(icon) = icon {
        let glyphs = icon.class_list();
        glyphs.remove_1(theme.toggled().icon())?;
        glyphs.add_1(theme.icon())?;
    }
    Ok(())
}
