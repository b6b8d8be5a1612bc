use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Window};

use super::on;
use super::page::{Page, as_html};
use crate::error::FolioError;
use crate::filter::{ANIMATION_ATTR, ANIMATION_VALUE, CATEGORY_ATTR, FILTER_ACTIVE_CLASS, FILTER_ATTR, Filter};

/// Global installed by the animate-on-scroll library.
const REVEAL_LIBRARY: &str = "AOS";

/// Wire every filter button to show/hide the project cards.
pub fn bind(page: &Page) -> Result<(), FolioError> {
    let buttons = page.select_all(".filter-btn")?;
    let cards = page.select_all(".project-card")?;

    for button in &buttons {
        let buttons = buttons.clone();
        let cards = cards.clone();
        let clicked = button.clone();
        let window = page.window.clone();
        on(button, "click", move |_| {
            if let Err(e) = apply(&buttons, &clicked, &cards, &window) {
                log::warn!("filter: {e}");
            }
        })?;
    }
    Ok(())
}

fn apply(buttons: &[Element], clicked: &Element, cards: &[Element], window: &Window) -> Result<(), FolioError> {
    for button in buttons {
        button.class_list().remove_1(FILTER_ACTIVE_CLASS)?;
    }
    clicked.class_list().add_1(FILTER_ACTIVE_CLASS)?;

    let filter = Filter::parse(clicked.get_attribute(FILTER_ATTR).as_deref());
    for card in cards {
        let shown = filter.shows(card.get_attribute(CATEGORY_ATTR).as_deref());
        if let Some(card) = as_html(card) {
            card.style().set_property("display", if shown { "block" } else { "none" })?;
        }
        if shown {
            card.set_attribute(ANIMATION_ATTR, ANIMATION_VALUE)?;
        } else {
            card.remove_attribute(ANIMATION_ATTR)?;
        }
    }
    refresh_reveal_library(window)
}

/// Ask the reveal library to rescan the page so newly shown cards animate.
fn refresh_reveal_library(window: &Window) -> Result<(), FolioError> {
    let library = Reflect::get(window, &JsValue::from_str(REVEAL_LIBRARY))?;
    if library.is_undefined() || library.is_null() {
        log::debug!("{REVEAL_LIBRARY} not loaded; skipping refresh");
        return Ok(());
    }
    let refresh = Reflect::get(&library, &JsValue::from_str("refreshHard"))?;
    let Some(refresh) = refresh.dyn_ref::<Function>() else {
        log::debug!("{REVEAL_LIBRARY}.refreshHard is not a function");
        return Ok(());
    };
    refresh.call0(&library)?;
    Ok(())
}
