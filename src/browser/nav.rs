use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use super::on;
use super::page::Page;
use crate::error::FolioError;
use crate::nav::{MENU_CLOSE_ICON, MENU_OPEN_ICON, MenuState, NAVBAR_OPEN_CLASS};

/// Mobile menu button, plus closing the menu whenever a nav link is clicked.
pub fn bind_menu(page: &Page) -> Result<(), FolioError> {
    let button = page.by_id("menu-btn")?;
    let navbar = page.select(".navbar")?;
    let menu = Rc::new(Cell::new(MenuState::default()));

    {
        let menu = Rc::clone(&menu);
        let navbar = navbar.clone();
        let button_el = button.clone();
        on(&button, "click", move |_| {
            let mut state = menu.get();
            state.toggle();
            menu.set(state);
            render(&navbar, &button_el, state);
        })?;
    }

    for link in page.select_all(".nav-link")? {
        let menu = Rc::clone(&menu);
        let navbar = navbar.clone();
        let button = button.clone();
        on(&link, "click", move |_| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            render(&navbar, &button, state);
        })?;
    }
    Ok(())
}

fn render(navbar: &Element, button: &Element, state: MenuState) {
    let outcome = navbar
        .class_list()
        .toggle_with_force(NAVBAR_OPEN_CLASS, state.open)
        .and_then(|_| button.class_list().remove_2(MENU_OPEN_ICON, MENU_CLOSE_ICON))
        .and_then(|()| button.class_list().add_1(state.icon()));
    if let Err(e) = outcome {
        log::warn!("menu: {}", FolioError::from(e));
    }
}

/// Smooth-scroll to the top of the document.
pub fn bind_back_to_top(page: &Page) -> Result<(), FolioError> {
    let button = page.by_id("back-to-top")?;
    let window = page.window.clone();
    on(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    })
}
