//! DOM bindings for the portfolio page.
//!
//! ARCHITECTURE
//! ============
//! Every behavior group binds independently against the page markup. A group
//! whose elements are missing logs a warning and is skipped; the rest of the
//! page keeps working. Handlers translate DOM events into calls on the pure
//! core and write the results back as classes, styles, and text.
//!
//! Two readiness points matter: structure-ready (`DOMContentLoaded`) binds all
//! listeners, and full load (`load`) dismisses the preloader and starts the
//! typing loop. Either may already have passed when the module starts.

mod contact;
mod filter;
mod nav;
mod page;
mod scroll;
mod skills;
mod startup;
mod storage;
mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Event, EventTarget};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::error::FolioError;

pub use contact::{Delivery, HttpSender};
pub use page::Page;
pub use storage::LocalStore;

/// Module entry point, run once when the WebAssembly module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let page = match Page::current() {
        Ok(page) => page,
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            return;
        }
    };
    let (config, notes) = load_config(&page);
    if let Err(e) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
    for note in &notes {
        log::warn!("{note}");
    }

    let ready_page = page.clone();
    let ready_config = config.clone();
    when_ready(&page, move || {
        bind_all(&ready_page, &ready_config);
        let loaded_page = ready_page.clone();
        let loaded_config = ready_config.clone();
        when_loaded(&ready_page, move || startup::on_loaded(&loaded_page, &loaded_config));
    });
}

/// Page config plus any problems found while reading it. The logger is not
/// up yet, so problems are returned for the caller to log.
fn load_config(page: &Page) -> (SiteConfig, Vec<String>) {
    let Some(el) = page.document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return (SiteConfig::default(), Vec::new());
    };
    let raw = el.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(mut config) => {
            let notes = config.normalize();
            (config, notes)
        }
        Err(e) => (SiteConfig::default(), vec![format!("{e}; using defaults")]),
    }
}

fn bind_all(page: &Page, config: &SiteConfig) {
    let groups: [(&str, Result<(), FolioError>); 8] = [
        ("theme", theme::bind(page, config)),
        ("scroll", scroll::bind(page, config)),
        ("menu", nav::bind_menu(page)),
        ("back-to-top", nav::bind_back_to_top(page)),
        ("skills", skills::bind(page, config)),
        ("filter", filter::bind(page)),
        ("contact", contact::bind(page, config)),
        ("year", startup::write_year(page)),
    ];
    for (name, outcome) in groups {
        match outcome {
            Ok(()) => log::debug!("{name} bound"),
            Err(e) => log::warn!("{name} skipped: {e}"),
        }
    }
}

/// Run `f` once the document structure is parsed.
fn when_ready(page: &Page, f: impl FnOnce() + 'static) {
    if page.document.ready_state() == "loading" {
        once(&page.document, "DOMContentLoaded", f);
    } else {
        f();
    }
}

/// Run `f` once every subresource has loaded.
fn when_loaded(page: &Page, f: impl FnOnce() + 'static) {
    if page.document.ready_state() == "complete" {
        f();
    } else {
        once(&page.window, "load", f);
    }
}

/// Attach a handler for every `event` on `target`. The handler lives for the
/// rest of the page.
///
/// # Errors
///
/// Returns [`FolioError::Script`] if the listener could not be attached.
pub(crate) fn on(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), FolioError> {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn once(target: &EventTarget, event: &str, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.unchecked_ref()) {
        log::error!("cannot listen for {event}: {}", FolioError::from(e));
    }
}
