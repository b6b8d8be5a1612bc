//! Footer year, preloader dismissal, and the typing loop.

use gloo_timers::callback::Timeout;
use js_sys::Date;
use web_sys::Element;

use super::page::Page;
use crate::config::SiteConfig;
use crate::error::FolioError;
use crate::typing::Typewriter;

pub fn write_year(page: &Page) -> Result<(), FolioError> {
    let el = page.by_id("current-year")?;
    el.set_text_content(Some(&Date::new_0().get_full_year().to_string()));
    Ok(())
}

/// Fade the preloader, remove it after the fade, then start typing.
pub fn on_loaded(page: &Page, config: &SiteConfig) {
    let typing = match (page.by_id("profession-text"), Typewriter::new(&config.phrases, config.typing)) {
        (Ok(el), Some(typewriter)) => Some((el, typewriter)),
        (Err(e), _) => {
            log::warn!("typing skipped: {e}");
            None
        }
        (Ok(_), None) => None,
    };
    let start_typing = move || {
        if let Some((el, typewriter)) = typing {
            run_typing(el, typewriter);
        }
    };

    let preloader = match page.html_by_id("preloader") {
        Ok(preloader) => preloader,
        Err(e) => {
            log::debug!("{e}; starting typing now");
            start_typing();
            return;
        }
    };
    if let Err(e) = preloader.style().set_property("opacity", "0") {
        log::warn!("preloader fade: {}", FolioError::from(e));
    }
    Timeout::new(config.preloader_fade_ms, move || {
        if let Err(e) = preloader.style().set_property("display", "none") {
            log::warn!("preloader hide: {}", FolioError::from(e));
        }
        start_typing();
    })
    .forget();
}

/// Render one tick now and schedule the next; exactly one tick is ever pending.
fn run_typing(el: Element, mut typewriter: Typewriter) {
    let tick = typewriter.tick();
    el.set_text_content(Some(&tick.text));
    Timeout::new(tick.delay_ms, move || run_typing(el, typewriter)).forget();
}
