use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::page::{Page, as_html, select_all_in};
use crate::config::SiteConfig;
use crate::error::FolioError;
use crate::skills::{PROGRESS_ATTR, SkillReveal, progress_width};

/// Watch the skills section and fill its bars the first time it is in view.
pub fn bind(page: &Page, config: &SiteConfig) -> Result<(), FolioError> {
    let Some(section) = page.document.get_element_by_id("skills") else {
        log::debug!("page has no skills section");
        return Ok(());
    };

    let mut reveal = SkillReveal::new(config.skills_threshold);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !reveal.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    continue;
                }
                let target = entry.target();
                if let Err(e) = fill_bars(&target) {
                    log::warn!("skill bars: {e}");
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.skills_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(&section);
    callback.forget();
    Ok(())
}

fn fill_bars(section: &Element) -> Result<(), FolioError> {
    for item in select_all_in(section, ".skill-item")? {
        let Some(bar) = item.query_selector(".progress-bar")?.as_ref().and_then(as_html) else {
            continue;
        };
        let raw = bar.get_attribute(PROGRESS_ATTR).unwrap_or_default();
        let Some(width) = progress_width(&raw) else {
            log::warn!("skill bar has unusable {PROGRESS_ATTR}={raw:?}");
            continue;
        };
        bar.style().set_property("width", &width)?;
    }
    Ok(())
}
