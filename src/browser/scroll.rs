use web_sys::{Document, Element, HtmlElement, Window};

use super::on;
use super::page::{Page, as_html, select_all_in};
use crate::config::SiteConfig;
use crate::error::FolioError;
use crate::nav::NAV_ACTIVE_CLASS;
use crate::scroll::{ScrollEffects, SectionBox, active_section, nav_link_for};

const SECTIONS_SELECTOR: &str = "main section";

struct ScrollTargets {
    window: Window,
    document: Document,
    header: Element,
    back_to_top: HtmlElement,
    nav_links: Vec<Element>,
}

/// Header state, back-to-top visibility, and the active nav link, on every scroll.
pub fn bind(page: &Page, config: &SiteConfig) -> Result<(), FolioError> {
    let targets = ScrollTargets {
        window: page.window.clone(),
        document: page.document.clone(),
        header: page.by_id("header")?,
        back_to_top: page.html_by_id("back-to-top")?,
        nav_links: page.select_all(".nav-link")?,
    };
    let config = config.clone();
    on(&page.window, "scroll", move |_| {
        if let Err(e) = on_scroll(&targets, &config) {
            log::warn!("scroll: {e}");
        }
    })
}

fn on_scroll(targets: &ScrollTargets, config: &SiteConfig) -> Result<(), FolioError> {
    let offset = targets.window.scroll_y()?;
    let fx = ScrollEffects::at(offset, config);

    targets.header.class_list().toggle_with_force("scrolled", fx.header_scrolled)?;
    let style = targets.back_to_top.style();
    style.set_property("opacity", if fx.back_to_top_visible { "1" } else { "0" })?;
    style.set_property("pointer-events", if fx.back_to_top_visible { "auto" } else { "none" })?;

    let sections = section_boxes(&targets.document)?;
    let Some(active) = active_section(offset, config.section_lead, &sections) else {
        return Ok(());
    };
    mark_active(&targets.nav_links, &active.id)
}

fn section_boxes(document: &Document) -> Result<Vec<SectionBox>, FolioError> {
    let Some(root) = document.document_element() else {
        return Ok(Vec::new());
    };
    Ok(select_all_in(&root, SECTIONS_SELECTOR)?
        .iter()
        .filter_map(as_html)
        .map(|sec| SectionBox {
            id: sec.id(),
            top: f64::from(sec.offset_top()),
            height: f64::from(sec.offset_height()),
        })
        .collect())
}

fn mark_active(links: &[Element], section_id: &str) -> Result<(), FolioError> {
    let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();
    let Some(index) = nav_link_for(section_id, &hrefs) else {
        log::debug!("no nav link for section {section_id:?}");
        return Ok(());
    };
    for link in links {
        link.class_list().remove_1(NAV_ACTIVE_CLASS)?;
    }
    links[index].class_list().add_1(NAV_ACTIVE_CLASS)?;
    Ok(())
}
