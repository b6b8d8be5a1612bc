//! Scroll-offset effects and active-section lookup.
//!
//! Recomputed on every scroll event without throttling; the work is a linear
//! pass over a handful of sections.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::SiteConfig;

/// Header and back-to-top state for one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollEffects {
    pub header_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollEffects {
    #[must_use]
    pub fn at(offset: f64, config: &SiteConfig) -> Self {
        Self {
            header_scrolled: offset > config.header_offset,
            back_to_top_visible: offset > config.back_to_top_offset,
        }
    }
}

/// Layout box of a top-level content section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    /// Whether `offset` falls in `[top - lead, top - lead + height)`.
    #[must_use]
    pub fn contains(&self, offset: f64, lead: f64) -> bool {
        let start = self.top - lead;
        offset >= start && offset < start + self.height
    }
}

/// The section whose band contains `offset`. Later sections win ties.
#[must_use]
pub fn active_section(offset: f64, lead: f64, sections: &[SectionBox]) -> Option<&SectionBox> {
    sections.iter().rev().find(|s| s.contains(offset, lead))
}

/// Index of the first nav link whose `href` contains `section_id`.
///
/// Sections without an id never match.
#[must_use]
pub fn nav_link_for<S: AsRef<str>>(section_id: &str, hrefs: &[Option<S>]) -> Option<usize> {
    if section_id.is_empty() {
        return None;
    }
    hrefs
        .iter()
        .position(|href| href.as_ref().is_some_and(|h| h.as_ref().contains(section_id)))
}
