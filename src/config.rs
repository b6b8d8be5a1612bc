//! Site configuration: timings, thresholds, and the contact endpoint.
//!
//! Defaults reproduce the stock page. A page may override any subset by
//! embedding a JSON object in `<script type="application/json" id="site-config">`;
//! unknown keys are ignored and absent keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::FolioError;
use crate::typing::TypingTiming;

/// Element id of the optional embedded JSON config.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Phrases cycled by the hero typing animation.
pub const DEFAULT_PHRASES: [&str; 3] = ["Frontend Developer", "Programmer", "Freelancer"];

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub phrases: Vec<String>,
    pub typing: TypingTiming,
    /// Scroll offset (px) past which the header gets its `scrolled` state.
    pub header_offset: f64,
    /// Scroll offset (px) past which the back-to-top control is shown.
    pub back_to_top_offset: f64,
    /// How far (px) above a section's top its nav link becomes active.
    pub section_lead: f64,
    /// Fraction of the skills section that must be visible to reveal bars.
    pub skills_threshold: f64,
    pub status_clear_ms: u32,
    pub preloader_fade_ms: u32,
    pub theme_key: String,
    /// Form relay URL. `None` keeps the simulated send.
    pub contact_endpoint: Option<String>,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            typing: TypingTiming::default(),
            header_offset: 80.0,
            back_to_top_offset: 500.0,
            section_lead: 200.0,
            skills_threshold: 0.5,
            status_clear_ms: 5000,
            preloader_fade_ms: 500,
            theme_key: "theme".to_owned(),
            contact_endpoint: None,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse overrides from a JSON object. Call [`Self::normalize`] before use.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if `raw` is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Replace values that would break an invariant with their defaults.
    ///
    /// Returns one note per replaced value. Config is loaded before the
    /// logger exists, so the caller logs these once logging is up.
    pub fn normalize(&mut self) -> Vec<String> {
        let defaults = Self::default();
        let mut notes = Vec::new();
        if self.phrases.is_empty() {
            notes.push("site config has no typing phrases; using defaults".to_owned());
            self.phrases = defaults.phrases;
        }
        if !(0.0..=1.0).contains(&self.skills_threshold) {
            notes.push(format!("skills threshold {} out of range; clamping", self.skills_threshold));
            self.skills_threshold = self.skills_threshold.clamp(0.0, 1.0);
        }
        if self.theme_key.trim().is_empty() {
            notes.push("site config has a blank theme key; using default".to_owned());
            self.theme_key = defaults.theme_key;
        }
        self.contact_endpoint = self
            .contact_endpoint
            .take()
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty());
        notes
    }

    /// Parsed log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
