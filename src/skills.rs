//! One-shot skill-bar reveal.
//!
//! The skills section is watched until it first crosses the visibility
//! threshold; every progress bar is then widened to its `data-progress`
//! percentage and the watch is dropped. Scrolling away and back does nothing.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Attribute carrying a bar's target percentage.
pub const PROGRESS_ATTR: &str = "data-progress";

/// Latch that lets the reveal fire at most once per page life.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SkillReveal {
    threshold: f64,
    fired: bool,
}

impl SkillReveal {
    /// Reveal once at least `threshold` (0.0..=1.0) of the section is visible.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), fired: false }
    }

    /// Feed one intersection report. Returns `true` only for the first
    /// intersecting report whose visible ratio reaches the threshold.
    ///
    /// Observers report on registration regardless of thresholds, so the
    /// ratio is checked here rather than trusted.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.fired || !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// CSS width for a `data-progress` value, clamped to `0..=100`.
///
/// Accepts a trailing `%`. Returns `None` for non-numeric input.
#[must_use]
pub fn progress_width(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let Ok(value) = number.parse::<f64>() else {
        return None;
    };
    if !value.is_finite() {
        return None;
    }
    Some(format!("{}%", value.clamp(0.0, 100.0)))
}
