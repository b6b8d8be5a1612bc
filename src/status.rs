//! Transient status message under the contact form.
//!
//! Every shown message schedules its own clear. Clears are never cancelled,
//! so an older message's timer may clear a newer message (last writer wins on
//! the text, first timer wins on the clear).

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Base class of the message element; severity is appended while shown.
pub const STATUS_BASE_CLASS: &str = "form-message";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success }
    }
}

/// What the message element renders: its text and full class attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusView {
    pub text: String,
    pub class_name: String,
}

impl StatusView {
    #[must_use]
    pub fn cleared() -> Self {
        Self { text: String::new(), class_name: STATUS_BASE_CLASS.to_owned() }
    }

    #[must_use]
    pub fn of(message: &StatusMessage) -> Self {
        Self {
            text: message.text.clone(),
            class_name: format!("{STATUS_BASE_CLASS} {}", message.severity.class()),
        }
    }
}

/// The message area's rendered state.
#[derive(Clone, Debug)]
pub struct StatusArea {
    view: StatusView,
    clear_after_ms: u32,
}

impl StatusArea {
    #[must_use]
    pub fn new(clear_after_ms: u32) -> Self {
        Self { view: StatusView::cleared(), clear_after_ms }
    }

    /// Display `message`; the caller must call [`Self::expire`] after the
    /// returned delay.
    pub fn show(&mut self, message: &StatusMessage) -> u32 {
        self.view = StatusView::of(message);
        self.clear_after_ms
    }

    /// A scheduled clear fired. Clears whatever is showing.
    pub fn expire(&mut self) {
        self.view = StatusView::cleared();
    }

    #[must_use]
    pub fn view(&self) -> &StatusView {
        &self.view
    }
}
