//! Contact form validation and pluggable delivery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has no backend. Delivery is an injected [`ContactSender`]: the
//! stock page uses [`SimulatedSender`], and a page that configures a form
//! relay endpoint gets an HTTP sender from the browser layer instead.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::FolioError;
use crate::status::StatusMessage;

pub const INVALID_EMAIL_TEXT: &str = "Please enter a valid email address.";
pub const SENT_TEXT: &str = "Message sent successfully! I'll be in touch.";
pub const DELIVERY_FAILED_TEXT: &str = "Sorry, your message could not be sent. Please try again later.";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("email pattern failed to compile: {e}");
        None
    }
});

/// Loose `local@domain.tld` check: no whitespace, exactly one `@`, and a dot
/// somewhere after it with text on both sides.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    let email = email.trim().to_lowercase();
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(&email))
}

/// Fields of the contact form. Only `email` is required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    /// Trim every field.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Delivers a validated contact request somewhere a human will read it.
pub trait ContactSender {
    /// # Errors
    ///
    /// Returns [`FolioError::Delivery`] if the message was not accepted.
    fn send(&self, request: ContactRequest) -> impl Future<Output = Result<(), FolioError>>;
}

/// Accepts everything without sending it anywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedSender;

impl ContactSender for SimulatedSender {
    async fn send(&self, request: ContactRequest) -> Result<(), FolioError> {
        log::info!("simulated contact delivery for {}", request.email);
        Ok(())
    }
}

/// Outcome of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub status: StatusMessage,
    /// Whether the form fields should be cleared.
    pub reset_form: bool,
}

/// Lets one submit through at a time. Submits arriving while a delivery is
/// still in flight are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitGate {
    pending: bool,
}

impl SubmitGate {
    /// Claim the gate. Returns `false` if a submit is already pending.
    pub fn try_begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Release the gate once the outcome has been shown.
    pub fn finish(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Validate `request` and hand it to `sender` if the email is acceptable.
pub async fn submit<S: ContactSender>(sender: &S, request: ContactRequest) -> Submission {
    let request = request.normalized();
    if !validate_email(&request.email) {
        return Submission { status: StatusMessage::error(INVALID_EMAIL_TEXT), reset_form: false };
    }
    match sender.send(request).await {
        Ok(()) => Submission { status: StatusMessage::success(SENT_TEXT), reset_form: true },
        Err(e) => {
            log::warn!("{e}");
            Submission { status: StatusMessage::error(DELIVERY_FAILED_TEXT), reset_form: false }
        }
    }
}
