//! Error type shared by the pure core and the browser bindings.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is ever surfaced to the visitor as a fault. Event handlers
//! log these and carry on; the only user-visible failure channel is the
//! contact form's status message.

/// Errors raised while wiring or running page behavior.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A required element of the page markup could not be found.
    #[error("missing element: {selector}")]
    MissingElement { selector: String },
    /// A browser API threw; the JavaScript value is rendered as text.
    #[error("script error: {0}")]
    Script(String),
    /// The embedded site configuration is not valid JSON.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    /// The preference store rejected a read or write.
    #[error("preference store unavailable: {0}")]
    Storage(String),
    /// The contact message could not be delivered.
    #[error("contact delivery failed: {0}")]
    Delivery(String),
}

#[cfg(feature = "browser")]
impl FolioError {
    pub(crate) fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for FolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Script(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
