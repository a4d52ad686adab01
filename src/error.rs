//! Error types for mounting behaviors and reading configuration.
//!
//! ERROR HANDLING
//! ==============
//! Mount failures propagate to the `start` export and surface as a thrown JS
//! error. Failures inside event callbacks are logged and the event dropped;
//! nothing is retried.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// A registry role was needed but its selector matched nothing.
    #[error("element missing: {0}")]
    Missing(&'static str),
    /// The element exists but is not the expected interface (e.g. not an `<img>`).
    #[error("unexpected element type for {0}")]
    WrongType(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl DomError {
    /// Stable code for log lines.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoWindow => "E_NO_WINDOW",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::Missing(_) => "E_MISSING_ELEMENT",
            Self::WrongType(_) => "E_WRONG_TYPE",
            Self::Js(_) => "E_JS",
        }
    }
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => Self::Js(message),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&format!("{}: {err}", err.code()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("unknown log level: {0}")]
    LogLevel(String),
}
