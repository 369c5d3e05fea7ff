//! Forwarding uncaught errors to an embedding page.
//!
//! Test harnesses load simulations in a frame with `?postMessageOnError` and
//! listen for error reports posted to the parent window.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Target origin used when posting reports.
pub const ANY_ORIGIN: &str = "*";

/// An uncaught error as observed by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorEvent {
    /// The error message, when the event carried one.
    pub message: Option<String>,
    /// The stack trace of the underlying error, when available.
    pub stack: Option<String>,
}

/// The structured payload posted to the parent context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Always `"error"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// URL of the simulation page.
    pub url: String,
    /// Error message, or empty.
    pub message: String,
    /// Stack trace, or empty.
    pub stack: String,
}

impl ErrorReport {
    /// Build a report for `event` raised on the page at `url`.
    #[must_use]
    pub fn new(url: &str, event: &ErrorEvent) -> Self {
        Self {
            kind: "error".to_owned(),
            url: url.to_owned(),
            message: event.message.clone().unwrap_or_default(),
            stack: event.stack.clone().unwrap_or_default(),
        }
    }
}

/// The browsing context that embeds the simulation.
#[cfg_attr(test, mockall::automock)]
pub trait ParentContext {
    /// Deliver a serialized message to the parent.
    fn post_message(&self, message: &str, target_origin: &str);
}

/// Sends [`ErrorReport`]s for a page to its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorForwarder {
    url: String,
}

impl ErrorForwarder {
    /// Create a forwarder for the page at `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Forward `event` to `parent`, if there is one.
    ///
    /// Returns `true` when a message was posted. Serialization failures are
    /// logged and reported as `false`; forwarding never raises.
    pub fn forward(&self, event: &ErrorEvent, parent: Option<&dyn ParentContext>) -> bool {
        let Some(parent) = parent else {
            debug!(target: "error_report", "no parent context; dropping error report");
            return false;
        };

        match serde_json::to_string(&ErrorReport::new(&self.url, event)) {
            Ok(payload) => {
                parent.post_message(&payload, ANY_ORIGIN);
                true
            }
            Err(err) => {
                warn!(target: "error_report", "failed to serialize error report: {err}");
                false
            }
        }
    }
}
