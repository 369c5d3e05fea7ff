//! Soft-failure reporting.
//!
//! Some build checks are diagnostic rather than fatal: a missing strings
//! directory should be reported, yet the build still proceeds with a
//! best-effort value. [`Checked`] carries that value together with every
//! [`Diagnostic`] raised while producing it, leaving escalation to the caller.

use log::debug;
use std::fmt;

/// A non-fatal problem observed while computing a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    target: &'static str,
    message: String,
}

impl Diagnostic {
    /// Creates a diagnostic attributed to `target` (usually a module path).
    #[must_use]
    pub fn new(target: &'static str, message: impl Into<String>) -> Self {
        Self {
            target,
            message: message.into(),
        }
    }

    /// Returns the component that raised the diagnostic.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        self.target
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.message)
    }
}

/// A best-effort value plus the diagnostics raised while computing it.
///
/// # Examples
///
/// ```
/// use chipper_common::{Checked, Diagnostic};
///
/// let mut checked = Checked::clean(vec!["en"]);
/// assert!(checked.is_clean());
///
/// checked.record(Diagnostic::new("example", "no string files found"));
/// assert_eq!(checked.diagnostics().len(), 1);
/// assert_eq!(checked.value(), &vec!["en"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Checked<T> {
    value: T,
    diagnostics: Vec<Diagnostic>,
}

impl<T> Checked<T> {
    /// Wraps a value that was produced without any diagnostics.
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// Wraps a fallback value together with the diagnostic that forced it.
    pub fn degraded(value: T, diagnostic: Diagnostic) -> Self {
        let mut checked = Self::clean(value);
        checked.record(diagnostic);
        checked
    }

    /// Records a diagnostic and logs it at `debug` under its target.
    ///
    /// Reporting diagnostics to users is left to whoever unwraps the value.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        debug!(target: diagnostic.target(), "{}", diagnostic.message());
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` when no diagnostics were recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the best-effort value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the recorded diagnostics in the order they were raised.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Transforms the value while keeping the diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Splits into the value and its diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }
}
