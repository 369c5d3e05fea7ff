//! Semantic wrapper for locale identifiers.
//!
//! Locales are opaque tags such as `en`, `fr`, or `ar_SA`. No validation is
//! performed against a registry: the string files on disk are the only source
//! of truth for which locales exist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale bundled by every build when nothing else is requested.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// A locale identifier selecting a translated string set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

/// Ordered locales to include in a build.
pub type LocaleSet = Vec<Locale>;

impl Locale {
    /// Create a new locale.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the locale tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::from(DEFAULT_FALLBACK_LOCALE)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trim a locale-ish option and discard blank values.
///
/// ```
/// use chipper_common::normalise_locale;
///
/// assert_eq!(normalise_locale(Some("  fr ")), Some("fr"));
/// assert_eq!(normalise_locale(Some("   ")), None);
/// assert_eq!(normalise_locale(None), None);
/// ```
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input
        .map(str::trim)
        .and_then(|value| if value.is_empty() { None } else { Some(value) })
}
