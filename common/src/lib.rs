//! Shared building blocks for the chipper build helpers: locale identifiers,
//! soft-failure diagnostics, cache-buster generation, and `chipper.toml`
//! configuration.

pub mod cache_buster;
pub mod config;
pub mod diagnostics;
pub mod locale;

pub use cache_buster::CacheBuster;
pub use config::{CONFIG_FILE_NAME, ChipperConfig, ConfigError};
pub use diagnostics::{Checked, Diagnostic};
pub use locale::{DEFAULT_FALLBACK_LOCALE, Locale, LocaleSet, normalise_locale};
