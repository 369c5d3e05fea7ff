//! Workspace configuration loaded from `chipper.toml`.
//!
//! Simulation repositories may pin the fallback locale and the location of the
//! translated strings checkout. Every key is optional; command-line flags
//! override whatever the file provides, and a missing file yields the
//! defaults.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::cache_buster::CacheBuster;
use crate::locale::{DEFAULT_FALLBACK_LOCALE, Locale, normalise_locale};

/// File name looked up in the simulation repository.
pub const CONFIG_FILE_NAME: &str = "chipper.toml";

const DEFAULT_STRINGS_ROOT: &str = "../babel";

/// Errors raised while loading `chipper.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {path}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("invalid {path}: {source}")]
    Parse {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Underlying parse failure.
        #[source]
        source: toml::de::Error,
    },
}

/// Build settings shared by every chipper command.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ChipperConfig {
    /// Locale always bundled and used when nothing else is requested.
    ///
    /// Blank values fall back to `en` so templated files cannot produce an
    /// empty locale.
    pub fallback_locale: Option<String>,
    /// Directory holding one translated-strings checkout per repository.
    pub strings_root: Utf8PathBuf,
    /// Cache-buster generator installed into build contexts.
    pub cache_buster: Option<CacheBuster>,
}

impl Default for ChipperConfig {
    fn default() -> Self {
        Self {
            fallback_locale: None,
            strings_root: Utf8PathBuf::from(DEFAULT_STRINGS_ROOT),
            cache_buster: None,
        }
    }
}

impl ChipperConfig {
    /// Load `chipper.toml` from `repo_dir`, or defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or
    /// parsed.
    pub fn load(repo_dir: &Utf8Path) -> Result<Self, ConfigError> {
        let path = repo_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(target: "config", "{path} not found; using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&path, &contents)
    }

    /// Load configuration using the supplied loader.
    ///
    /// Exists so tests can substitute configuration without touching the
    /// file system.
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use chipper_common::ChipperConfig;
    ///
    /// let config = ChipperConfig::load_with(Utf8Path::new("."), |_| Ok(ChipperConfig::default()))
    ///     .expect("stub loader succeeds");
    /// assert_eq!(config.fallback_locale().as_str(), "en");
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates whatever the loader returns.
    pub fn load_with<F>(repo_dir: &Utf8Path, loader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> Result<Self, ConfigError>,
    {
        loader(repo_dir)
    }

    /// Parse configuration text attributed to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn parse(path: &Utf8Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Returns the configured fallback locale, defaulting to `en`.
    #[must_use]
    pub fn fallback_locale(&self) -> Locale {
        Locale::from(
            normalise_locale(self.fallback_locale.as_deref()).unwrap_or(DEFAULT_FALLBACK_LOCALE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn parse(source: &str) -> Result<ChipperConfig, ConfigError> {
        ChipperConfig::parse(Utf8Path::new(CONFIG_FILE_NAME), source)
    }

    #[rstest]
    fn defaults_point_at_sibling_babel_checkout() {
        let config = ChipperConfig::default();

        assert_eq!(config.fallback_locale().as_str(), "en");
        assert_eq!(config.strings_root, Utf8PathBuf::from("../babel"));
        assert!(config.cache_buster.is_none());
    }

    #[rstest]
    fn deserialises_overrides() {
        let config = parse(concat!(
            "fallback_locale = \"fr\"\n",
            "strings_root = \"/srv/babel\"\n",
            "cache_buster = \"timestamp\"\n",
        ))
        .expect("expected configuration to parse successfully");

        assert_eq!(config.fallback_locale().as_str(), "fr");
        assert_eq!(config.strings_root, Utf8PathBuf::from("/srv/babel"));
        assert_eq!(config.cache_buster, Some(CacheBuster::Timestamp));
    }

    #[rstest]
    #[case::blank("fallback_locale = \"  \"\n")]
    #[case::empty("fallback_locale = \"\"\n")]
    fn blank_fallback_uses_default(#[case] source: &str) {
        let config = parse(source).expect("expected configuration to parse successfully");

        assert_eq!(config.fallback_locale().as_str(), "en");
    }

    #[rstest]
    fn rejects_unknown_fields() {
        let outcome = parse("locales = \"*\"\n");

        assert!(
            matches!(outcome, Err(ConfigError::Parse { .. })),
            "expected a parse error when unknown fields are present"
        );
    }

    #[rstest]
    fn load_without_file_yields_defaults() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = Utf8Path::from_path(temp.path()).expect("non-UTF8 path");

        let config = ChipperConfig::load(dir).expect("missing file is not an error");

        assert_eq!(config, ChipperConfig::default());
    }

    #[rstest]
    fn load_reads_file_from_repo_dir() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dir = Utf8Path::from_path(temp.path()).expect("non-UTF8 path");
        std::fs::write(dir.join(CONFIG_FILE_NAME), "fallback_locale = \"es\"\n")
            .expect("failed to write config");

        let config = ChipperConfig::load(dir).expect("config should load");

        assert_eq!(config.fallback_locale().as_str(), "es");
    }

    #[rstest]
    fn parse_error_names_the_file() {
        let err = parse("strings_root = 3\n").expect_err("non-string root must fail");

        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
