//! Locale resolution for a build.
//!
//! Decides which locales are bundled, based on the developer's command-line
//! flags:
//!
//! - `--locales=*` bundles every locale found for the simulation itself.
//! - `--locales=fr` or `--locales=ar,fr,es` bundles exactly those locales.
//! - `--locales-repo=beers-law-lab` bundles every locale found for another
//!   repository, and is ignored when `--locales` is given.
//! - With no flags only the fallback locale is bundled.

use camino::Utf8Path;
use chipper_common::{Checked, Diagnostic, Locale, LocaleSet};
use log::debug;

use crate::strings_scanner::scan_string_locales;

/// `--locales` value requesting every locale on disk.
pub const ALL_LOCALES: &str = "*";

const TARGET: &str = "locales";

/// Developer-supplied locale options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleOptions {
    /// Comma-separated locales, or `*`. Takes precedence over
    /// [`Self::locales_repo`].
    pub locales: Option<String>,
    /// Repository whose strings directory supplies the locales.
    pub locales_repo: Option<String>,
}

/// The rule the resolver applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleRequest<'a> {
    /// Use the explicit comma-separated list verbatim.
    Explicit(&'a str),
    /// Scan the strings directory of the named repository.
    Scan(&'a str),
    /// Bundle only the fallback locale.
    FallbackOnly,
}

impl LocaleOptions {
    /// Classify the options for `repo_name`.
    ///
    /// Empty option values count as absent.
    ///
    /// ```
    /// use chipper_build::locales::{LocaleOptions, LocaleRequest};
    ///
    /// let options = LocaleOptions {
    ///     locales: Some("*".to_owned()),
    ///     locales_repo: Some("beers-law-lab".to_owned()),
    /// };
    /// assert_eq!(options.request("molarity"), LocaleRequest::Scan("molarity"));
    /// ```
    #[must_use]
    pub fn request<'a>(&'a self, repo_name: &'a str) -> LocaleRequest<'a> {
        let locales = self.locales.as_deref().filter(|value| !value.is_empty());
        let locales_repo = self.locales_repo.as_deref().filter(|value| !value.is_empty());

        match (locales, locales_repo) {
            (Some(ALL_LOCALES), _) => LocaleRequest::Scan(repo_name),
            (Some(list), _) => LocaleRequest::Explicit(list),
            (None, Some(repo)) => LocaleRequest::Scan(repo),
            (None, None) => LocaleRequest::FallbackOnly,
        }
    }
}

/// Compute the locales to bundle for `repo_name`.
///
/// Explicit lists are returned as given, without the fallback locale.
/// Scans return the fallback locale followed by the locales found under
/// `<strings_root>/<repo>`. A scan that finds nothing usable records a
/// diagnostic and returns just the fallback locale.
pub fn resolve_locales(
    repo_name: &str,
    fallback_locale: &Locale,
    options: &LocaleOptions,
    strings_root: &Utf8Path,
) -> Checked<LocaleSet> {
    let resolved = match options.request(repo_name) {
        LocaleRequest::Explicit(list) => Checked::clean(split_locale_list(list)),
        LocaleRequest::Scan(repo) => locales_for_repo(repo, fallback_locale, strings_root),
        LocaleRequest::FallbackOnly => Checked::clean(vec![fallback_locale.clone()]),
    };

    debug!(target: TARGET, "locales to build: {}", join_locales(resolved.value()));
    resolved
}

/// Split a comma-separated list into locales without trimming or
/// deduplicating.
fn split_locale_list(list: &str) -> LocaleSet {
    list.split(',').map(Locale::from).collect()
}

/// Return `[fallback, ...locales found for repo]`.
fn locales_for_repo(
    repo: &str,
    fallback_locale: &Locale,
    strings_root: &Utf8Path,
) -> Checked<LocaleSet> {
    let directory = strings_root.join(repo);
    let mut locales = vec![fallback_locale.clone()];

    match scan_string_locales(&directory) {
        Ok(found) => {
            locales.extend(found);
            Checked::clean(locales)
        }
        Err(err) => Checked::degraded(locales, Diagnostic::new(TARGET, err.to_string())),
    }
}

/// Render locales as a comma-separated list for logs and text output.
#[must_use]
pub fn join_locales(locales: &[Locale]) -> String {
    locales
        .iter()
        .map(Locale::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
