//! Scanner for translated string files.
//!
//! Each repository's translations live in a directory of the strings checkout,
//! one file per locale:
//!
//! ```text
//! {strings_root}/{repo}/{repo}-strings_{locale}.json
//! ```

use std::io;

use camino::Utf8Path;
use chipper_common::Locale;
use log::{debug, warn};
use thiserror::Error;

/// Marker that must appear in a string file name, before `.json`.
const STRINGS_MARKER: &str = "-strings";
const JSON_MARKER: &str = ".json";

/// Reasons a strings directory yields no locales.
#[derive(Debug, Error)]
pub enum StringsDirError {
    /// Nothing exists at the path.
    #[error("strings location does not exist: {0}")]
    Missing(String),

    /// The path exists but is a file.
    #[error("strings location is not a directory: {0}")]
    NotADirectory(String),

    /// The directory or one of its entries could not be read.
    #[error("failure checking strings location: {path}")]
    Unreadable {
        /// Directory being scanned.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The directory holds no `*-strings*.json` files.
    #[error("no string files found in {0}")]
    NoStringFiles(String),
}

/// Returns `true` for names like `foo-strings_fr.json`.
///
/// The check is unanchored at the end, so `foo-strings_fr.json.bak` also
/// matches.
///
/// ```
/// use chipper_build::strings_scanner::is_string_file;
///
/// assert!(is_string_file("molarity-strings_fr.json"));
/// assert!(!is_string_file("molarity_fr.json"));
/// assert!(!is_string_file("molarity-strings_fr.txt"));
/// ```
#[must_use]
pub fn is_string_file(filename: &str) -> bool {
    filename
        .split_once(STRINGS_MARKER)
        .is_some_and(|(_, rest)| rest.contains(JSON_MARKER))
}

/// Extract the locale encoded in a string file name.
///
/// The locale is everything between the first `_` and the last `.`, so
/// repository names must not contain underscores.
///
/// ```
/// use chipper_build::strings_scanner::locale_from_filename;
///
/// let locale = locale_from_filename("energy-skate-park-strings_ar_SA.json");
/// assert_eq!(locale.expect("locale present").as_str(), "ar_SA");
/// assert!(locale_from_filename("energy-skate-park-strings.json").is_none());
/// ```
#[must_use]
pub fn locale_from_filename(filename: &str) -> Option<Locale> {
    let (_, after_underscore) = filename.split_once('_')?;
    let (locale, _) = after_underscore.rsplit_once('.')?;

    if locale.is_empty() {
        return None;
    }

    Some(Locale::from(locale))
}

/// Scan `directory` for string files and return their locales.
///
/// File names are sorted first so the result does not depend on the order the
/// filesystem lists entries in. Matching files without a recognisable locale
/// are skipped with a warning.
///
/// # Errors
///
/// Returns a [`StringsDirError`] when the directory is missing, is not a
/// directory, cannot be read, or contains no string files.
pub fn scan_string_locales(directory: &Utf8Path) -> Result<Vec<Locale>, StringsDirError> {
    let display = directory.to_string();
    let metadata = match directory.metadata() {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StringsDirError::Missing(display));
        }
        Err(source) => {
            return Err(StringsDirError::Unreadable {
                path: display,
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(StringsDirError::NotADirectory(display));
    }

    let mut string_files = list_string_files(directory).map_err(|source| {
        StringsDirError::Unreadable {
            path: display.clone(),
            source,
        }
    })?;

    if string_files.is_empty() {
        return Err(StringsDirError::NoStringFiles(display));
    }

    string_files.sort_unstable();
    debug!(target: "strings_scanner", "found {} string files in {display}", string_files.len());

    Ok(string_files
        .iter()
        .filter_map(|filename| {
            let locale = locale_from_filename(filename);
            if locale.is_none() {
                warn!(
                    target: "strings_scanner",
                    "skipping `{filename}`: no locale between `_` and the extension"
                );
            }
            locale
        })
        .collect())
}

/// List the names of the string files directly inside `directory`.
///
/// Entries whose names are not UTF-8 cannot be string files and are skipped.
fn list_string_files(directory: &Utf8Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let file_name = match entry?.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!(
                    target: "strings_scanner",
                    "skipping non-UTF-8 entry {} in {directory}",
                    raw.to_string_lossy()
                );
                continue;
            }
        };

        if is_string_file(&file_name) {
            names.push(file_name);
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn strings_dir(files: &[&str]) -> TempDir {
        let temp = TempDir::new().expect("failed to create temp dir");
        for name in files {
            std::fs::write(temp.path().join(name), b"{}").expect("failed to write file");
        }
        temp
    }

    fn utf8(temp: &TempDir) -> &Utf8Path {
        Utf8Path::from_path(temp.path()).expect("non-UTF8 path")
    }

    #[rstest]
    #[case::simple("foo-strings_fr.json", "fr")]
    #[case::regional("foo-strings_ar_SA.json", "ar_SA")]
    #[case::hyphenated_repo("energy-skate-park-basics-strings_zh_CN.json", "zh_CN")]
    #[case::trailing_suffix("foo-strings_es.json.bak", "es.json")]
    fn locale_from_filename_valid(#[case] filename: &str, #[case] expected: &str) {
        let locale = locale_from_filename(filename).expect("locale should be extracted");
        assert_eq!(locale.as_str(), expected);
    }

    #[rstest]
    #[case::no_underscore("foo-strings.json")]
    #[case::empty_locale("foo-strings_.json")]
    #[case::underscore_after_extension("foo-strings.json_fr")]
    fn locale_from_filename_invalid(#[case] filename: &str) {
        assert!(locale_from_filename(filename).is_none(), "{filename}");
    }

    #[rstest]
    #[case::canonical("foo-strings_fr.json", true)]
    #[case::marker_without_locale("foo-strings.json", true)]
    #[case::json_before_marker("foo.json-strings", false)]
    #[case::no_marker("foo_fr.json", false)]
    #[case::readme("README.md", false)]
    fn string_file_pattern(#[case] filename: &str, #[case] expected: bool) {
        assert_eq!(is_string_file(filename), expected);
    }

    #[test]
    fn scan_returns_sorted_locales() {
        let temp = strings_dir(&[
            "foo-strings_fr.json",
            "foo-strings_ar_SA.json",
            "README.md",
        ]);

        let locales = scan_string_locales(utf8(&temp)).expect("scan should succeed");

        let tags: Vec<_> = locales.iter().map(Locale::as_str).collect();
        assert_eq!(tags, vec!["ar_SA", "fr"]);
    }

    #[test]
    fn scan_skips_files_without_locale() {
        let temp = strings_dir(&["foo-strings.json", "foo-strings_de.json"]);

        let locales = scan_string_locales(utf8(&temp)).expect("scan should succeed");

        assert_eq!(locales, vec![Locale::from("de")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn scan_skips_names_that_are_not_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = strings_dir(&["foo-strings_fr.json", "foo-strings_de.json"]);
        std::fs::write(temp.path().join(OsStr::from_bytes(b"notes\xFF.txt")), b"")
            .expect("failed to write non-UTF-8 file");

        let locales = scan_string_locales(utf8(&temp)).expect("scan should succeed");

        assert_eq!(locales, vec![Locale::from("de"), Locale::from("fr")]);
    }

    #[test]
    fn scan_missing_directory() {
        let result = scan_string_locales(Utf8Path::new("/nonexistent/babel/foo"));
        assert!(matches!(result, Err(StringsDirError::Missing(_))));
    }

    #[test]
    fn scan_file_instead_of_directory() {
        let temp = strings_dir(&["foo-strings_fr.json"]);
        let file = utf8(&temp).join("foo-strings_fr.json");

        let result = scan_string_locales(&file);

        assert!(matches!(result, Err(StringsDirError::NotADirectory(_))));
    }

    #[test]
    fn scan_directory_without_string_files() {
        let temp = strings_dir(&["README.md"]);

        let result = scan_string_locales(utf8(&temp));

        assert!(matches!(result, Err(StringsDirError::NoStringFiles(_))));
    }
}
