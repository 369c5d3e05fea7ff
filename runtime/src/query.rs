//! Query-string parsing.
//!
//! Simulations are launched with flags appended to their URL, for example
//! `molarity_en.html?ea&screens=1,2&webgl=false`. The parameters are parsed
//! once at startup so later lookups are plain map reads.
//!
//! Parsing never fails. A parameter without `=` has no value, and a value that
//! does not decode to UTF-8 degrades to no value. When a name repeats, the
//! first occurrence wins.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;

/// Parsed query parameters in the order they first appeared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParameters {
    values: HashMap<String, Option<String>>,
    order: Vec<String>,
}

impl QueryParameters {
    /// Parse the query portion of `url`.
    ///
    /// Everything after the first `?` is considered, up to an optional `#`
    /// fragment. Input without `?` has no parameters.
    ///
    /// ```
    /// use chipper_runtime::QueryParameters;
    ///
    /// let params = QueryParameters::parse("sim.html?ea&foo=bar%20baz");
    /// assert!(params.contains("ea"));
    /// assert_eq!(params.get("ea"), None);
    /// assert_eq!(params.get("foo"), Some("bar baz"));
    /// assert_eq!(params.get("missing"), None);
    /// ```
    #[must_use]
    pub fn parse(url: &str) -> Self {
        let Some((_, search)) = url.split_once('?') else {
            return Self::default();
        };
        let search = search.split_once('#').map_or(search, |(query, _)| query);

        let mut params = Self::default();
        for piece in search.split('&') {
            let (name, raw_value) = match piece.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (piece, None),
            };

            if name.is_empty() {
                continue;
            }

            params.insert_first(name, raw_value.and_then(|value| decode_value(name, value)));
        }

        params
    }

    /// Record `name` unless an earlier occurrence already did.
    fn insert_first(&mut self, name: &str, value: Option<String>) {
        match self.values.entry(name.to_owned()) {
            Entry::Occupied(_) => {
                debug!(target: "query", "ignoring repeated query parameter `{name}`");
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
                self.order.push(name.to_owned());
            }
        }
    }

    /// Returns the decoded value of `name`.
    ///
    /// `None` covers both absent parameters and parameters given without a
    /// value; use [`Self::contains`] to tell them apart.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Option::as_deref)
    }

    /// Returns `true` when `name` appeared in the query string.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns `true` when `name` is present and not explicitly empty.
    ///
    /// `?ea` and `?ea=1` set the flag; `?ea=` does not.
    ///
    /// ```
    /// use chipper_runtime::QueryParameters;
    ///
    /// assert!(QueryParameters::parse("?ea").is_flag_set("ea"));
    /// assert!(!QueryParameters::parse("?ea=").is_flag_set("ea"));
    /// assert!(!QueryParameters::parse("?dev").is_flag_set("ea"));
    /// ```
    #[must_use]
    pub fn is_flag_set(&self, name: &str) -> bool {
        self.values
            .get(name)
            .is_some_and(|value| value.as_deref() != Some(""))
    }

    /// Iterate over parameters in the order they first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.order.iter().map(|name| {
            let value = self.values.get(name).and_then(Option::as_deref);
            (name.as_str(), value)
        })
    }

    /// Number of distinct parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when no parameters were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Percent-decode a value the way `decodeURIComponent` does (`+` stays `+`).
fn decode_value(name: &str, raw: &str) -> Option<String> {
    match urlencoding::decode(raw) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(err) => {
            debug!(target: "query", "dropping undecodable value for `{name}`: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn flag_without_value_is_present_but_valueless() {
        let params = QueryParameters::parse("?ea&foo=bar%20baz");

        assert_eq!(params.len(), 2);
        assert!(params.contains("ea"));
        assert_eq!(params.get("ea"), None);
        assert_eq!(params.get("foo"), Some("bar baz"));
        assert_eq!(params.get("missing"), None);
        assert!(!params.contains("missing"));
    }

    #[rstest]
    #[case::full_url("https://example.org/sims/molarity_en.html?webgl=false", "false")]
    #[case::bare_search("?webgl=false", "false")]
    #[case::fragment("?webgl=false#screen-2", "false")]
    #[case::plus_is_literal("?webgl=a+b", "a+b")]
    #[case::keeps_later_equals("?webgl=a=b", "a=b")]
    #[case::unicode("?webgl=%C3%A9", "é")]
    fn decodes_values(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(QueryParameters::parse(url).get("webgl"), Some(expected));
    }

    #[test]
    fn first_occurrence_wins() {
        let params = QueryParameters::parse("?locale=fr&locale=es");

        assert_eq!(params.get("locale"), Some("fr"));
        assert_eq!(params.len(), 1);
    }

    #[rstest]
    #[case::no_question_mark("https://example.org/sim.html")]
    #[case::only_question_mark("sim.html?")]
    #[case::empty_pieces("?&&")]
    #[case::empty_name("?=value")]
    fn yields_nothing(#[case] url: &str) {
        assert!(QueryParameters::parse(url).is_empty());
    }

    #[test]
    fn invalid_utf8_degrades_to_no_value() {
        let params = QueryParameters::parse("?strings=%FF%FE");

        assert!(params.contains("strings"));
        assert_eq!(params.get("strings"), None);
    }

    #[test]
    fn iter_preserves_parse_order() {
        let params = QueryParameters::parse("?screens=2&dev&locale=ar_SA");

        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["screens", "dev", "locale"]);
    }

    #[rstest]
    #[case::bare("?ea", true)]
    #[case::valued("?ea=true", true)]
    #[case::false_string("?ea=false", true)]
    #[case::empty("?ea=", false)]
    #[case::absent("?eall", false)]
    fn flag_truthiness(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(QueryParameters::parse(url).is_flag_set("ea"), expected);
    }

    #[test]
    fn repeated_parameters_are_logged() {
        let mut logger = logtest::Logger::start();

        let params = QueryParameters::parse("?screens=1&screens=2");

        assert_eq!(params.get("screens"), Some("1"));
        let mut logged = false;
        while let Some(record) = logger.pop() {
            if record.level() == log::Level::Debug
                && record.args().to_string().contains("repeated query parameter `screens`")
            {
                logged = true;
            }
        }
        assert!(logged, "expected the repeated parameter to be logged");
    }
}
