//! Cache-buster argument generation.
//!
//! Asset URLs may carry a `bust=<millis>` query fragment so browsers refetch
//! them on every load. Builds install [`CacheBuster::Disabled`] as a default
//! because bundled output must be reproducible; the startup initializer picks
//! the variant from the `cacheBuster` query parameter.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Query parameter value that switches cache busting off.
const DISABLED_VALUE: &str = "false";

/// How cache-buster arguments are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBuster {
    /// Append `bust=<current unix time in milliseconds>`.
    #[default]
    Timestamp,
    /// Produce no arguments at all.
    Disabled,
}

impl CacheBuster {
    /// Select the variant for a `cacheBuster` query parameter value.
    ///
    /// Only the exact value `false` disables busting; absence, a bare flag,
    /// or any other value keep it on.
    ///
    /// ```
    /// use chipper_common::CacheBuster;
    ///
    /// assert_eq!(CacheBuster::from_parameter(Some("false")), CacheBuster::Disabled);
    /// assert_eq!(CacheBuster::from_parameter(Some("FALSE")), CacheBuster::Timestamp);
    /// assert_eq!(CacheBuster::from_parameter(None), CacheBuster::Timestamp);
    /// ```
    #[must_use]
    pub fn from_parameter(value: Option<&str>) -> Self {
        match value {
            Some(DISABLED_VALUE) => Self::Disabled,
            _ => Self::Timestamp,
        }
    }

    /// Render the arguments for the current time.
    #[must_use]
    pub fn args(self) -> String {
        self.args_at(SystemTime::now())
    }

    /// Render the arguments as they would appear at `now`.
    ///
    /// Times before the Unix epoch clamp to zero.
    ///
    /// ```
    /// use std::time::{Duration, UNIX_EPOCH};
    /// use chipper_common::CacheBuster;
    ///
    /// let now = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
    /// assert_eq!(CacheBuster::Timestamp.args_at(now), "bust=1700000000123");
    /// assert_eq!(CacheBuster::Disabled.args_at(now), "");
    /// ```
    #[must_use]
    pub fn args_at(self, now: SystemTime) -> String {
        match self {
            Self::Timestamp => {
                let millis = now
                    .duration_since(UNIX_EPOCH)
                    .map_or(0, |elapsed| elapsed.as_millis());
                format!("bust={millis}")
            }
            Self::Disabled => String::new(),
        }
    }

    /// Whether this variant produces any arguments.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    #[case::absent(None, CacheBuster::Timestamp)]
    #[case::disabled(Some("false"), CacheBuster::Disabled)]
    #[case::enabled(Some("true"), CacheBuster::Timestamp)]
    #[case::empty(Some(""), CacheBuster::Timestamp)]
    fn from_parameter_only_disables_on_false(
        #[case] value: Option<&str>,
        #[case] expected: CacheBuster,
    ) {
        assert_eq!(CacheBuster::from_parameter(value), expected);
    }

    #[test]
    fn timestamp_args_are_numeric() {
        let args = CacheBuster::Timestamp.args();
        let digits = args.strip_prefix("bust=").expect("bust prefix");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()), "got {args}");
    }

    #[test]
    fn pre_epoch_clamps_to_zero() {
        let before = UNIX_EPOCH - Duration::from_secs(5);
        assert_eq!(CacheBuster::Timestamp.args_at(before), "bust=0");
    }

    #[test]
    fn disabled_is_empty() {
        assert!(CacheBuster::Disabled.args().is_empty());
        assert!(!CacheBuster::Disabled.is_enabled());
    }
}
