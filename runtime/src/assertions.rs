//! Assertion toggles.
//!
//! There are two tiers of assertions: basic and slow. `?ea` enables basic
//! assertions and `?eall` enables both. Production builds ignore both flags.

use std::cell::Cell;

use log::debug;

use crate::known::KnownParameter;
use crate::query::QueryParameters;

/// Build level read from the page metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimLevel {
    /// Any non-production build.
    #[default]
    Development,
    /// A published build; assertions stay off.
    Production,
}

impl SimLevel {
    /// Interpret the `content` of the `phet-sim-level` meta element.
    ///
    /// ```
    /// use chipper_runtime::SimLevel;
    ///
    /// assert_eq!(SimLevel::from_meta(Some("production")), SimLevel::Production);
    /// assert_eq!(SimLevel::from_meta(Some("development")), SimLevel::Development);
    /// assert_eq!(SimLevel::from_meta(None), SimLevel::Development);
    /// ```
    #[must_use]
    pub fn from_meta(content: Option<&str>) -> Self {
        match content {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Whether this is a production build.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// The assertion library's switches.
#[cfg_attr(test, mockall::automock)]
pub trait AssertionController {
    /// Turn on basic assertions.
    fn enable_assert(&self);
    /// Turn on slow assertions.
    fn enable_assert_slow(&self);
}

/// Which assertion tiers are enabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssertionFlags {
    /// Basic assertions are on.
    pub basic: bool,
    /// Slow assertions are on (implies `basic`).
    pub all: bool,
}

impl AssertionFlags {
    /// Derive the flags from the query parameters and build level.
    #[must_use]
    pub fn from_parameters(params: &QueryParameters, level: SimLevel) -> Self {
        let development = !level.is_production();
        let all = development && params.is_flag_set(KnownParameter::EnableAllAssertions.name());
        let basic =
            all || (development && params.is_flag_set(KnownParameter::EnableAssertions.name()));

        Self { basic, all }
    }

    /// Switch on the enabled tiers.
    pub fn apply(self, controller: &dyn AssertionController) {
        if self.basic {
            debug!(target: "assertions", "enabling basic assertions");
            controller.enable_assert();
        }
        if self.all {
            debug!(target: "assertions", "enabling slow assertions");
            controller.enable_assert_slow();
        }
    }
}

/// An [`AssertionController`] that only records which switches were thrown.
///
/// Useful where no assertion library is loaded, such as when inspecting a
/// URL from the command line.
#[derive(Debug, Default)]
pub struct RecordedAssertions {
    basic: Cell<bool>,
    slow: Cell<bool>,
}

impl RecordedAssertions {
    /// Whether basic assertions were enabled.
    #[must_use]
    pub fn basic_enabled(&self) -> bool {
        self.basic.get()
    }

    /// Whether slow assertions were enabled.
    #[must_use]
    pub fn slow_enabled(&self) -> bool {
        self.slow.get()
    }
}

impl AssertionController for RecordedAssertions {
    fn enable_assert(&self) {
        self.basic.set(true);
    }

    fn enable_assert_slow(&self) {
        self.slow.set(true);
    }
}
