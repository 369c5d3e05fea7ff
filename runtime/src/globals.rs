//! Assembled startup state.
//!
//! [`SimGlobals::initialize`] performs the whole initializer in one pass and
//! returns a value that is then handed to whatever needs query parameters,
//! cache-buster arguments, or error forwarding.

use chipper_common::CacheBuster;
use log::debug;

use crate::assertions::{AssertionController, AssertionFlags, SimLevel};
use crate::error_report::{ErrorEvent, ErrorForwarder, ParentContext};
use crate::known::KnownParameter;
use crate::query::QueryParameters;

/// Startup state shared with the rest of the simulation.
pub struct SimGlobals<'p> {
    parameters: QueryParameters,
    cache_buster: CacheBuster,
    assertions: AssertionFlags,
    error_forwarder: Option<ErrorForwarder>,
    parent: Option<&'p dyn ParentContext>,
}

impl<'p> SimGlobals<'p> {
    /// Run the startup initializer for the page at `url`.
    ///
    /// Assertion tiers enabled by the query string are switched on through
    /// `assertions` before this returns.
    ///
    /// ```
    /// use chipper_runtime::{RecordedAssertions, SimGlobals, SimLevel};
    ///
    /// let assertions = RecordedAssertions::default();
    /// let globals = SimGlobals::initialize(
    ///     "sim.html?ea&cacheBuster=false",
    ///     SimLevel::Development,
    ///     &assertions,
    ///     None,
    /// );
    /// assert!(assertions.basic_enabled());
    /// assert_eq!(globals.cache_buster_args(), "");
    /// ```
    #[must_use]
    pub fn initialize(
        url: &str,
        level: SimLevel,
        assertions: &dyn AssertionController,
        parent: Option<&'p dyn ParentContext>,
    ) -> Self {
        let parameters = QueryParameters::parse(url);
        debug!(target: "globals", "parsed {} query parameters", parameters.len());

        let cache_buster =
            CacheBuster::from_parameter(parameters.get(KnownParameter::CacheBuster.name()));

        let flags = AssertionFlags::from_parameters(&parameters, level);
        flags.apply(assertions);

        let error_forwarder = parameters
            .is_flag_set(KnownParameter::PostMessageOnError.name())
            .then(|| ErrorForwarder::new(url));

        Self {
            parameters,
            cache_buster,
            assertions: flags,
            error_forwarder,
            parent,
        }
    }

    /// Decoded value of the query parameter `name`.
    #[must_use]
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    /// All parsed query parameters.
    #[must_use]
    pub const fn parameters(&self) -> &QueryParameters {
        &self.parameters
    }

    /// The installed cache-buster generator.
    #[must_use]
    pub const fn cache_buster(&self) -> CacheBuster {
        self.cache_buster
    }

    /// `bust=<millis>`, or an empty string with `?cacheBuster=false`.
    #[must_use]
    pub fn cache_buster_args(&self) -> String {
        self.cache_buster.args()
    }

    /// The assertion tiers that were enabled.
    #[must_use]
    pub const fn assertion_flags(&self) -> AssertionFlags {
        self.assertions
    }

    /// Whether uncaught errors are forwarded to the parent context.
    #[must_use]
    pub const fn forwards_errors(&self) -> bool {
        self.error_forwarder.is_some()
    }

    /// Handle an uncaught error.
    ///
    /// Returns `true` when the error was posted to the parent context.
    pub fn report_error(&self, event: &ErrorEvent) -> bool {
        self.error_forwarder
            .as_ref()
            .is_some_and(|forwarder| forwarder.forward(event, self.parent))
    }
}
