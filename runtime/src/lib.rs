//! Simulation startup initializer.
//!
//! Runs once when a simulation page loads, before any asynchronous module
//! loading starts. It parses the page's query parameters, decides whether
//! assertions are enabled, installs the cache-buster generator, and can
//! forward uncaught errors to an embedding parent page.
//!
//! # Modules
//!
//! - [`query`] - Query-string parsing and lookup
//! - [`known`] - Catalogue of documented query parameters
//! - [`assertions`] - Assertion toggles derived from `ea` and `eall`
//! - [`error_report`] - Forwarding uncaught errors to a parent context
//! - [`globals`] - The assembled startup state

pub mod assertions;
pub mod error_report;
pub mod globals;
pub mod known;
pub mod query;

pub use assertions::{AssertionController, AssertionFlags, RecordedAssertions, SimLevel};
pub use error_report::{ErrorEvent, ErrorForwarder, ErrorReport, ParentContext};
pub use globals::SimGlobals;
pub use known::KnownParameter;
pub use query::QueryParameters;
