//! Inspect command implementation.
//!
//! Runs the startup initializer against a URL without a browser, recording
//! which assertion tiers it would enable.

use std::io::Write;

use chipper_runtime::{KnownParameter, RecordedAssertions, SimGlobals, SimLevel};
use serde::Serialize;

use crate::cli::InspectArgs;
use crate::error::{BuildError, Result};

/// What the startup initializer derives from a URL.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    /// Parameters in the order they appeared.
    pub parameters: Vec<ParameterEntry>,
    /// Parameter names missing from the documented catalogue.
    pub unrecognized: Vec<String>,
    /// Basic assertions would be enabled.
    pub basic_assertions: bool,
    /// Slow assertions would be enabled.
    pub slow_assertions: bool,
    /// Whether asset URLs carry `bust=<time>`.
    pub cache_busting: bool,
    /// Whether uncaught errors are posted to the parent page.
    pub posts_errors: bool,
}

/// One parsed parameter.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ParameterEntry {
    /// Parameter name.
    pub name: String,
    /// Decoded value, absent for bare flags.
    pub value: Option<String>,
}

impl InspectReport {
    /// Run the initializer for `url` at the given build level.
    ///
    /// ```
    /// use chipper_build::inspect::InspectReport;
    /// use chipper_runtime::SimLevel;
    ///
    /// let report = InspectReport::for_url("sim.html?eall&colour=red", SimLevel::Development);
    /// assert!(report.slow_assertions);
    /// assert_eq!(report.unrecognized, vec!["colour".to_owned()]);
    /// ```
    #[must_use]
    pub fn for_url(url: &str, level: SimLevel) -> Self {
        let assertions = RecordedAssertions::default();
        let globals = SimGlobals::initialize(url, level, &assertions, None);

        let parameters = globals
            .parameters()
            .iter()
            .map(|(name, value)| ParameterEntry {
                name: name.to_owned(),
                value: value.map(str::to_owned),
            })
            .collect();
        let unrecognized = globals
            .parameters()
            .iter()
            .filter(|(name, _)| KnownParameter::from_name(name).is_none())
            .map(|(name, _)| name.to_owned())
            .collect();

        Self {
            parameters,
            unrecognized,
            basic_assertions: assertions.basic_enabled(),
            slow_assertions: assertions.slow_enabled(),
            cache_busting: globals.cache_buster().is_enabled(),
            posts_errors: globals.forwards_errors(),
        }
    }

    /// Render the report for people.
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut output = String::from("Query parameters:\n");
        if self.parameters.is_empty() {
            output.push_str("  (none)\n");
        }
        for entry in &self.parameters {
            let description = KnownParameter::from_name(&entry.name)
                .map_or("unrecognized", KnownParameter::description);
            match &entry.value {
                Some(value) => {
                    output.push_str(&format!("  {}={value}  ({description})\n", entry.name));
                }
                None => output.push_str(&format!("  {}  ({description})\n", entry.name)),
            }
        }

        output.push_str(&format!("\nBasic assertions: {}\n", on_off(self.basic_assertions)));
        output.push_str(&format!("Slow assertions:  {}\n", on_off(self.slow_assertions)));
        output.push_str(&format!("Cache busting:    {}\n", on_off(self.cache_busting)));
        output.push_str(&format!("Error reporting:  {}", on_off(self.posts_errors)));
        output
    }
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized or written.
pub fn run_inspect(args: &InspectArgs, stdout: &mut dyn Write) -> Result<()> {
    let level = if args.production {
        SimLevel::Production
    } else {
        SimLevel::Development
    };
    let report = InspectReport::for_url(&args.url, level);

    let rendered = if args.json {
        serde_json::to_string_pretty(&report).map_err(|source| BuildError::Serialize { source })?
    } else {
        report.to_human()
    };

    writeln!(stdout, "{rendered}").map_err(|source| BuildError::WriteFailed {
        destination: "stdout".to_owned(),
        source,
    })
}
