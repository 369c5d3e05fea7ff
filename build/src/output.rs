//! Output formatting for prepared build contexts.
//!
//! The bundler consumes the JSON form; the text form is for developers
//! running the step by hand.

use chipper_common::Diagnostic;

use crate::context::BuildContext;
use crate::error::{BuildError, Result};
use crate::locales::join_locales;

/// Format a build context for human-readable output.
///
/// # Examples
///
/// ```
/// use chipper_build::context::BuildContextBuilder;
/// use chipper_build::output::format_human;
/// use chipper_build::package::PackageInfo;
/// use chipper_common::Locale;
///
/// let package = PackageInfo { name: "molarity".into(), version: "1.0.0".into() };
/// let context = BuildContextBuilder::new(package, Locale::from("en")).build();
/// let output = format_human(&context, &[]);
/// assert!(output.contains("Locales to build: en"));
/// ```
#[must_use]
pub fn format_human(context: &BuildContext, diagnostics: &[Diagnostic]) -> String {
    let package = context.package();
    let mut output = format!("Building simulation: {} {}\n", package.name, package.version);

    output.push_str(&format!(
        "  Locales to build: {}\n",
        join_locales(context.locales_to_build())
    ));
    output.push_str(&format!(
        "  String locale:    {}\n",
        context.build_options().phet_locale
    ));
    output.push_str(&format!(
        "  Cache buster:     {}\n",
        if context.cache_buster().is_enabled() {
            "timestamp"
        } else {
            "disabled"
        }
    ));
    output.push_str(&format!(
        "  Queued mipmaps:   {}\n",
        context.mipmaps_to_build().len()
    ));

    if !diagnostics.is_empty() {
        output.push_str("\nDiagnostics:\n");
        for diagnostic in diagnostics {
            output.push_str(&format!("  - {diagnostic}\n"));
        }
    }

    output
}

/// Format a build context as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`BuildError::Serialize`] if serialization fails.
pub fn format_json(context: &BuildContext) -> Result<String> {
    serde_json::to_string_pretty(context).map_err(|source| BuildError::Serialize { source })
}
