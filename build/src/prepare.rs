//! Prepare command implementation.
//!
//! Loads `chipper.toml`, runs the pre-bundle step, and publishes the
//! resulting build context.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chipper_common::{ChipperConfig, Diagnostic};
use log::info;

use crate::cli::PrepareArgs;
use crate::context::{BuildContext, prepare_build};
use crate::error::{BuildError, Result};
use crate::output::{format_human, format_json};

/// Runs the prepare command from the current directory.
///
/// # Errors
///
/// Returns an error if the current directory is unusable, or see
/// [`run_prepare_in`].
pub fn run_prepare(
    args: &PrepareArgs,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|err| BuildError::InvalidRepoDir {
        reason: err.to_string(),
    })?;
    let cwd = Utf8PathBuf::try_from(cwd).map_err(|err| BuildError::InvalidRepoDir {
        reason: err.to_string(),
    })?;

    run_prepare_in(args, &cwd, stdout, stderr)
}

/// Runs the prepare command with relative paths resolved against `cwd`.
///
/// The context goes to `--output` as JSON when given, otherwise to `stdout`
/// as text or JSON. Diagnostics are part of the text summary; alongside JSON
/// they are written to `stderr` instead.
///
/// # Errors
///
/// Returns an error if:
/// - `chipper.toml` or `package.json` cannot be loaded
/// - Writing the output fails
/// - `--strict` is set and locale resolution raised diagnostics
pub fn run_prepare_in(
    args: &PrepareArgs,
    cwd: &Utf8Path,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<()> {
    let repo_dir = args
        .repo_dir
        .as_deref()
        .map_or_else(|| cwd.to_owned(), |dir| cwd.join(dir));

    let config = ChipperConfig::load(&repo_dir)?;
    let request = args.to_request(&repo_dir, &config);
    let (context, diagnostics) = prepare_build(&request)?.into_parts();

    publish(args, cwd, &context, &diagnostics, stdout)?;
    if args.json || args.output.is_some() {
        report_diagnostics(&diagnostics, stderr)?;
    }

    if args.strict && !diagnostics.is_empty() {
        return Err(BuildError::StrictDiagnostics {
            count: diagnostics.len(),
        });
    }

    Ok(())
}

fn publish(
    args: &PrepareArgs,
    cwd: &Utf8Path,
    context: &BuildContext,
    diagnostics: &[Diagnostic],
    stdout: &mut dyn Write,
) -> Result<()> {
    if let Some(output) = args.output.as_deref() {
        let path = cwd.join(output);
        std::fs::write(&path, format_json(context)?).map_err(|source| {
            BuildError::WriteFailed {
                destination: path.to_string(),
                source,
            }
        })?;
        info!(target: "prepare", "wrote build context to {path}");
        return Ok(());
    }

    let rendered = if args.json {
        format_json(context)?
    } else {
        format_human(context, diagnostics)
    };
    writeln!(stdout, "{rendered}").map_err(|source| BuildError::WriteFailed {
        destination: "stdout".to_owned(),
        source,
    })
}

fn report_diagnostics(diagnostics: &[Diagnostic], stderr: &mut dyn Write) -> Result<()> {
    for diagnostic in diagnostics {
        writeln!(stderr, "warning: {diagnostic}").map_err(|source| BuildError::WriteFailed {
            destination: "stderr".to_owned(),
            source,
        })?;
    }
    Ok(())
}
