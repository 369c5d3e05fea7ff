//! CLI argument definitions for chipper.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use camino::{Utf8Path, Utf8PathBuf};
use chipper_common::{ChipperConfig, Locale, normalise_locale};
use clap::{Parser, Subcommand};

use crate::context::PrepareRequest;
use crate::locales::LocaleOptions;

/// Build-time helpers for simulations.
#[derive(Parser, Debug, Default)]
#[command(name = "chipper")]
#[command(version, about)]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = concat!(
    "Build-time helpers for simulations.\n\n",
    "`chipper prepare` runs before the bundler: it decides which locale string ",
    "files are bundled and publishes the build context the bundler reads. ",
    "`chipper inspect` shows what the startup initializer derives from a ",
    "simulation URL.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Bundle the fallback locale only:\n",
    "    $ chipper\n\n",
    "  Bundle every translated locale:\n",
    "    $ chipper prepare --locales='*'\n\n",
    "  Bundle Arabic, French and Spanish:\n",
    "    $ chipper prepare --locales=ar,fr,es\n\n",
    "  Bundle the locales translated for another simulation:\n",
    "    $ chipper prepare --locales-repo=beers-law-lab\n\n",
    "  Check which assertions a URL enables:\n",
    "    $ chipper inspect 'molarity_en.html?ea&cacheBuster=false'",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Prepare arguments (used when no subcommand is given).
    #[command(flatten)]
    pub prepare: PrepareArgs,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve locales and publish the build context (default).
    Prepare(PrepareArgs),

    /// Run the startup initializer against a URL and report the outcome.
    Inspect(InspectArgs),
}

/// Arguments for the prepare command.
#[derive(Parser, Debug, Clone, Default)]
pub struct PrepareArgs {
    /// Simulation repository containing package.json [default: current directory].
    #[arg(short = 'C', long, value_name = "DIR")]
    pub repo_dir: Option<Utf8PathBuf>,

    /// Locale always bundled [default: from chipper.toml, else "en"].
    #[arg(long, value_name = "LOCALE")]
    pub fallback_locale: Option<String>,

    /// Comma-separated locales to bundle, or '*' for every translated locale.
    #[arg(long, value_name = "LIST")]
    pub locales: Option<String>,

    /// Bundle every locale translated for this repository (ignored with --locales).
    #[arg(long, alias = "localesRepo", value_name = "REPO")]
    pub locales_repo: Option<String>,

    /// Locale the string plugin looks strings up in [default: fallback locale].
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Directory holding per-repository strings [default: from chipper.toml, else ../babel].
    #[arg(long, value_name = "DIR")]
    pub strings_root: Option<Utf8PathBuf>,

    /// Print the build context as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write the build context as JSON to this file.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Fail when locale resolution reports any diagnostic.
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

/// Arguments for the inspect command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InspectArgs {
    /// Simulation URL, or just its query string starting with '?'.
    #[arg(value_name = "URL")]
    pub url: String,

    /// Treat the page as a production build.
    #[arg(long)]
    pub production: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// The command to run, treating a bare invocation as `prepare`.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Prepare(self.prepare))
    }
}

impl PrepareArgs {
    /// Combine these arguments with `config`; flags win over the file.
    #[must_use]
    pub fn to_request(&self, repo_dir: &Utf8Path, config: &ChipperConfig) -> PrepareRequest {
        let fallback_locale = normalise_locale(self.fallback_locale.as_deref())
            .map_or_else(|| config.fallback_locale(), Locale::from);

        PrepareRequest {
            repo_dir: repo_dir.to_owned(),
            fallback_locale,
            locale_options: LocaleOptions {
                locales: self.locales.clone(),
                locales_repo: self.locales_repo.clone(),
            },
            target_locale: self.locale.clone(),
            strings_root: self
                .strings_root
                .clone()
                .unwrap_or_else(|| config.strings_root.clone()),
            cache_buster: config.cache_buster,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
