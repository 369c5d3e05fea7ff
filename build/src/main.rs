//! Chipper CLI entrypoint.
//!
//! Prepares a simulation build context, or inspects how a simulation URL
//! would be interpreted at startup.

use clap::Parser;
use log::LevelFilter;
use std::io::Write;

use chipper_build::cli::{Cli, Command};
use chipper_build::error::Result;
use chipper_build::inspect::run_inspect;
use chipper_build::prepare::run_prepare;

/// Environment variable holding `env_logger` directives.
const LOG_ENV: &str = "CHIPPER_LOG";

fn main() {
    let command = Cli::parse().into_command();
    init_logging(&command);

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&command, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(command: &Command, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    match command {
        Command::Prepare(args) => run_prepare(args, stdout, stderr),
        Command::Inspect(args) => run_inspect(args, stdout),
    }
}

fn init_logging(command: &Command) {
    let level = match command {
        Command::Prepare(args) => level_for(args.quiet, args.verbosity),
        Command::Inspect(args) => level_for(false, args.verbosity),
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .init();
}

const fn level_for(quiet: bool, verbosity: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, format_args!("error: {err}"));
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
