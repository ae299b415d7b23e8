//! gsa - iterative binary tree traversals
//!
//! Builds sample trees and walks them with the explicit-stack and
//! explicit-queue traversals from `gsa-core`.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use commands::dispatch::CommandContext;
use gsa_core::config::GsaConfig;
use gsa_core::error::{ExitCode as GsaExitCode, GsaError};
use gsa_core::format::OutputFormat;
use gsa_core::logging::{self, LogOptions};

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `--format` is parsed; honor a JSON request
            // found in raw argv so scripts still get a structured envelope.
            if argv_format_json {
                let gsa_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        GsaError::UsageError(err.to_string())
                    }
                    clap::error::ErrorKind::ArgumentConflict => GsaError::DuplicateFormat,
                    _ => GsaError::Other(err.to_string()),
                };

                eprintln!("{}", gsa_error.to_json());
                return ExitCode::from(gsa_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let log_opts = LogOptions {
        verbose: cli.verbose,
        level: cli.log_level.clone(),
        json: cli.log_json,
    };
    if let Err(e) = logging::init_tracing(&log_opts) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = match GsaConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&cli, cli.format.unwrap_or_default(), &e),
    };

    let ctx = CommandContext::new(&cli, &config, start);

    match commands::dispatch::run(&ctx) {
        Ok(()) => ExitCode::from(GsaExitCode::Success as u8),
        Err(e) => report_error(&cli, ctx.format, &e),
    }
}

fn report_error(cli: &Cli, format: OutputFormat, e: &GsaError) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }

    ExitCode::from(e.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
