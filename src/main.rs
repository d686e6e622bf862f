// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! dadjoke - dad jokes in your terminal
//!
//! Entry point for the dadjoke CLI application.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use dadjoke::cli::{Cli, Commands};
use dadjoke::commands;
use dadjoke::config::{FailurePolicy, Settings};
use dadjoke::DadJokeError;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(err) => {
            report_error(&err);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout();
    let result = match &cli.command {
        Commands::Random(args) => commands::random::execute(args, &settings, &mut stdout).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            if err.is_failure() && settings.failure_policy == FailurePolicy::Fail {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

/// Logs go to stderr; `-v` turns on debug output for this crate and
/// `RUST_LOG` still takes precedence.
fn init_tracing(verbose: u8) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let directive = match verbose {
        0 => None,
        1 => Some("dadjoke=debug"),
        _ => Some("dadjoke=trace"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn report_error(err: &DadJokeError) {
    tracing::debug!(error = ?err, "command failed");

    let mut stderr = io::stderr();
    let colored = stderr.is_terminal();
    if colored {
        let _ = stderr.execute(SetForegroundColor(Color::Red));
    }
    eprint!("error:");
    if colored {
        let _ = stderr.execute(ResetColor);
    }
    eprintln!(" {}", err);
}
