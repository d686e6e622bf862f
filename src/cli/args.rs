// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

/// dadjoke - dad jokes in your terminal
#[derive(Parser, Debug)]
#[command(name = "dadjoke")]
#[command(version, about = "Dad jokes from icanhazdadjoke.com in your terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Report fetch failures but still exit successfully
    #[arg(long, global = true)]
    pub no_fail: bool,

    /// Joke API base URL
    #[arg(long, global = true, hide = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Seed for joke selection (repeatable picks)
    #[arg(long, global = true, hide = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get a random dad joke
    ///
    /// Fetches a random dad joke from the icanhazdadjoke API. With --term, one
    /// of the jokes matching the term is picked at random instead.
    #[command(alias = "r")]
    Random(RandomArgs),
}

/// Arguments for the random subcommand
#[derive(clap::Args, Debug, Default)]
pub struct RandomArgs {
    /// A search term for a dad joke.
    #[arg(long, default_value = "")]
    pub term: String,
}

impl RandomArgs {
    /// The search term, if one was actually given
    pub fn search_term(&self) -> Option<&str> {
        let term = self.term.trim();
        (!term.is_empty()).then_some(term)
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Joke text only
    #[default]
    Text,

    /// JSON output
    Json,
}
