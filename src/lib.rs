// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! dadjoke - dad jokes from icanhazdadjoke.com in the terminal.
//!
//! This crate exposes the runtime used by the `dadjoke` CLI (`src/main.rs`):
//! - `api`: wire types, the HTTP client and the `JokeSource` seam
//! - `selection`: uniform random choice over search results
//! - `commands`: subcommand orchestration and output rendering
//! - `cli`, `config`, `error`: argument parsing, settings, error types

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod selection;

pub use error::{DadJokeError, Result};
