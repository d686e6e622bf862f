// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! icanhazdadjoke.com API access
//!
//! `models` holds the wire types, `client` the HTTP side and the
//! `JokeSource` seam the commands are written against.

pub mod client;
pub mod models;

pub use client::{IcanhazClient, JokeSource};
pub use models::{Joke, SearchResult, TermSearch};
