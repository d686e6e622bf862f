// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! The `random` command
//!
//! Without a term the API's random endpoint already picks the joke. With a
//! term the search results are fetched and one of them is chosen here.

use std::io::Write;

use rand::Rng;
use serde_json::json;

use crate::api::{IcanhazClient, Joke, JokeSource};
use crate::cli::{OutputFormat, RandomArgs};
use crate::config::Settings;
use crate::error::{DadJokeError, Result};
use crate::selection::{process_rng, select_random};

/// What the command ends up printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomOutcome {
    /// A joke was found
    Joke(Joke),
    /// The search matched nothing usable
    NoJokes,
}

/// Execute the random command against the configured API
pub async fn execute<W: Write>(
    args: &RandomArgs,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let client = IcanhazClient::new(&settings.api)?;
    let mut rng = process_rng(settings.seed);

    let outcome = fetch(&client, args.search_term(), &mut rng).await?;
    writeln!(out, "{}", render(&outcome, settings.format)?)?;
    Ok(())
}

/// Fetch a joke, searching by `term` when one is given
pub async fn fetch<S, R>(source: &S, term: Option<&str>, rng: &mut R) -> Result<RandomOutcome>
where
    S: JokeSource + ?Sized,
    R: Rng + ?Sized,
{
    let Some(term) = term else {
        tracing::debug!("no search term, asking for a random joke");
        let joke = source.random_joke().await?;
        return Ok(RandomOutcome::Joke(joke));
    };

    tracing::debug!(term, "searching jokes");
    let search = source.jokes_by_term(term).await?;

    if !search.is_consistent() {
        tracing::warn!(
            reported = search.total_count,
            decoded = search.jokes.len(),
            "search total does not match decoded results"
        );
        return Ok(RandomOutcome::NoJokes);
    }

    match select_random(&search.jokes, rng) {
        Ok(joke) => Ok(RandomOutcome::Joke(joke.clone())),
        Err(DadJokeError::EmptyResult) => Ok(RandomOutcome::NoJokes),
        Err(e) => Err(e),
    }
}

/// Format an outcome for stdout
pub fn render(outcome: &RandomOutcome, format: OutputFormat) -> Result<String> {
    let rendered = match (outcome, format) {
        (RandomOutcome::Joke(joke), OutputFormat::Text) => joke.text.clone(),
        (RandomOutcome::Joke(joke), OutputFormat::Json) => serde_json::to_string(joke)?,
        (RandomOutcome::NoJokes, OutputFormat::Text) => DadJokeError::EmptyResult.to_string(),
        (RandomOutcome::NoJokes, OutputFormat::Json) => {
            json!({ "error": DadJokeError::EmptyResult.to_string() }).to_string()
        }
    };
    Ok(rendered)
}
