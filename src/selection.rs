// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Random joke selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::Joke;
use crate::error::{DadJokeError, Result};

/// Pick one joke uniformly from `jokes`.
///
/// Every index in `0..=jokes.len() - 1` is reachable.
pub fn select_random<'a, R>(jokes: &'a [Joke], rng: &mut R) -> Result<&'a Joke>
where
    R: Rng + ?Sized,
{
    if jokes.is_empty() {
        return Err(DadJokeError::EmptyResult);
    }

    let index = rng.random_range(0..jokes.len());
    tracing::trace!(index, candidates = jokes.len(), "selected joke");
    Ok(&jokes[index])
}

/// Random source for one process: seeded from `seed` when given, otherwise
/// from the thread-local generator, which seeds itself from the OS once.
pub fn process_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}
