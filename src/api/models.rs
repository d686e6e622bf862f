// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Wire types returned by the joke API

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DadJokeError, Result};

/// A single joke record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: String,
    #[serde(rename = "joke")]
    pub text: String,
    #[serde(rename = "status")]
    pub status_code: u16,
}

/// Envelope returned by `/search`
///
/// `results` is kept as raw JSON; call [`SearchResult::jokes`] to decode it.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "results")]
    pub raw_results: Value,
    pub search_term: String,
    #[serde(rename = "status")]
    pub status_code: u16,
    #[serde(rename = "total_jokes")]
    pub total_count: u64,
}

impl SearchResult {
    /// Decode the nested result list
    pub fn jokes(&self) -> Result<Vec<Joke>> {
        decode_joke_list(self.raw_results.clone())
    }
}

/// Outcome of a term search: the count the API reported and the jokes it sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSearch {
    pub total_count: u64,
    pub jokes: Vec<Joke>,
}

impl TermSearch {
    /// True when the reported total agrees with the decoded list.
    pub fn is_consistent(&self) -> bool {
        usize::try_from(self.total_count).is_ok_and(|n| n == self.jokes.len())
    }
}

pub(crate) fn decode_joke_list(raw: Value) -> Result<Vec<Joke>> {
    serde_json::from_value(raw).map_err(|e| DadJokeError::decode("search results", e))
}
