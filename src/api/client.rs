// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP client for icanhazdadjoke.com
//!
//! One GET per call, no retries. Bodies are read fully and decoded with
//! serde_json so that decode failures are reported separately from
//! transport failures.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::api::models::{decode_joke_list, Joke, SearchResult, TermSearch};
use crate::config::ApiConfig;
use crate::error::{ApiError, DadJokeError, Result};

/// Something that can hand out jokes
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Fetch one random joke
    async fn random_joke(&self) -> Result<Joke>;

    /// Fetch the jokes matching `term`, with the total the API reported
    async fn jokes_by_term(&self, term: &str) -> Result<TermSearch>;
}

/// icanhazdadjoke.com client
pub struct IcanhazClient {
    client: Client,
    base_url: Url,
}

impl IcanhazClient {
    /// Create a client from API settings
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url()?,
        })
    }

    /// URL of the random-joke endpoint
    pub fn random_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the search endpoint for `term`
    pub fn search_url(&self, term: &str) -> Result<Url> {
        search_url(&self.base_url, term)
    }

    async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        tracing::debug!(%url, "requesting joke data");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "joke API responded");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Could not read response body: {}", e)))?;
        tracing::trace!(bytes = body.len(), "read response body");
        Ok(body.to_vec())
    }
}

#[async_trait]
impl JokeSource for IcanhazClient {
    async fn random_joke(&self) -> Result<Joke> {
        let body = self.get_bytes(self.base_url.clone()).await?;
        decode_joke(&body)
    }

    async fn jokes_by_term(&self, term: &str) -> Result<TermSearch> {
        let url = self.search_url(term)?;
        let body = self.get_bytes(url).await?;
        decode_term_search(&body)
    }
}

/// Build `<base>search?term=<term>` with the term form-encoded
pub fn search_url(base: &Url, term: &str) -> Result<Url> {
    let mut url = base
        .join("search")
        .map_err(|e| DadJokeError::Config(format!("could not build search URL: {}", e)))?;
    url.query_pairs_mut().append_pair("term", term);
    Ok(url)
}

/// Decode the random-joke response body
pub fn decode_joke(body: &[u8]) -> Result<Joke> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::error!(error = %e, "could not decode joke");
        DadJokeError::decode("joke", e)
    })
}

/// Decode a search response body
///
/// The envelope and the nested list are decoded independently; each failure
/// is logged, and the envelope's error wins if both fail.
pub fn decode_term_search(body: &[u8]) -> Result<TermSearch> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::error!(error = %e, "search response is not JSON");
        DadJokeError::decode("search response", e)
    })?;

    let raw_results = value.get("results").cloned().unwrap_or(Value::Null);
    let envelope = serde_json::from_value::<SearchResult>(value)
        .map_err(|e| DadJokeError::decode("search envelope", e));
    if let Err(e) = &envelope {
        tracing::error!(error = %e, "could not decode search envelope");
    }

    let jokes = match &envelope {
        Ok(envelope) => envelope.jokes(),
        Err(_) => decode_joke_list(raw_results),
    };
    if let Err(e) = &jokes {
        tracing::error!(error = %e, "could not decode search results");
    }

    let envelope = envelope?;
    let jokes = jokes?;
    tracing::debug!(
        term = %envelope.search_term,
        total = envelope.total_count,
        decoded = jokes.len(),
        "decoded search results"
    );

    Ok(TermSearch {
        total_count: envelope.total_count,
        jokes,
    })
}
