// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for dadjoke
//!
//! Three failure families matter to the user: the joke API could not be
//! reached, its answer could not be decoded, or a search matched nothing.

use thiserror::Error;

/// Main error type for dadjoke operations
#[derive(Error, Debug)]
pub enum DadJokeError {
    /// Transport-level failures talking to the joke API
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A response body did not have the expected JSON shape
    #[error("Could not decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A term search matched no jokes
    #[error("No jokes found with this term")]
    EmptyResult,

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request could not be built, sent, or its body read
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout waiting for response
    #[error("Request timed out")]
    Timeout,

    /// API answered with a non-success status
    #[error("API error ({status}): {message}")]
    ServerError { status: u16, message: String },
}

/// Result type alias for dadjoke operations
pub type Result<T> = std::result::Result<T, DadJokeError>;

impl DadJokeError {
    /// Wrap a serde failure with a short name of what was being decoded.
    pub fn decode(what: &'static str, source: serde_json::Error) -> Self {
        DadJokeError::Decode { what, source }
    }

    /// Network and decode failures end the command unsuccessfully; an empty
    /// search is an ordinary answer.
    pub fn is_failure(&self) -> bool {
        !matches!(self, DadJokeError::EmptyResult)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<reqwest::Error> for DadJokeError {
    fn from(err: reqwest::Error) -> Self {
        DadJokeError::Api(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_empty_result_message() {
        let err = DadJokeError::EmptyResult;
        assert_eq!(err.to_string(), "No jokes found with this term");
    }

    #[test]
    fn test_empty_result_is_not_failure() {
        assert!(!DadJokeError::EmptyResult.is_failure());
    }

    #[test]
    fn test_decode_error_names_target() {
        let err = DadJokeError::decode("joke", json_error());
        assert!(err.to_string().starts_with("Could not decode joke:"));
        assert!(err.is_failure());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        use std::error::Error as _;

        let err = DadJokeError::decode("search results", json_error());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error() {
        let err = DadJokeError::Config("bad timeout".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.is_failure());
    }

    #[test]
    fn test_api_error_network() {
        let err = ApiError::Network("connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
    }

    #[test]
    fn test_api_error_server_error() {
        let err = ApiError::ServerError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn test_api_error_timeout() {
        let err = ApiError::Timeout;
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_from_api_error() {
        let err: DadJokeError = ApiError::Timeout.into();
        assert!(matches!(err, DadJokeError::Api(ApiError::Timeout)));
        assert!(err.to_string().contains("API error"));
    }

    #[test]
    fn test_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: DadJokeError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
