// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use dadjoke::error::{ApiError, DadJokeError};
use std::io;

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed");
    let err: DadJokeError = io_error.into();

    match err {
        DadJokeError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_empty_result_display() {
    assert_eq!(
        DadJokeError::EmptyResult.to_string(),
        "No jokes found with this term"
    );
}

#[test]
fn test_config_error_display() {
    let error = DadJokeError::Config("timeout must be at least 1 second".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: timeout must be at least 1 second"
    );
}

#[test]
fn test_api_server_error_display() {
    let error = ApiError::ServerError {
        status: 500,
        message: "Internal server error".to_string(),
    };
    assert_eq!(error.to_string(), "API error (500): Internal server error");
}

#[test]
fn test_api_error_to_crate_error_conversion() {
    let err: DadJokeError = ApiError::Network("connection refused".to_string()).into();
    assert_eq!(err.to_string(), "API error: Network error: connection refused");
    assert!(err.is_failure());
}

#[test]
fn test_decode_error_display() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = DadJokeError::decode("joke", source);
    assert!(err.to_string().starts_with("Could not decode joke: "));
}
