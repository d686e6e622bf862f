// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Runtime settings for dadjoke
//!
//! Nothing is read from disk or the environment: defaults are overlaid with
//! whatever the command line provides.

use reqwest::Url;

use crate::cli::{Cli, OutputFormat};
use crate::error::{DadJokeError, Result};

/// Public API endpoint
pub const DEFAULT_BASE_URL: &str = "https://icanhazdadjoke.com/";

/// Project homepage, advertised in the User-Agent as the API asks
pub const PROJECT_URL: &str = "https://github.com/dadjoke-cli/dadjoke";

/// Current version of dadjoke
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolved settings for one invocation
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// HTTP access to the joke API
    pub api: ApiConfig,

    /// What a fetch failure does to the exit status
    pub failure_policy: FailurePolicy,

    /// How the chosen joke is written to stdout
    pub format: OutputFormat,

    /// Fixed seed for joke selection, if any
    pub seed: Option<u64>,
}

/// Joke API connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL; `/search` is resolved against it
    pub base_url: String,

    /// Sent as the User-Agent header
    pub user_agent: String,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("dadjoke/{} ({})", VERSION, PROJECT_URL)
}

fn default_timeout_secs() -> u64 {
    10
}

/// Exit-status behaviour when fetching or decoding fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Report the error and exit non-zero
    #[default]
    Fail,
    /// Report the error but still exit zero
    Report,
}

impl Settings {
    /// Build settings from parsed command-line arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(base_url) = &cli.base_url {
            settings.api.base_url = base_url.clone();
        }
        if let Some(timeout) = cli.timeout {
            settings.api.timeout_secs = timeout;
        }
        if cli.no_fail {
            settings.failure_policy = FailurePolicy::Report;
        }
        settings.format = cli.format;
        settings.seed = cli.seed;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(DadJokeError::Config(
                "timeout must be at least 1 second".to_string(),
            ));
        }
        self.api.base_url()?;
        Ok(())
    }
}

impl ApiConfig {
    /// Parsed base URL; only http and https are accepted
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            DadJokeError::Config(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DadJokeError::Config(format!(
                "unsupported URL scheme '{}' in base URL",
                url.scheme()
            )));
        }

        // Endpoints are joined onto the base, which drops a last segment
        // that lacks a trailing slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "https://icanhazdadjoke.com/");
        assert_eq!(settings.api.timeout_secs, 10);
        assert_eq!(settings.failure_policy, FailurePolicy::Fail);
        assert!(matches!(settings.format, OutputFormat::Text));
        assert!(settings.seed.is_none());
    }

    #[test]
    fn test_user_agent_names_tool_and_repo() {
        let agent = ApiConfig::default().user_agent;
        assert!(agent.starts_with("dadjoke/"));
        assert!(agent.contains(PROJECT_URL));
    }

    #[test]
    fn test_from_cli_overrides() {
        let cli = parse(&[
            "dadjoke",
            "--timeout",
            "3",
            "--no-fail",
            "--format",
            "json",
            "--base-url",
            "http://127.0.0.1:8080/",
            "--seed",
            "7",
            "random",
        ]);

        let settings = Settings::from_cli(&cli).unwrap();
        assert_eq!(settings.api.timeout_secs, 3);
        assert_eq!(settings.api.base_url, "http://127.0.0.1:8080/");
        assert_eq!(settings.failure_policy, FailurePolicy::Report);
        assert!(matches!(settings.format, OutputFormat::Json));
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = parse(&["dadjoke", "--timeout", "0", "random"]);
        let err = Settings::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let mut settings = Settings::default();
        settings.api.base_url = "ftp://example.com/".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unparseable_base_url_rejected() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("invalid base URL"));
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:9000/mirror".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "http://localhost:9000/mirror/"
        );
    }

    #[test]
    fn test_timeout_duration() {
        let config = ApiConfig {
            timeout_secs: 4,
            ..ApiConfig::default()
        };
        assert_eq!(config.timeout(), std::time::Duration::from_secs(4));
    }
}
