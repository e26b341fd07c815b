//! Client configuration.
//!
//! Configuration is an explicit value handed to [`crate::Client::new`];
//! there is no process-wide state. [`Config::from_env`] reads the same
//! settings from the environment for deployments that prefer it.

use reqwest::Url;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the API base URL. Required by
/// [`Config::from_env`].
pub const ENV_BASE_URL: &str = "CRESTBANK_API_URL";

/// Environment variable for the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECONDS: &str = "CRESTBANK_TIMEOUT_SECONDS";

/// Environment variable for the advisory retry budget.
pub const ENV_MAX_RETRIES: &str = "CRESTBANK_MAX_RETRIES";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Errors raised while constructing a [`Config`] or [`crate::Client`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{ENV_BASE_URL} environment variable not set")]
    MissingBaseUrl,

    #[error("invalid base url {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("failed to construct the HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Settings for a [`crate::Client`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the accounts API, e.g. `http://localhost:8080`.
    pub base_url: Url,
    /// Applied to every request at the HTTP-client level.
    pub timeout: Duration,
    /// Advisory retry budget. The client never retries on its own; this is
    /// surfaced so callers implementing backoff have one place to configure.
    pub max_retries: u32,
}

impl Config {
    /// Build a configuration with the default timeout and retry budget.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(base_url.as_ref())?;
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Read configuration from the environment.
    ///
    /// The base URL is required; timeout and retry budget fall back to the
    /// defaults with a warning when unset or unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(ENV_BASE_URL).map_err(|_| ConfigError::MissingBaseUrl)?;
        let mut config = Self::new(base_url)?;

        match env::var(ENV_TIMEOUT_SECONDS).ok().and_then(|v| v.parse::<u64>().ok()) {
            Some(seconds) => config.timeout = Duration::from_secs(seconds),
            None => {
                tracing::warn!(
                    "{} not set or unparseable, defaulting to {} seconds",
                    ENV_TIMEOUT_SECONDS,
                    DEFAULT_TIMEOUT.as_secs()
                );
            }
        }

        match env::var(ENV_MAX_RETRIES).ok().and_then(|v| v.parse::<u32>().ok()) {
            Some(retries) => config.max_retries = retries,
            None => {
                tracing::warn!(
                    "{} not set or unparseable, defaulting to {} retries",
                    ENV_MAX_RETRIES,
                    DEFAULT_MAX_RETRIES
                );
            }
        }

        Ok(config)
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|err| ConfigError::InvalidBaseUrl {
        value: value.to_owned(),
        reason: err.to_string(),
    })?;

    // Relative joins and path-segment pushes both need a host-bearing base.
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl {
            value: value.to_owned(),
            reason: "base url must be absolute with a host".to_owned(),
        });
    }

    Ok(url)
}
