//! Process configuration read from the environment.

use std::time::Duration;

use alphavantage_api::parser::DEFAULT_PARALLEL_THRESHOLD;
use alphavantage_api::{Client, Normalizer};

use crate::error::FinanceError;

pub const DEFAULT_API_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_API_KEY: &str = "demo";
pub const DEFAULT_TITLE: &str = "finance-mcp";
pub const DEFAULT_NAME: &str = "Market-mcp";
pub const DEFAULT_VERSION: &str = "v1.0.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Server settings.
///
/// `title`, `name` and `version` identify the server to tool-call clients.
#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub title: String,
    pub name: String,
    pub version: String,
    pub request_timeout: Duration,
    /// Series with at least this many records are decoded on the worker pool.
    pub parallel_threshold: usize,
    /// Decode pool size; 0 or 1 decodes on the calling thread.
    pub decode_workers: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("title", &self.title)
            .field("name", &self.name)
            .field("version", &self.version)
            .field("request_timeout", &self.request_timeout)
            .field("parallel_threshold", &self.parallel_threshold)
            .field("decode_workers", &self.decode_workers)
            .finish_non_exhaustive()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            title: DEFAULT_TITLE.to_string(),
            name: DEFAULT_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            decode_workers: Normalizer::default_workers(),
        }
    }
}

impl Config {
    /// Reads the process environment. Load any `.env` file before calling this.
    pub fn from_env() -> Result<Self, FinanceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Missing or empty
    /// values fall back to defaults; unparsable numbers are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FinanceError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        Ok(Self {
            api_url: env_string(&get, "API_URL", defaults.api_url),
            api_key: env_string(&get, "API_KEY", defaults.api_key),
            title: env_string(&get, "TITLE", defaults.title),
            name: env_string(&get, "NAME", defaults.name),
            version: env_string(&get, "VERSION", defaults.version),
            request_timeout: Duration::from_secs(env_number(
                &get,
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            parallel_threshold: env_number(&get, "PARALLEL_THRESHOLD", defaults.parallel_threshold)?,
            decode_workers: env_number(&get, "DECODE_WORKERS", defaults.decode_workers)?,
        })
    }

    /// Builds the upstream client.
    pub fn client(&self) -> Result<Client, FinanceError> {
        Ok(Client::with_base_url(&self.api_url, &self.api_key)?.with_timeout(self.request_timeout))
    }

    /// Builds the normalizer, with a decode pool when more than one worker is configured.
    pub fn normalizer(&self) -> Result<Normalizer, FinanceError> {
        if self.decode_workers <= 1 {
            return Ok(Normalizer::sequential());
        }
        Normalizer::parallel(self.decode_workers, self.parallel_threshold)
            .map_err(|e| FinanceError::Config(format!("failed to start decode workers: {}", e)))
    }
}

fn env_string(get: &impl Fn(&str) -> Option<String>, key: &str, default: String) -> String {
    match get(key) {
        Some(val) => val,
        None => {
            tracing::debug!("{} not set, using default", key);
            default
        }
    }
}

fn env_number<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, FinanceError> {
    match get(key) {
        Some(val) => val.trim().parse::<T>().map_err(|_| {
            FinanceError::Config(format!("{} must be a non-negative integer, got '{}'", key, val))
        }),
        None => {
            tracing::debug!("{} not set, using default", key);
            Ok(default)
        }
    }
}
