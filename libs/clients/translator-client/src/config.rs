use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Queries stay fresh for five minutes.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// Client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub stale_time: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            stale_time: DEFAULT_STALE_TIME,
        }
    }
}

impl FromEnv for ClientConfig {
    /// Reads:
    /// - TRANSLATOR_API_URL: defaults to http://localhost:3000
    /// - TRANSLATOR_TIMEOUT_SECS: defaults to 30
    /// - TRANSLATOR_STALE_SECS: defaults to 300
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or_default("TRANSLATOR_API_URL", DEFAULT_BASE_URL);
        let timeout = env_parse_or("TRANSLATOR_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs())?;
        let stale = env_parse_or("TRANSLATOR_STALE_SECS", DEFAULT_STALE_TIME.as_secs())?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout),
            stale_time: Duration::from_secs(stale),
        })
    }
}
