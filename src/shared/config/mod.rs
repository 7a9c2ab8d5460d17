//! Application configuration module
//!
//! `ChatConfig` holds everything the server needs at startup. It is built
//! either explicitly through [`ChatConfigBuilder`] or from the process
//! environment with [`ChatConfig::from_env`].

use std::time::Duration;

use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;
/// Default period between sweep cycles
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15);
/// Default inactivity threshold before a participant is evicted
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Postgres connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Listening port
    pub port: u16,
    /// Period of the inactivity sweeper
    pub sweep_interval: Duration,
    /// How long a participant may stay silent before eviction
    pub idle_timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

impl ChatConfig {
    /// Create a new ChatConfigBuilder
    pub fn builder() -> ChatConfigBuilder {
        ChatConfigBuilder::default()
    }

    /// Load configuration from the environment (and `.env` if present)
    ///
    /// Reads `DATABASE_URL`, `SERVER_PORT`, `SWEEP_INTERVAL_SECS` and
    /// `IDLE_TIMEOUT_SECS`. Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber("SERVER_PORT", port))?;
            builder = builder.port(port);
        }
        if let Some(secs) = lookup("SWEEP_INTERVAL_SECS") {
            builder = builder.sweep_interval(parse_secs("SWEEP_INTERVAL_SECS", secs)?);
        }
        if let Some(secs) = lookup("IDLE_TIMEOUT_SECS") {
            builder = builder.idle_timeout(parse_secs("IDLE_TIMEOUT_SECS", secs)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sweep_interval.is_zero() {
            return Err(ConfigError::ZeroDuration("sweep_interval"));
        }
        if self.idle_timeout.is_zero() {
            return Err(ConfigError::ZeroDuration("idle_timeout"));
        }
        Ok(())
    }
}

fn parse_secs(key: &'static str, raw: String) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidNumber(key, raw))
}

/// Builder for ChatConfig
#[derive(Debug, Default)]
pub struct ChatConfigBuilder {
    database_url: Option<String>,
    port: Option<u16>,
    sweep_interval: Option<Duration>,
    idle_timeout: Option<Duration>,
}

impl ChatConfigBuilder {
    /// Set the Postgres connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the sweeper period
    pub fn sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = Some(interval);
        self
    }

    /// Set the eviction threshold
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ChatConfig, ConfigError> {
        let defaults = ChatConfig::default();
        let config = ChatConfig {
            database_url: self.database_url,
            port: self.port.unwrap_or(defaults.port),
            sweep_interval: self.sweep_interval.unwrap_or(defaults.sweep_interval),
            idle_timeout: self.idle_timeout.unwrap_or(defaults.idle_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid number for {0}: {1:?}")]
    InvalidNumber(&'static str, String),
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}
