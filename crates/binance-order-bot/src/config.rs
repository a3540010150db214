/*
[INPUT]:  BINANCE_* environment variables (optionally seeded from .env)
[OUTPUT]: Parsed settings, client configuration and credentials
[POS]:    Configuration layer - process startup
[UPDATE]: When adding new configuration options
*/

use binance_futures_adapter::http::client::{DEFAULT_RECV_WINDOW_MS, TESTNET_BASE_URL};
use binance_futures_adapter::{ClientConfig, Credentials, TimeSource};
use config::{Config, Environment};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{BotError, Result};

pub const ENV_PREFIX: &str = "BINANCE";

/// Runtime settings for one invocation
#[derive(Clone, Deserialize)]
pub struct Settings {
    /// Sent in the X-MBX-APIKEY header
    #[serde(default)]
    pub api_key: Option<String>,
    /// HMAC key; never logged
    #[serde(default)]
    pub api_secret: Option<String>,
    pub base_url: String,
    pub recv_window: u64,
    pub timeout_secs: u64,
    pub time_source: TimeSource,
    pub log_dir: PathBuf,
}

impl Settings {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit environment source, with defaults applied
    pub fn from_environment(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("base_url", TESTNET_BASE_URL)
            .and_then(|b| b.set_default("recv_window", DEFAULT_RECV_WINDOW_MS))
            .and_then(|b| b.set_default("timeout_secs", 10_u64))
            .and_then(|b| b.set_default("time_source", "server"))
            .and_then(|b| b.set_default("log_dir", "logs"))
            .map_err(|err| BotError::Configuration(format!("invalid defaults: {err}")))?
            .add_source(env)
            .build()
            .and_then(|config| config.try_deserialize::<Settings>())
            .map_err(|err| BotError::Configuration(format!("invalid settings: {err}")))?;
        Ok(settings)
    }

    /// API key and secret, both required and non-empty
    pub fn credentials(&self) -> Result<Credentials> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        match (present(&self.api_key), present(&self.api_secret)) {
            (Some(key), Some(secret)) => Ok(Credentials::new(key, secret)),
            _ => Err(BotError::Configuration(
                "Missing credentials. Set BINANCE_API_KEY and BINANCE_API_SECRET \
                 in the environment or in a .env file."
                    .to_string(),
            )),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            recv_window_ms: self.recv_window,
            time_source: self.time_source,
            ..ClientConfig::default()
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = |value: &Option<String>| value.as_ref().map(|_| "<set>");
        f.debug_struct("Settings")
            .field("api_key", &set(&self.api_key))
            .field("api_secret", &set(&self.api_secret))
            .field("base_url", &self.base_url)
            .field("recv_window", &self.recv_window)
            .field("timeout_secs", &self.timeout_secs)
            .field("time_source", &self.time_source)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}
