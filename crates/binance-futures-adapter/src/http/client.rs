/*
[INPUT]:  HTTP configuration (base URL, timeouts, retry policy, credentials)
[OUTPUT]: Configured reqwest client with retrying send and typed decoding
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::classify::classify;
use crate::http::{BinanceError, Result, RetryPolicy};
use crate::types::TimeSource;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Binance USD-M Futures testnet
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Header carrying the API key on signed requests
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Receive window used when none is configured, in milliseconds
pub const DEFAULT_RECV_WINDOW_MS: u64 = 10_000;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub recv_window_ms: u64,
    pub time_source: TimeSource,
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            time_source: TimeSource::Server,
            retry: RetryPolicy::default(),
        }
    }
}

/// Credentials for signed requests
pub struct Credentials {
    pub api_key: String,
    pub api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// First and last four characters of the key, for diagnostics
    pub fn masked_key(&self) -> String {
        let key = &self.api_key;
        let chars: Vec<char> = key.chars().collect();
        if chars.len() > 8 {
            let head: String = chars[..4].iter().collect();
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{head}...{tail}")
        } else {
            "***REDACTED***".to_string()
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.masked_key())
            .field("api_secret", &"***REDACTED***")
            .finish()
    }
}

/// Main HTTP client for the Binance Futures REST API
#[derive(Debug)]
pub struct BinanceClient {
    http_client: Client,
    base_url: Url,
    config: ClientConfig,
    credentials: Option<Credentials>,
}

impl BinanceClient {
    /// Create a testnet client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a testnet client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, TESTNET_BASE_URL)
    }

    /// Create a client against an arbitrary base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| BinanceError::Config(format!("cannot build HTTP client: {err}")))?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            config,
            credentials: None,
        })
    }

    /// Attach credentials for signed requests
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set credentials for signed requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn require_credentials(&self) -> Result<&Credentials> {
        self.credentials
            .as_ref()
            .ok_or(BinanceError::MissingCredentials)
    }

    /// Build request builder for an endpoint path
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request, retrying per the configured policy, and return the
    /// final status and body text.
    ///
    /// `build` is invoked once per attempt; every attempt carries the same
    /// signed payload.
    pub(crate) async fn send_with_retry<F>(&self, endpoint: &str, build: F) -> Result<(StatusCode, String)>
    where
        F: Fn() -> Result<RequestBuilder>,
    {
        let policy = &self.config.retry;
        let mut attempt = 1;

        loop {
            match build()?.send().await {
                Ok(response) => {
                    let status = response.status();
                    if policy.is_retryable_status(status) && policy.can_retry(attempt) {
                        let delay = policy.backoff(attempt);
                        warn!(
                            endpoint,
                            status = status.as_u16(),
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            "transient HTTP status; retrying"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    let body = response
                        .text()
                        .await
                        .map_err(|err| self.transport_error(err))?;
                    debug!(endpoint, status = status.as_u16(), body = %body, "response received");
                    return Ok((status, body));
                }
                Err(err) if err.is_connect() && !err.is_timeout() && policy.can_retry(attempt) => {
                    let delay = policy.backoff(attempt);
                    warn!(
                        endpoint,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err.without_url(),
                        "connection failed; retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    let err = self.transport_error(err);
                    warn!(endpoint, attempt, error = %err, "request failed");
                    return Err(err);
                }
            }
        }
    }

    /// Send with retries, classify the response and decode `T`.
    pub(crate) async fn execute<T, F>(&self, endpoint: &str, build: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn() -> Result<RequestBuilder>,
    {
        let (status, body) = self.send_with_retry(endpoint, build).await?;
        let result = classify(status, &body).into_result(status);
        if let Err(err) = &result {
            warn!(endpoint, status = status.as_u16(), error = %err, "request rejected");
        }
        result
    }

    fn transport_error(&self, err: reqwest::Error) -> BinanceError {
        BinanceError::from_transport(err, self.config.timeout, self.config.connect_timeout)
    }
}
