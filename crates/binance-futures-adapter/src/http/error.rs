/*
[INPUT]:  Error sources (HTTP transport, exchange rejections, malformed bodies)
[OUTPUT]: Structured error types with transport/API classification
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::time::Duration;
use thiserror::Error;

/// Main error type for the Binance adapter
#[derive(Error, Debug)]
pub enum BinanceError {
    /// Connection could not be established or was dropped
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {:.3}s", .duration.as_secs_f64())]
    Timeout { duration: Duration },

    /// Exchange rejected the request
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Body could not be interpreted
    #[error("Unexpected response (HTTP {status}): {body}")]
    Protocol { status: u16, body: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A signed endpoint was called on a client without credentials
    #[error("API key and secret are required for signed endpoints")]
    MissingCredentials,
}

impl BinanceError {
    /// Wrap a reqwest error, dropping the URL and mapping timeouts.
    ///
    /// A timeout hit while connecting reports `connect_timeout`, any other
    /// timeout reports the overall `request_timeout`.
    pub fn from_transport(
        err: reqwest::Error,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Self {
        if err.is_timeout() {
            let duration = if err.is_connect() {
                connect_timeout
            } else {
                request_timeout
            };
            BinanceError::Timeout { duration }
        } else {
            BinanceError::Http(err.without_url())
        }
    }

    /// The request never produced a usable HTTP exchange
    pub fn is_transport(&self) -> bool {
        matches!(self, BinanceError::Http(_) | BinanceError::Timeout { .. })
    }
}

/// Result type alias for Binance operations
pub type Result<T> = std::result::Result<T, BinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        let timeout_err = BinanceError::Timeout {
            duration: Duration::from_secs(10),
        };
        assert!(timeout_err.is_transport());

        let rejected = BinanceError::Api {
            code: -2019,
            message: "Margin is insufficient.".to_string(),
        };
        assert!(!rejected.is_transport());

        let protocol = BinanceError::Protocol {
            status: 200,
            body: "<html>".to_string(),
        };
        assert!(!protocol.is_transport());
    }

    #[test]
    fn test_display_messages() {
        let err = BinanceError::Protocol {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected response (HTTP 502): <html>Bad Gateway</html>"
        );
        assert_eq!(
            BinanceError::Timeout {
                duration: Duration::from_secs(10)
            }
            .to_string(),
            "Request timed out after 10.000s"
        );
        assert_eq!(
            BinanceError::Timeout {
                duration: Duration::from_millis(300)
            }
            .to_string(),
            "Request timed out after 0.300s"
        );
    }
}
