/*
[INPUT]:  Validation failures, configuration problems, adapter errors
[OUTPUT]: Closed set of error kinds with user-facing messages
[POS]:    Error handling layer - everything the entry point can report
[UPDATE]: When adding a failure mode or changing stderr wording
*/

use binance_futures_adapter::BinanceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// User-correctable input, caught before any network call
    #[error("{0}")]
    InvalidInput(String),

    /// Missing or malformed credentials/settings
    #[error("{0}")]
    Configuration(String),

    /// Timeouts and connection failures
    #[error("{0}")]
    Transport(String),

    /// Response body the tool could not interpret
    #[error("{0}")]
    Protocol(String),

    /// The exchange rejected the request
    #[error("Binance API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("{0}")]
    Unexpected(String),
}

impl BotError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        BotError::InvalidInput(message.into())
    }

    /// Short identifier used in log records
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::InvalidInput(_) => "invalid_input",
            BotError::Configuration(_) => "configuration",
            BotError::Transport(_) => "transport",
            BotError::Protocol(_) => "protocol",
            BotError::Api { .. } => "api",
            BotError::Unexpected(_) => "unexpected",
        }
    }

    /// Text printed on stderr before exiting
    pub fn user_message(&self) -> String {
        match self {
            BotError::InvalidInput(msg) => format!("Validation Error: {msg}"),
            BotError::Configuration(msg) => format!("Configuration Error: {msg}"),
            BotError::Transport(msg) => format!("Network Error: {msg}"),
            BotError::Protocol(msg) => format!("Protocol Error: {msg}"),
            BotError::Api { code, message } => format!(
                "Binance API Error (code {code}): {message}\n\
                 \x20   Common causes:\n\
                 \x20     - Invalid API key / secret\n\
                 \x20     - Insufficient testnet balance\n\
                 \x20     - Quantity below minimum notional\n\
                 \x20     - Price too far from mark price (LIMIT)"
            ),
            BotError::Unexpected(msg) => format!("Unexpected Error: {msg}"),
        }
    }
}

impl From<BinanceError> for BotError {
    fn from(err: BinanceError) -> Self {
        match err {
            BinanceError::Api { code, message } => BotError::Api { code, message },
            other if other.is_transport() => BotError::Transport(other.to_string()),
            other @ BinanceError::Protocol { .. } => BotError::Protocol(other.to_string()),
            other => BotError::Configuration(other.to_string()),
        }
    }
}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        BotError::Unexpected(format!("I/O failure: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
