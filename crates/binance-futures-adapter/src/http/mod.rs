/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod classify;
pub mod client;
pub mod error;
pub mod public;
pub mod retry;
pub mod signature;
pub mod trade;

pub use classify::{classify, ApiResponse};
pub use error::{BinanceError, Result};
pub use retry::RetryPolicy;
pub use signature::{RequestSigner, SignedQuery};

pub use client::{BinanceClient, ClientConfig, Credentials};
pub use public::local_timestamp_ms;
