/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Binance Futures adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiResponse,
    BinanceClient,
    BinanceError,
    ClientConfig,
    Credentials,
    RequestSigner,
    Result,
    RetryPolicy,
    SignedQuery,
};

// Re-export all types
pub use types::*;
