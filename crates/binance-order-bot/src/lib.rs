/*
[INPUT]:  Public API exports for binance-order-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod orders;
pub mod summary;
pub mod validation;

// Re-export main types for convenience
pub use config::Settings;
pub use error::BotError;
pub use validation::OrderRequest;
