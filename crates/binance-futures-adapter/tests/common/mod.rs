/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

use binance_futures_adapter::{ClientConfig, RetryPolicy, TimeSource};
use std::time::Duration;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client configuration with near-zero backoff
pub fn fast_retry_config(time_source: TimeSource) -> ClientConfig {
    ClientConfig {
        time_source,
        connect_timeout: Duration::from_millis(500),
        retry: RetryPolicy {
            backoff_base: Duration::from_millis(1),
            ..RetryPolicy::default()
        },
        ..ClientConfig::default()
    }
}

/// Order acknowledgement as returned for a filled market order
pub fn filled_order_body() -> serde_json::Value {
    serde_json::json!({
        "orderId": 5,
        "symbol": "BTCUSDT",
        "status": "FILLED",
        "clientOrderId": "testnet-5",
        "price": "0",
        "avgPrice": "43125.10",
        "origQty": "0.01",
        "executedQty": "0.01",
        "type": "MARKET",
        "side": "BUY",
        "updateTime": 1_700_000_000_456_i64
    })
}
