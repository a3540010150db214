/*
[INPUT]:  Base URL and configured time source
[OUTPUT]: Exchange server time and request timestamps
[POS]:    HTTP layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{BinanceClient, Result};
use crate::types::{ServerTime, TimeSource};
use reqwest::Method;

pub(crate) const SERVER_TIME_ENDPOINT: &str = "/fapi/v1/time";

impl BinanceClient {
    /// Query exchange server time
    ///
    /// GET /fapi/v1/time
    pub async fn server_time(&self) -> Result<ServerTime> {
        self.execute(SERVER_TIME_ENDPOINT, || {
            self.request(Method::GET, SERVER_TIME_ENDPOINT)
        })
        .await
    }

    /// Timestamp for a signed request, in epoch milliseconds
    pub async fn timestamp(&self) -> Result<i64> {
        match self.config().time_source {
            TimeSource::Server => Ok(self.server_time().await?.server_time),
            TimeSource::Local => Ok(local_timestamp_ms()),
        }
    }
}

/// Local wall clock in epoch milliseconds
pub fn local_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
