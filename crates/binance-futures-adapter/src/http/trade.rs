/*
[INPUT]:  Order requests and account credentials
[OUTPUT]: Order acknowledgements from the exchange
[POS]:    HTTP layer - trading endpoints (require API key + HMAC signature)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::client::API_KEY_HEADER;
use crate::http::{BinanceClient, RequestSigner, Result};
use crate::types::{NewOrderRequest, OrderResponse};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::debug;

pub(crate) const ORDER_ENDPOINT: &str = "/fapi/v1/order";

impl BinanceClient {
    /// Place a new order
    ///
    /// POST /fapi/v1/order
    /// Requires: X-MBX-APIKEY header + HMAC-SHA256 signature
    pub async fn new_order(&self, req: &NewOrderRequest) -> Result<OrderResponse> {
        self.signed_post(ORDER_ENDPOINT, &req.to_params()).await
    }

    /// Sign `params` and POST them as a form body.
    async fn signed_post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let credentials = self.require_credentials()?;
        let timestamp = self.timestamp().await?;
        let signed = RequestSigner::new(&credentials.api_secret).sign_params(
            params,
            timestamp,
            self.config().recv_window_ms,
        );
        debug!(endpoint, params = %signed.query(), "POST (signed)");

        let body = signed.to_body();
        self.execute(endpoint, || {
            Ok(self
                .request(Method::POST, endpoint)?
                .header(API_KEY_HEADER, credentials.api_key.as_str())
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body.clone()))
        })
        .await
    }
}
