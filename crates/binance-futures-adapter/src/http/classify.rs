/*
[INPUT]:  HTTP status and raw response body
[OUTPUT]: Success payload, exchange rejection, or protocol failure
[POS]:    HTTP layer - response classification shared by all endpoints
[UPDATE]: When the exchange changes its error envelope
*/

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{BinanceError, Result};

/// Outcome of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Success(Value),
    ApiError { code: i64, message: String },
    ProtocolError(String),
}

/// Decide what a response means.
///
/// Unparseable bodies are protocol errors whatever the status. Otherwise a
/// non-2xx status, or an object carrying a `code` other than 200, is an API
/// error; the body's `code`/`msg` win over the HTTP status and raw text.
pub fn classify(status: StatusCode, body: &str) -> ApiResponse {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return ApiResponse::ProtocolError(body.to_string()),
    };

    let body_code = value.get("code").filter(|code| !code.is_null());
    let rejected_by_body = body_code.is_some_and(|code| code.as_i64() != Some(200));

    if !status.is_success() || rejected_by_body {
        let code = body_code
            .and_then(Value::as_i64)
            .unwrap_or_else(|| i64::from(status.as_u16()));
        let message = value
            .get("msg")
            .and_then(Value::as_str)
            .map_or_else(|| body.to_string(), str::to_string);
        return ApiResponse::ApiError { code, message };
    }

    ApiResponse::Success(value)
}

impl ApiResponse {
    /// Turn the classification into a typed result.
    ///
    /// A success body that does not fit `T` is reported as a protocol error.
    pub fn into_result<T: DeserializeOwned>(self, status: StatusCode) -> Result<T> {
        match self {
            ApiResponse::Success(value) => {
                let raw = value.to_string();
                serde_json::from_value(value).map_err(|_| BinanceError::Protocol {
                    status: status.as_u16(),
                    body: raw,
                })
            }
            ApiResponse::ApiError { code, message } => Err(BinanceError::Api { code, message }),
            ApiResponse::ProtocolError(body) => Err(BinanceError::Protocol {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
