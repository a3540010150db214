/*
[INPUT]:  Binance USD-M Futures API schema and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderStatus, Side, TimeInForce};

/// Acknowledgement returned by `POST /fapi/v1/order`
///
/// Only `orderId` is guaranteed; testnet responses for market orders
/// routinely omit fields that are not yet known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i64,
    #[serde(default)]
    pub client_order_id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub side: Option<Side>,
    #[serde(rename = "type", default)]
    pub order_type: Option<String>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub orig_qty: Option<Decimal>,
    #[serde(default)]
    pub executed_qty: Option<Decimal>,
    #[serde(default)]
    pub avg_price: Option<Decimal>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default)]
    pub update_time: Option<i64>,
}

impl OrderResponse {
    /// Average fill price, falling back to the resting price; zero means unset.
    pub fn effective_price(&self) -> Option<Decimal> {
        self.avg_price
            .filter(|p| !p.is_zero())
            .or(self.price)
            .filter(|p| *p > Decimal::ZERO)
    }
}

/// `GET /fapi/v1/time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    pub server_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minimal_order_response() {
        let body = r#"{"orderId": 5, "status": "FILLED", "executedQty": "0.01"}"#;
        let response: OrderResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.order_id, 5);
        assert_eq!(response.status, Some(OrderStatus::Filled));
        assert_eq!(response.executed_qty, Some(dec!(0.01)));
        assert_eq!(response.avg_price, None);
    }

    #[test]
    fn test_full_order_response() {
        let body = r#"{
            "orderId": 4051214519,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "web_abc",
            "price": "0.00",
            "avgPrice": "0.00",
            "origQty": "0.010",
            "executedQty": "0.000",
            "cumQuote": "0.00000",
            "timeInForce": "GTC",
            "type": "STOP_MARKET",
            "side": "BUY",
            "stopPrice": "30000.00",
            "updateTime": 1718000000000
        }"#;
        let response: OrderResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.order_id, 4_051_214_519);
        assert_eq!(response.side, Some(Side::Buy));
        assert_eq!(response.order_type.as_deref(), Some("STOP_MARKET"));
        assert_eq!(response.stop_price, Some(dec!(30000.00)));
        assert_eq!(response.time_in_force, Some(TimeInForce::Gtc));
        assert_eq!(response.effective_price(), None);
    }

    #[test]
    fn test_effective_price_prefers_average() {
        let mut response: OrderResponse =
            serde_json::from_str(r#"{"orderId": 1, "avgPrice": "0", "price": "2000"}"#).unwrap();
        assert_eq!(response.effective_price(), Some(dec!(2000)));

        response.avg_price = Some(dec!(1999.5));
        assert_eq!(response.effective_price(), Some(dec!(1999.5)));
    }

    #[test]
    fn test_order_response_requires_order_id() {
        let result = serde_json::from_str::<OrderResponse>(r#"{"status": "NEW"}"#);
        assert!(result.is_err());
    }
}
