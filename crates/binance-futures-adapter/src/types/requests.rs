/*
[INPUT]:  Validated order fields
[OUTPUT]: Wire-ordered request parameters for signed endpoints
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, Side, TimeInForce};

/// `POST /fapi/v1/order` parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time_in_force: Option<TimeInForce>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stop_price: Option<Decimal>,
}

impl NewOrderRequest {
    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: None,
            time_in_force: None,
            stop_price: None,
        }
    }

    /// Limit order resting good-till-cancelled
    pub fn limit(symbol: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price: Some(price),
            time_in_force: Some(TimeInForce::Gtc),
            stop_price: None,
        }
    }

    pub fn stop_market(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::StopMarket,
            quantity,
            price: None,
            time_in_force: None,
            stop_price: Some(stop_price),
        }
    }

    /// Parameters in the order they are signed and sent.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.to_string()),
            ("type", self.order_type.to_string()),
            ("quantity", self.quantity.to_string()),
        ];
        if let Some(price) = self.price {
            params.push(("price", price.to_string()));
        }
        if let Some(time_in_force) = self.time_in_force {
            params.push(("timeInForce", time_in_force.to_string()));
        }
        if let Some(stop_price) = self.stop_price {
            params.push(("stopPrice", stop_price.to_string()));
        }
        params
    }

    /// The price shown to the user: limit price or stop trigger
    pub fn display_price(&self) -> Option<Decimal> {
        self.price.or(self.stop_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_params_omit_price() {
        let req = NewOrderRequest::market("BTCUSDT", Side::Buy, dec!(0.01));
        assert_eq!(
            req.to_params(),
            vec![
                ("symbol", "BTCUSDT".to_string()),
                ("side", "BUY".to_string()),
                ("type", "MARKET".to_string()),
                ("quantity", "0.01".to_string()),
            ]
        );
    }

    #[test]
    fn test_limit_params_add_gtc() {
        let req = NewOrderRequest::limit("ETHUSDT", Side::Sell, dec!(0.5), dec!(2000));
        let keys: Vec<&str> = req.to_params().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["symbol", "side", "type", "quantity", "price", "timeInForce"]);
        assert_eq!(req.to_params()[4].1, "2000");
        assert_eq!(req.to_params()[5].1, "GTC");
    }

    #[test]
    fn test_stop_market_params_use_stop_price() {
        let req = NewOrderRequest::stop_market("BTCUSDT", Side::Buy, dec!(0.01), dec!(30000.5));
        let params = req.to_params();
        assert_eq!(params.last(), Some(&("stopPrice", "30000.5".to_string())));
        assert!(params.iter().all(|(k, _)| *k != "price"));
        assert_eq!(req.display_price(), Some(dec!(30000.5)));
    }
}
