/*
[INPUT]:  Outgoing order request and exchange acknowledgement
[OUTPUT]: Human-readable console blocks
[POS]:    Presentation layer - stdout summaries around order placement
[UPDATE]: When summary fields or layout change
*/

use binance_futures_adapter::{NewOrderRequest, OrderResponse};
use console::style;
use std::fmt::{Display, Write as _};

const DIVIDER_WIDTH: usize = 52;
const PLACEHOLDER: &str = "-";

fn divider() -> String {
    "─".repeat(DIVIDER_WIDTH)
}

fn push_row(out: &mut String, label: &str, value: impl Display) {
    let _ = writeln!(out, "  {label:<22} {value}");
}

fn or_placeholder<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

pub fn render_request_summary(req: &NewOrderRequest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", divider());
    let _ = writeln!(out, "    {}", style("ORDER REQUEST SUMMARY").bold());
    let _ = writeln!(out, "{}", divider());
    push_row(&mut out, "Symbol:", &req.symbol);
    push_row(&mut out, "Side:", req.side);
    push_row(&mut out, "Order Type:", req.order_type);
    push_row(&mut out, "Quantity:", req.quantity);
    if req.order_type.requires_price() {
        push_row(&mut out, "Price / Stop:", or_placeholder(req.display_price()));
    }
    if let Some(time_in_force) = req.time_in_force {
        push_row(&mut out, "Time In Force:", time_in_force);
    }
    let _ = writeln!(out, "{}", divider());
    out
}

pub fn render_response_summary(resp: &OrderResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", divider());
    let _ = writeln!(out, "   {}", style("ORDER PLACED SUCCESSFULLY").green().bold());
    let _ = writeln!(out, "{}", divider());
    push_row(&mut out, "Order ID:", resp.order_id);
    push_row(&mut out, "Client OID:", or_placeholder(resp.client_order_id.as_deref()));
    push_row(&mut out, "Symbol:", or_placeholder(resp.symbol.as_deref()));
    push_row(&mut out, "Side:", or_placeholder(resp.side));
    push_row(&mut out, "Type:", or_placeholder(resp.order_type.as_deref()));
    push_row(&mut out, "Status:", or_placeholder(resp.status));
    push_row(&mut out, "Quantity:", or_placeholder(resp.orig_qty));
    push_row(&mut out, "Executed Qty:", or_placeholder(resp.executed_qty));
    if let Some(price) = resp.effective_price() {
        push_row(&mut out, "Avg / Set Price:", price);
    }
    let _ = writeln!(out, "{}", divider());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_futures_adapter::Side;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_summary_for_limit() {
        let req = NewOrderRequest::limit("ETHUSDT", Side::Sell, dec!(0.01), dec!(2000));
        let text = render_request_summary(&req);

        assert!(text.contains("ORDER REQUEST SUMMARY"));
        assert!(text.contains("  Symbol:                ETHUSDT"));
        assert!(text.contains("  Order Type:            LIMIT"));
        assert!(text.contains("  Price / Stop:          2000"));
        assert!(text.contains("  Time In Force:         GTC"));
    }

    #[test]
    fn test_request_summary_for_market_has_no_price() {
        let req = NewOrderRequest::market("BTCUSDT", Side::Buy, dec!(0.01));
        let text = render_request_summary(&req);

        assert!(text.contains("  Quantity:              0.01"));
        assert!(!text.contains("Price"));
        assert!(!text.contains("Time In Force"));
    }

    #[test]
    fn test_response_summary_minimal_body() {
        let resp: OrderResponse =
            serde_json::from_str(r#"{"orderId": 5, "status": "FILLED", "executedQty": "0.01"}"#)
                .unwrap();
        let text = render_response_summary(&resp);

        assert!(text.contains("  Order ID:              5"));
        assert!(text.contains("  Status:                FILLED"));
        assert!(text.contains("  Executed Qty:          0.01"));
        assert!(text.contains("  Client OID:            -"));
        assert!(!text.contains("Avg / Set Price"));
    }

    #[test]
    fn test_response_summary_shows_average_price() {
        let resp: OrderResponse =
            serde_json::from_str(r#"{"orderId": 8, "avgPrice": "43125.1", "price": "0"}"#).unwrap();
        let text = render_response_summary(&resp);
        assert!(text.contains("  Avg / Set Price:       43125.1"));
    }
}
