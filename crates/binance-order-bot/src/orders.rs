/*
[INPUT]:  Validated OrderRequest and a credentialed BinanceClient
[OUTPUT]: Exchange acknowledgement plus console summaries
[POS]:    Orchestration layer - one order per invocation, no retries here
[UPDATE]: When order payload rules or reporting change
*/

use binance_futures_adapter::{BinanceClient, NewOrderRequest, OrderResponse, OrderType, ServerTime};
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::{info, warn};

use crate::error::{BotError, Result};
use crate::summary::{render_request_summary, render_response_summary};
use crate::validation::OrderRequest;

/// Wire payload for a validated order.
pub fn build_new_order(order: &OrderRequest) -> Result<NewOrderRequest> {
    let symbol = order.symbol.clone();
    match (order.order_type, order.price) {
        (OrderType::Market, _) => Ok(NewOrderRequest::market(symbol, order.side, order.quantity)),
        (OrderType::Limit, Some(price)) => Ok(NewOrderRequest::limit(
            symbol,
            order.side,
            order.quantity,
            price,
        )),
        (OrderType::StopMarket, Some(stop_price)) => Ok(NewOrderRequest::stop_market(
            symbol,
            order.side,
            order.quantity,
            stop_price,
        )),
        (OrderType::Limit, None) => Err(BotError::invalid_input("LIMIT orders require a price.")),
        (OrderType::StopMarket, None) => Err(BotError::invalid_input(
            "STOP_MARKET orders require a stop price (--price).",
        )),
    }
}

/// Submit `order` once and report the outcome on `out`.
///
/// Errors are returned as-is; transient HTTP failures have already been
/// retried by the client.
pub async fn place_order<W: Write>(
    client: &BinanceClient,
    order: &OrderRequest,
    out: &mut W,
) -> Result<OrderResponse> {
    let req = build_new_order(order)?;
    write!(out, "{}", render_request_summary(&req))?;

    info!(
        side = %req.side,
        order_type = %req.order_type,
        symbol = %req.symbol,
        quantity = %req.quantity,
        price = %req.display_price().map_or_else(|| "MARKET".to_string(), |p| p.to_string()),
        "placing order"
    );

    let response = client.new_order(&req).await.map_err(|err| {
        warn!(symbol = %req.symbol, error = %err, "order submission failed");
        BotError::from(err)
    })?;

    info!(
        order_id = response.order_id,
        status = %response.status.map_or("-", |s| s.as_str()),
        executed_qty = %response.executed_qty.map(|q| q.to_string()).unwrap_or_default(),
        "order placed"
    );

    writeln!(out, "{}", render_response_summary(&response))?;
    Ok(response)
}

/// Fetch server time to prove the exchange is reachable.
pub async fn check_connection<W: Write>(client: &BinanceClient, out: &mut W) -> Result<ServerTime> {
    let server_time = client.server_time().await.map_err(|err| match BotError::from(err) {
        BotError::Transport(msg) => BotError::Transport(format!("Cannot reach Binance: {msg}")),
        other => other,
    })?;

    let readable = DateTime::<Utc>::from_timestamp_millis(server_time.server_time)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string())
        .unwrap_or_default();
    info!(server_time_ms = server_time.server_time, "connectivity OK");
    writeln!(
        out,
        "  Connected to {} (server time: {} / {readable})",
        client.base_url(),
        server_time.server_time
    )?;
    Ok(server_time)
}
