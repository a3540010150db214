/*
[INPUT]:  Raw order fields from the command line
[OUTPUT]: Validated OrderRequest or InvalidInput errors
[POS]:    Validation layer - runs before any network call
[UPDATE]: When supported order types or symbol rules change
*/

use binance_futures_adapter::{OrderType, Side};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{BotError, Result};

pub const SYMBOL_MIN_LEN: usize = 3;
pub const SYMBOL_MAX_LEN: usize = 20;

/// Order fields after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub quantity: Decimal,
    /// Present iff `order_type` is LIMIT or STOP_MARKET
    pub price: Option<Decimal>,
}

pub fn validate_symbol(symbol: &str) -> Result<String> {
    let sym = symbol.trim().to_uppercase();
    if sym.is_empty() {
        return Err(BotError::invalid_input("Symbol must not be empty."));
    }
    if !sym.chars().all(char::is_alphabetic) {
        return Err(BotError::invalid_input(format!(
            "Symbol '{sym}' must contain only letters (e.g. BTCUSDT)."
        )));
    }
    let len = sym.chars().count();
    if !(SYMBOL_MIN_LEN..=SYMBOL_MAX_LEN).contains(&len) {
        return Err(BotError::invalid_input(format!(
            "Symbol '{sym}' length must be between {SYMBOL_MIN_LEN} and {SYMBOL_MAX_LEN}."
        )));
    }
    Ok(sym)
}

pub fn validate_side(side: &str) -> Result<Side> {
    match side.trim().to_uppercase().as_str() {
        "BUY" => Ok(Side::Buy),
        "SELL" => Ok(Side::Sell),
        _ => Err(BotError::invalid_input(format!(
            "Side '{side}' is invalid. Choose from: BUY, SELL."
        ))),
    }
}

pub fn validate_order_type(order_type: &str) -> Result<OrderType> {
    match order_type.trim().to_uppercase().as_str() {
        "MARKET" => Ok(OrderType::Market),
        "LIMIT" => Ok(OrderType::Limit),
        "STOP_MARKET" => Ok(OrderType::StopMarket),
        _ => Err(BotError::invalid_input(format!(
            "Order type '{order_type}' is invalid. Choose from: LIMIT, MARKET, STOP_MARKET."
        ))),
    }
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

pub fn validate_quantity(quantity: &str) -> Result<Decimal> {
    let qty = parse_decimal(quantity).ok_or_else(|| {
        BotError::invalid_input(format!("Quantity '{quantity}' is not a valid number."))
    })?;
    if qty <= Decimal::ZERO {
        return Err(BotError::invalid_input(format!(
            "Quantity must be greater than zero, got {qty}."
        )));
    }
    Ok(qty)
}

/// MARKET orders ignore any supplied price.
pub fn validate_price(price: Option<&str>, order_type: OrderType) -> Result<Option<Decimal>> {
    if !order_type.requires_price() {
        return Ok(None);
    }

    let raw = match price.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Err(BotError::invalid_input(format!(
                "Price is required for {order_type} orders. Supply it with --price."
            )));
        }
    };
    let value = parse_decimal(raw)
        .ok_or_else(|| BotError::invalid_input(format!("Price '{raw}' is not a valid number.")))?;
    if value <= Decimal::ZERO {
        return Err(BotError::invalid_input(format!(
            "Price must be greater than zero, got {value}."
        )));
    }
    Ok(Some(value))
}

/// Validate every field in order: symbol, side, type, quantity, price.
pub fn validate_all(
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: &str,
    price: Option<&str>,
) -> Result<OrderRequest> {
    let symbol = validate_symbol(symbol)?;
    let side = validate_side(side)?;
    let order_type = validate_order_type(order_type)?;
    let quantity = validate_quantity(quantity)?;
    let price = validate_price(price, order_type)?;

    Ok(OrderRequest {
        symbol,
        side,
        order_type,
        quantity,
        price,
    })
}
