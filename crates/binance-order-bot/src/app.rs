/*
[INPUT]:  Parsed CLI arguments and loaded settings
[OUTPUT]: Exchange acknowledgement, or the first error encountered
[POS]:    Application layer - wiring between entry point and orchestrator
[UPDATE]: When the startup sequence changes
*/

use binance_futures_adapter::{BinanceClient, OrderResponse};
use std::io::Write;
use tracing::debug;

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::Result;
use crate::orders::{check_connection, place_order};
use crate::validation::validate_all;

/// Run one invocation: credentials, validation, optional connectivity check, order.
pub async fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> Result<OrderResponse> {
    let credentials = settings.credentials()?;
    debug!(api_key = %credentials.masked_key(), "credentials loaded");

    let order = validate_all(
        &cli.symbol,
        &cli.side,
        &cli.order_type,
        &cli.quantity,
        cli.price.as_deref(),
    )?;
    debug!(?order, "order parameters validated");

    let client = BinanceClient::with_config_and_base_url(settings.client_config(), &settings.base_url)?
        .with_credentials(credentials);

    if cli.check_connection {
        check_connection(&client, out).await?;
    }

    place_order(&client, &order, out).await
}
