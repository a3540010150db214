/*
[INPUT]:  Process arguments
[OUTPUT]: Raw order fields and run options
[POS]:    CLI layer - argument parsing only, field checks live in validation
[UPDATE]: When adding or renaming command-line flags
*/

use clap::Parser;

use crate::logging::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "binance-order-bot",
    version,
    about = "Place a single order on Binance USDT-M Futures (testnet by default)"
)]
pub struct Cli {
    /// Trading pair, e.g. BTCUSDT
    #[arg(long, value_name = "SYMBOL")]
    pub symbol: String,

    /// BUY or SELL
    #[arg(long, value_name = "SIDE")]
    pub side: String,

    /// MARKET, LIMIT or STOP_MARKET
    #[arg(long = "type", value_name = "TYPE")]
    pub order_type: String,

    #[arg(long, value_name = "QTY")]
    pub quantity: String,

    /// Limit price (LIMIT) or trigger price (STOP_MARKET)
    #[arg(long, value_name = "PRICE")]
    pub price: Option<String>,

    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        value_enum,
        ignore_case = true,
        default_value_t = LogLevel::Info
    )]
    pub log_level: LogLevel,

    /// Verify connectivity with a server-time call before placing the order
    #[arg(long = "check-connection")]
    pub check_connection: bool,
}
