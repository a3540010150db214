/*
[INPUT]:  CLI arguments, BINANCE_* environment (optionally from .env)
[OUTPUT]: One submitted order, console summaries, process exit code
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or exit-code mapping
*/

use clap::Parser;
use dotenv::dotenv;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

use binance_order_bot::cli::Cli;
use binance_order_bot::config::Settings;
use binance_order_bot::error::BotError;
use binance_order_bot::{app, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("\n{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<(), BotError> {
    dotenv().ok();
    let settings = Settings::load().inspect_err(|err| log_startup_failure(cli, err))?;
    let log_context = logging::init(cli.log_level, &settings.log_dir)
        .map_err(|err| BotError::Configuration(format!("{err:#}")))
        .inspect_err(|err| log_startup_failure(cli, err))?;

    info!(
        log_file = %log_context.log_file().display(),
        base_url = %settings.base_url,
        "trading bot started"
    );

    match app::run(cli, &settings, &mut io::stdout()).await {
        Ok(response) => {
            info!(order_id = response.order_id, "trading bot finished");
            Ok(())
        }
        Err(err) => {
            error!(kind = err.kind(), error = %err, "order not placed");
            Err(err)
        }
    }
}

/// File logging is not up yet; report through stderr only.
fn log_startup_failure(cli: &Cli, err: &BotError) {
    if logging::init_console(cli.log_level).is_ok() {
        error!(kind = err.kind(), error = %err, "startup failed");
    }
}
