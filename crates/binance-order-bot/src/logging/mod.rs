/*
[INPUT]:  Console level chosen on the command line, log directory from settings
[OUTPUT]: Global tracing subscriber with stderr and rotating-file layers
[POS]:    Logging layer - installed once at process startup
[UPDATE]: When changing log format, levels, or file rotation
*/

mod rotating;

pub use rotating::RotatingFileWriter;

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

pub const LOG_FILE_NAME: &str = "binance-order-bot.log";
pub const MAX_LOG_BYTES: u64 = 5 * 1024 * 1024;
pub const MAX_LOG_BACKUPS: usize = 3;

const FILE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const NOISY_TARGETS: [&str; 4] = ["hyper", "h2", "rustls", "reqwest"];

/// Console verbosity accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[default]
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }

    /// Filter directives for the console; HTTP stack targets never go below warn.
    pub fn console_directives(self) -> String {
        let mut directives = self.as_directive().to_string();
        if matches!(self, Self::Debug | Self::Info) {
            for target in NOISY_TARGETS {
                directives.push_str(&format!(",{target}=warn"));
            }
        }
        directives
    }
}

/// Keeps the file writer alive; dropping it flushes pending lines.
#[derive(Debug)]
pub struct LoggingContext {
    log_file: PathBuf,
    _guard: WorkerGuard,
}

impl LoggingContext {
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}

fn file_directives() -> String {
    let mut directives = String::from("debug");
    for target in NOISY_TARGETS {
        directives.push_str(&format!(",{target}=info"));
    }
    directives
}

/// Install the global subscriber.
///
/// Console output goes to stderr at `level`; the file under `log_dir`
/// always records DEBUG and above.
pub fn init(level: LogLevel, log_dir: &Path) -> Result<LoggingContext> {
    let log_file = log_dir.join(LOG_FILE_NAME);
    let writer = RotatingFileWriter::new(&log_file, MAX_LOG_BYTES, MAX_LOG_BACKUPS)
        .with_context(|| format!("open log file {}", log_file.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(writer);

    let file_filter = EnvFilter::try_new(file_directives()).context("invalid file log level")?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_timer(ChronoLocal::new(FILE_TIME_FORMAT.to_string()))
        .with_ansi(false)
        .with_target(true)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(console_layer::<Registry>(level)?)
        .with(file_layer)
        .try_init()
        .context("initialize tracing subscriber")?;

    Ok(LoggingContext {
        log_file,
        _guard: guard,
    })
}

/// Install a stderr-only subscriber, for failures before `init` can run.
pub fn init_console(level: LogLevel) -> Result<()> {
    tracing_subscriber::registry()
        .with(console_layer::<Registry>(level)?)
        .try_init()
        .context("initialize tracing subscriber")
}

fn console_layer<S>(level: LogLevel) -> Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let filter =
        EnvFilter::try_new(level.console_directives()).context("invalid console log level")?;
    Ok(tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(filter))
}
