//! Structured logging for the breakdown CLI.
//!
//! Console output goes to stderr so the JSON report on stdout stays clean.
//! An optional daily-rotated file copy is written through a non-blocking
//! writer.
//!
//! Environment variables:
//! - LOG_FORMAT=pretty|json (default: pretty)
//! - LOG_DIR=/path/to/logs (default: ./logs)
//! - LOG_FILE=0 disables the file copy
//! - RUN_ID=<uuid> (default: auto-generated)
//! - RUST_LOG=level (default: warn,slip_breakdown=info)

use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

const DEFAULT_FILTER: &str = "warn,slip_breakdown=info";
const LOG_FILE_NAME: &str = "slip_breakdown.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(&std::env::var("LOG_FORMAT").unwrap_or_default())
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `None` disables the file layer
    pub log_dir: Option<String>,
    pub run_id: Uuid,
    pub filter: String,
}

impl LogConfig {
    pub fn from_env() -> Self {
        let file_enabled = std::env::var("LOG_FILE")
            .map(|v| v != "0" && v.to_lowercase() != "false")
            .unwrap_or(true);
        let log_dir = file_enabled
            .then(|| std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()));

        Self {
            format: LogFormat::from_env(),
            log_dir,
            run_id: get_run_id(),
            filter: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
        }
    }
}

/// Install the global subscriber.
///
/// Returns the file writer's guard when file logging is on; hold it until
/// exit so buffered lines are flushed.
pub fn init_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = match config.format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_ansi(true)
            .compact()
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .with_ansi(false)
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    let mut guard = None;
    let file_layer = config.log_dir.as_ref().and_then(|dir| {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Failed to create log directory {}: {}", dir, e);
            return None;
        }
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
        let (writer, file_guard) = tracing_appender::non_blocking(appender);
        guard = Some(file_guard);
        Some(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_line_number(true)
                .with_ansi(false)
                .json()
                .flatten_event(true)
                .boxed(),
        )
    });

    tracing_subscriber::registry()
        .with(console_layer.and_then(file_layer).with_filter(env_filter))
        .init();

    tracing::debug!(
        run_id = %config.run_id,
        log_format = ?config.format,
        log_dir = ?config.log_dir,
        filter = %config.filter,
        "Logging initialized"
    );

    guard
}

/// Run ID from RUN_ID, or a fresh one
pub fn get_run_id() -> Uuid {
    std::env::var("RUN_ID")
        .ok()
        .and_then(|s| Uuid::parse_str(&s).ok())
        .unwrap_or_else(Uuid::new_v4)
}
