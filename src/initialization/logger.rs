//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use chrono::SecondsFormat;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};
use serde_json::json;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Plain output is one colored line per record with a local timestamp. JSON
/// output is one object per line with `ts`, `level`, `target` and `msg` keys.
///
/// The logger reads from the `RUST_LOG` environment variable first; the
/// provided `level` then overrides it for this crate.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=ip_scanner=debug,reqwest=info ip_scanner
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for noisy in QUIET_MODULES {
        builder.filter_module(noisy, LevelFilter::Info);
    }
    builder.filter_module("ip_scanner", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json!({
                    "ts": chrono::Local::now().to_rfc3339_opts(SecondsFormat::Millis, false),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "msg": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} {} {} {}",
                    chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                    paint_level(record.level()),
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;
    Ok(())
}

/// HTTP stack modules capped at info.
const QUIET_MODULES: [&str; 3] = ["reqwest", "hyper", "hyper_util"];

fn paint_level(level: Level) -> ColoredString {
    let label = format!("{:<5}", level.as_str());
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels_are_padded() {
        assert!(paint_level(Level::Info).to_string().contains("INFO "));
        assert!(paint_level(Level::Warn).to_string().contains("WARN "));
        assert!(paint_level(Level::Error).to_string().contains("ERROR"));
    }

    #[test]
    fn test_init_logger_twice_fails_without_panic() {
        // env_logger can only be installed once per process
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
