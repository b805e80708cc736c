//! Logger setup for export runs.
//!
//! Plain output is meant for a terminal watching a long scan; JSON lines are
//! for collecting the per-code `trace` skips and the final counts elsewhere.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Installs the global logger for `epsg_export`.
///
/// `RUST_LOG` directives are read first and `level` (`--log-level`) is
/// applied on top. Plain lines carry a local `HH:MM:SS` time, the target and a
/// colored level; JSON lines carry `ts` (Unix millis), `level`, `target` and
/// `msg`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` when a logger is already set.
///
/// # Examples
///
/// ```bash
/// # See every skipped code and why it was skipped
/// epsg_export --log-level trace --start 4320 --end 4330
///
/// # Machine-readable logs
/// epsg_export --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("epsg_export", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    record.target().cyan(),
                    paint_level(record.level()),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn paint_level(level: log::Level) -> ColoredString {
    let label = level.to_string();
    match level {
        log::Level::Error => label.red(),
        log::Level::Warn => label.yellow(),
        log::Level::Info => label.green(),
        log::Level::Debug => label.blue(),
        log::Level::Trace => label.purple(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_plain_format() {
        let result = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        // Another test in this binary may have installed the logger first
        assert!(result.is_ok() || matches!(result, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_init_logger_json_format() {
        let result = init_logger_with(LevelFilter::Info, LogFormat::Json);
        assert!(result.is_ok() || matches!(result, Err(InitializationError::LoggerError(_))));
    }

    #[test]
    fn test_paint_level_keeps_label() {
        assert!(paint_level(log::Level::Trace).to_string().contains("TRACE"));
        assert!(paint_level(log::Level::Warn).to_string().contains("WARN"));
    }

    #[test]
    fn test_second_init_fails_without_panicking() {
        let _ = init_logger_with(LevelFilter::Warn, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Trace, LogFormat::Plain);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
