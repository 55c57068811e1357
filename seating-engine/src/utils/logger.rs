//! Logging Infrastructure
//!
//! Structured logging setup for both interactive (pretty) and production
//! (JSON) runs, with optional daily rotating files.

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Log file prefix inside the log directory
const LOG_FILE_PREFIX: &str = "seating";

/// Initialize the logger at `info`, console only
pub fn init_logger() -> anyhow::Result<()> {
    init_logger_with_file("info", false, None)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn"); `RUST_LOG` wins when set
/// * `json_format` - JSON lines instead of the pretty console format
/// * `log_dir` - Optional directory for daily rotating log files
///
/// # Examples
/// ```no_run
/// // Interactive session (console only)
/// seating_engine::init_logger_with_file("debug", false, None)?;
///
/// // Kiosk / production (console + file)
/// seating_engine::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    match log_dir {
        Some(dir) => {
            let file_appender = open_log_appender(Path::new(dir))?;
            let file_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::sync::Mutex::new(file_appender))
                .boxed();
            subscriber
                .with(console_layer)
                .with(file_layer)
                .try_init()?;
        }
        None => {
            subscriber.with(console_layer).try_init()?;
        }
    }

    Ok(())
}

/// Create the log directory and a daily rotating appender inside it
fn open_log_appender(log_dir: &Path) -> anyhow::Result<RollingFileAppender> {
    fs::create_dir_all(log_dir)?;
    Ok(RollingFileAppender::new(
        Rotation::DAILY,
        log_dir,
        LOG_FILE_PREFIX,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_appender_creates_directory() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested").join("logs");
        assert!(!dir.exists());

        open_log_appender(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
