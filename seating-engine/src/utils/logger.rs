//! Logging Infrastructure
//!
//! Console output (pretty for development, JSON for production) plus an
//! optional daily rotating JSON file under `{log_dir}/app`.

use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

const LOG_PREFIX: &str = "seating";

/// Days an application log file is kept
pub const LOG_RETENTION_DAYS: i64 = 14;

/// Initialize console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Initialize logging with an optional daily rotating file
///
/// `RUST_LOG` overrides `level` when set.
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// seating_engine::utils::logger::init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + file)
/// let dir = std::path::Path::new("./work_dir/logs");
/// seating_engine::utils::logger::init_logger_with_file("info", true, Some(dir))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let app_log_dir = dir.join("app");
            fs::create_dir_all(&app_log_dir)?;
            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, LOG_PREFIX);
            Some(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_target(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::sync::Mutex::new(app_log))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;
    Ok(())
}

/// Delete rotated application logs older than [`LOG_RETENTION_DAYS`]
///
/// Returns how many files were removed.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }
    let cutoff = Local::now() - chrono::Duration::days(LOG_RETENTION_DAYS);

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // Rotated files are named "seating.YYYY-MM-DD"
        if let Some(date_part) = name.strip_prefix(LOG_PREFIX).and_then(|d| d.strip_prefix('.'))
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && let Some(day_start) = Local
                .from_local_datetime(&date.and_time(NaiveTime::MIN))
                .single()
            && day_start < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }
    Ok(removed)
}
