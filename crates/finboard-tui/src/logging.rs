use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use finboard_core::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "finboard.log";

enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Set up tracing when `RUST_LOG` is set. Returns whether a subscriber was
/// installed.
///
/// The interactive TUI owns the terminal, so its logs go to a file in the
/// config directory. One-shot commands log to stderr.
pub fn init(interactive: bool) -> Result<bool> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(false);
    }

    let target = if interactive {
        LogTarget::File(log_file_path()?)
    } else {
        LogTarget::Stderr
    };
    install(EnvFilter::from_default_env(), target)
}

fn install(env_filter: EnvFilter, target: LogTarget) -> Result<bool> {
    let init_result = match target {
        LogTarget::File(log_path) => {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false); // No ANSI codes in file

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
        }
        LogTarget::Stderr => {
            let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
        }
    };

    match init_result {
        Ok(()) => Ok(true),
        Err(err) => {
            tracing::warn!(error = %err, "tracing already initialized; skipping setup");
            Ok(false)
        }
    }
}

pub fn log_file_path() -> Result<PathBuf> {
    Ok(Config::get_config_dir()?.join(LOG_FILE_NAME))
}
