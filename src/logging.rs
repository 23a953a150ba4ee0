//! Diagnostic logging.
//!
//! The widget runs inside a full-screen terminal, so log output never goes to stdout or stderr.
//! [`init`] installs a global `tracing` subscriber that appends to the file named by
//! `INPUTBAR_LOG`.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive(config: &EnvConfig) -> &'static str {
    if config.debug {
        "inputbar=trace"
    } else {
        "inputbar=info"
    }
}

fn filter_for(config: &EnvConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(config)))
}

/// Installs the file subscriber. Returns `Ok(false)` when no log file is configured.
pub fn init(config: &EnvConfig) -> Result<bool, LoggingError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };
    let path = PathBuf::from(path);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::Io {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::debug!(target: "inputbar::logging", path = %path.display(), "logging initialized");
    Ok(true)
}
