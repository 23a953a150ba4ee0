//! Environment configuration.

use std::env;

use thiserror::Error;

use crate::core::popup_layout::{PopupLayoutOptions, DEFAULT_HORIZONTAL_OFFSET};

pub const DEBUG_VAR: &str = "INPUTBAR_DEBUG";
pub const LOG_VAR: &str = "INPUTBAR_LOG";
pub const POPUP_OFFSET_VAR: &str = "INPUTBAR_POPUP_OFFSET";
pub const POPUP_MIN_WIDTH_VAR: &str = "INPUTBAR_POPUP_MIN_WIDTH";
pub const POPUP_MAX_HEIGHT_VAR: &str = "INPUTBAR_POPUP_MAX_HEIGHT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub debug: bool,
    pub log_file: Option<String>,
    pub popup_offset: usize,
    pub popup_min_width: usize,
    pub popup_max_height: Option<usize>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_file: None,
            popup_offset: DEFAULT_HORIZONTAL_OFFSET,
            popup_min_width: 0,
            popup_max_height: None,
        }
    }
}

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            debug: env_flag(DEBUG_VAR),
            log_file: env_string_opt(LOG_VAR),
            popup_offset: env_usize(POPUP_OFFSET_VAR)?.unwrap_or(DEFAULT_HORIZONTAL_OFFSET),
            popup_min_width: env_usize(POPUP_MIN_WIDTH_VAR)?.unwrap_or(0),
            popup_max_height: env_usize(POPUP_MAX_HEIGHT_VAR)?,
        })
    }

    pub fn popup_layout(&self) -> PopupLayoutOptions {
        PopupLayoutOptions {
            horizontal_offset: self.popup_offset,
            min_width: self.popup_min_width,
            max_height: self.popup_max_height,
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

fn env_usize(key: &'static str) -> Result<Option<usize>, ConfigError> {
    let Some(value) = env_string_opt(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse::<usize>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}
