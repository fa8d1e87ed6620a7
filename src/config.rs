use std::{env, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use thiserror::Error;

use crate::routing::UnmatchedPolicy;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub unmatched: UnmatchedPolicy,
    pub lyrics_offset_ms: u64,
    pub restore_state: bool,
    pub state_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            unmatched: UnmatchedPolicy::default(),
            lyrics_offset_ms: crate::lyrics::sync::DEFAULT_OFFSET_MS,
            restore_state: true,
            state_file: project_directory().map(|dirs| dirs.data_local_dir().join("navigation.json")),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("TUNEROUTE_TICK_MS") {
            config.tick_rate_ms = parse_number("TUNEROUTE_TICK_MS", &value)?;
            if config.tick_rate_ms == 0 {
                return Err(invalid("TUNEROUTE_TICK_MS", &value, "must be positive".into()));
            }
        }
        if let Some(value) = lookup("TUNEROUTE_UNMATCHED") {
            config.unmatched = value
                .parse()
                .map_err(|reason| invalid("TUNEROUTE_UNMATCHED", &value, reason))?;
        }
        if let Some(value) = lookup("TUNEROUTE_LYRICS_OFFSET_MS") {
            config.lyrics_offset_ms = parse_number("TUNEROUTE_LYRICS_OFFSET_MS", &value)?;
        }
        if let Some(value) = lookup("TUNEROUTE_RESTORE") {
            config.restore_state = parse_bool("TUNEROUTE_RESTORE", &value)?;
        }
        if let Some(value) = lookup("TUNEROUTE_STATE_FILE") {
            config.state_file = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

pub fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "tuneroute", env!("CARGO_PKG_NAME"))
}

fn invalid(key: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason,
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(key, value, e.to_string()))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value, "expected a boolean".into())),
    }
}
