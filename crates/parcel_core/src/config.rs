//! Runtime settings for database bootstrap and logging.
//!
//! Every field has a default, so an empty document deserializes into a
//! usable in-memory configuration.

use crate::logging::{default_log_level, init_logging};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub db: DbConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Database file. `None` selects an in-memory database.
    pub path: Option<PathBuf>,
    pub busy_timeout_ms: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files. `None` leaves logging off.
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            dir: None,
        }
    }
}

impl TrackerConfig {
    /// Starts file logging when a log directory is configured.
    ///
    /// Returns `Ok(false)` when no directory is set.
    pub fn init_logging(&self) -> Result<bool, String> {
        let Some(dir) = self.log.dir.as_deref() else {
            return Ok(false);
        };
        init_logging(&self.log.level, dir)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{TrackerConfig, DEFAULT_BUSY_TIMEOUT_MS};
    use crate::logging::default_log_level;

    #[test]
    fn default_config_is_in_memory_without_logging() {
        let config = TrackerConfig::default();
        assert_eq!(config.db.path, None);
        assert_eq!(config.db.busy_timeout_ms, DEFAULT_BUSY_TIMEOUT_MS);
        assert_eq!(config.log.level, default_log_level());
        assert_eq!(config.init_logging(), Ok(false));
    }
}
