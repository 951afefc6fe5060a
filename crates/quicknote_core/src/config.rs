//! Runtime configuration for front ends.
//!
//! # Responsibility
//! - Provide defaults matching the widget's stored layout and timings.
//! - Resolve overrides from `QUICKNOTE_*` environment variables.
//!
//! # Invariants
//! - Blank environment values fall back to defaults.
//! - Unparseable values are reported, never silently ignored.

use crate::logging::{default_log_level, LogLevel};
use crate::repo::note_store::DEFAULT_NOTES_KEY;
use crate::ui::message::DEFAULT_DISMISS_AFTER;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_DB_PATH: &str = "QUICKNOTE_DB_PATH";
pub const ENV_STORAGE_KEY: &str = "QUICKNOTE_STORAGE_KEY";
pub const ENV_LOG_LEVEL: &str = "QUICKNOTE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "QUICKNOTE_LOG_DIR";
pub const ENV_DISMISS_MS: &str = "QUICKNOTE_DISMISS_MS";

const DEFAULT_DB_FILE_NAME: &str = "quicknote.sqlite3";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.variable, self.message)
    }
}

impl Error for ConfigError {}

/// Resolved settings shared by the CLI and other hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickNoteConfig {
    /// SQLite file backing the key-value storage.
    pub db_path: PathBuf,
    /// Slot key holding the note collection.
    pub storage_key: String,
    pub log_level: LogLevel,
    /// File logging is enabled only when set.
    pub log_dir: Option<PathBuf>,
    /// Lifetime of feedback messages.
    pub dismiss_after: Duration,
}

impl Default for QuickNoteConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            storage_key: DEFAULT_NOTES_KEY.to_string(),
            log_level: default_log_level(),
            log_dir: None,
            dismiss_after: DEFAULT_DISMISS_AFTER,
        }
    }
}

impl QuickNoteConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(key) = read(ENV_STORAGE_KEY) {
            config.storage_key = key;
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level.parse().map_err(|message| ConfigError {
                variable: ENV_LOG_LEVEL,
                message,
            })?;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        if let Some(millis) = read(ENV_DISMISS_MS) {
            let millis = millis.parse::<u64>().map_err(|err| ConfigError {
                variable: ENV_DISMISS_MS,
                message: format!("expected milliseconds, got `{millis}`: {err}"),
            })?;
            config.dismiss_after = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{QuickNoteConfig, ENV_DISMISS_MS, ENV_LOG_LEVEL, ENV_STORAGE_KEY};
    use crate::logging::LogLevel;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_widget_layout() {
        let config = QuickNoteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.storage_key, "noteApp.notes");
        assert_eq!(config.dismiss_after, Duration::from_millis(3000));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn overrides_apply_and_blanks_fall_back() {
        let config = QuickNoteConfig::from_lookup(lookup(&[
            (ENV_STORAGE_KEY, "  "),
            (ENV_LOG_LEVEL, "WARN"),
            (ENV_DISMISS_MS, "500"),
        ]))
        .unwrap();
        assert_eq!(config.storage_key, "noteApp.notes");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.dismiss_after, Duration::from_millis(500));
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = QuickNoteConfig::from_lookup(lookup(&[(ENV_DISMISS_MS, "soon")])).unwrap_err();
        assert_eq!(err.variable, ENV_DISMISS_MS);

        let err = QuickNoteConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
        assert_eq!(err.variable, ENV_LOG_LEVEL);
    }
}
