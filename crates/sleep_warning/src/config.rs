//! The persisted mod configuration.
//!
//! Loaded once at startup, mutated only through the settings menu, and
//! written back on explicit save or reset. The on-disk format is JSON with
//! the field names players already know from the config file:
//! `FirstWarnTime`, `SecondWarnTime`, `ThirdWarnTime`, `WarningSound`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sounds::DEFAULT_SOUND;
use crate::time_format::DISABLED;

// =============================================================================
// Resource
// =============================================================================

/// Warning thresholds and the cue they play.
///
/// Thresholds are in the packed clock encoding (`hour * 100 + minute`), each
/// independently disabled by the `-1` sentinel. Nothing enforces an order
/// between them; the monitor's priority rule (third, then second, then
/// first, at most one action per clock change) determines behavior for any
/// configuration, but the escalation only reads as "more repeats closer to
/// bedtime" when first <= second <= third.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SleepWarningConfig {
    /// First threshold: one play of the warning cue. `-1` disables.
    pub first_warn_time: i32,
    /// Second threshold: two plays, half a second apart. `-1` disables.
    pub second_warn_time: i32,
    /// Third threshold: three plays. `-1` disables.
    pub third_warn_time: i32,
    /// Audio cue played for every warning.
    pub warning_sound: String,
}

impl Default for SleepWarningConfig {
    fn default() -> Self {
        Self {
            first_warn_time: 2300,
            second_warn_time: 2400,
            third_warn_time: 2500,
            warning_sound: DEFAULT_SOUND.to_string(),
        }
    }
}

impl SleepWarningConfig {
    /// Read the configuration from `path`.
    ///
    /// A missing file is not an error and yields the defaults; an unreadable
    /// or malformed file is.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };
        let config: Self = serde_json::from_str(&text)?;
        config.warn_if_misordered();
        Ok(config)
    }

    /// Read the configuration from `path`, logging and falling back to the
    /// defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "sleep_warning: failed to read {}: {e}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Write the configuration to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Warn when enabled thresholds are not in non-decreasing order.
    ///
    /// Values are never modified; this only makes a misconfiguration
    /// visible in the log.
    fn warn_if_misordered(&self) {
        let enabled: Vec<i32> = [
            self.first_warn_time,
            self.second_warn_time,
            self.third_warn_time,
        ]
        .into_iter()
        .filter(|&t| t != DISABLED)
        .collect();
        if enabled.windows(2).any(|pair| pair[0] > pair[1]) {
            warn!(
                "sleep_warning: warn times are not in ascending order \
                 (first={}, second={}, third={}); later thresholds still \
                 take priority on an exact match",
                self.first_warn_time, self.second_warn_time, self.third_warn_time
            );
        }
    }
}

/// Where the configuration is persisted.
///
/// `None` keeps the config in memory only (hosts without a writable config
/// directory, and tests); the menu's save handler then does nothing.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigPath(pub Option<PathBuf>);

// =============================================================================
// Errors
// =============================================================================

/// Errors from reading or writing the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error (permission denied, disk full, etc.)
    Io(std::io::Error),
    /// The file exists but is not valid configuration JSON.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
