use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::platform::DEFAULT_DENIALS_BEFORE_PERMANENT;
use crate::ui::mvi::DEFAULT_EVENT_CAPACITY;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub permission: PermissionConfig,
    #[serde(default)]
    pub events: EventsConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which permission the screen manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionConfig {
    /// Permission name shown in logs and handed to the platform (default: "camera").
    #[serde(default = "default_permission_name")]
    pub name: String,
}

/// One-shot event delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Events buffered per subscriber before the oldest are skipped (default: 16).
    #[serde(default = "default_event_capacity")]
    pub capacity: usize,
}

/// Behaviour of the simulated operating system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Denials after which the system prompt is suppressed (default: 2).
    #[serde(default = "default_denials_before_permanent")]
    pub denials_before_permanent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Logs are discarded when unset, since the terminal is
    /// owned by the UI.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_permission_name() -> String {
    crate::permission::Permission::CAMERA.to_string()
}

fn default_event_capacity() -> usize {
    DEFAULT_EVENT_CAPACITY
}

fn default_denials_before_permanent() -> u32 {
    DEFAULT_DENIALS_BEFORE_PERMANENT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PermissionConfig {
    fn default() -> Self {
        Self {
            name: default_permission_name(),
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            capacity: default_event_capacity(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            denials_before_permanent: default_denials_before_permanent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
