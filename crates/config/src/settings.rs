//! Configuration structures for var settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Show the line number gutter on startup (toggled with Ctrl+L)
    #[serde(default = "default_show_line_numbers")]
    pub show_line_numbers: bool,

    /// Reserve the bottom row for the status bar
    #[serde(default = "default_status_bar")]
    pub status_bar: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (if not specified, the cache directory is used)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_show_line_numbers() -> bool {
    defaults::SHOW_LINE_NUMBERS
}

fn default_status_bar() -> bool {
    defaults::STATUS_BAR
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            show_line_numbers: default_show_line_numbers(),
            status_bar: default_status_bar(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
