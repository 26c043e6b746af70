//! Configuration file support
//!
//! Config file location: `~/.config/revscope/config.toml` (XDG_CONFIG_HOME)
//!
//! ```toml
//! [history]
//! commit_limit = 100
//! reflog_limit = 100
//! working_copy = true
//!
//! [diff]
//! context_lines = 3
//! expanded_context_lines = 10
//! show_description = false
//!
//! [ui]
//! sidebar_percent = 20
//! ```

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

/// Errors loading an explicitly requested config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// History queries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Commits listed in browsing mode
    pub commit_limit: usize,
    /// Reflog entries fetched per file
    pub reflog_limit: usize,
    /// Offer the uncommitted working copy as the newest position
    pub working_copy: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            commit_limit: 100,
            reflog_limit: 100,
            working_copy: true,
        }
    }
}

/// Diff rendering
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Context lines in the `diff` display mode
    pub context_lines: usize,
    /// Context lines in the `ctx` display mode
    pub expanded_context_lines: usize,
    /// Start with the commit description visible above the hunks
    pub show_description: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            context_lines: 3,
            expanded_context_lines: 10,
            show_description: false,
        }
    }
}

/// Layout
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Width of the left column, in percent of the terminal
    pub sidebar_percent: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_percent: 20,
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,
    pub diff: DiffConfig,
    pub ui: UiConfig,
}

impl Config {
    /// All possible config file paths in priority order
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("revscope").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("revscope").join("config.toml"));
        }

        // ~/Library/Application Support on macOS
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("revscope").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        paths
    }

    /// First existing config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_paths().into_iter().find(|p| p.exists())
    }

    /// Load from the standard locations.
    ///
    /// Returns the default config if no file exists or it cannot be parsed.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("{e}; using defaults");
            Self::default()
        })
    }

    /// Load a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.ui.sidebar_percent = config.ui.sidebar_percent.clamp(10, 60);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
            [diff]
            context_lines = 5

            [history]
            working_copy = false
            "#,
        )
        .unwrap();
        assert_eq!(config.diff.context_lines, 5);
        assert_eq!(config.diff.expanded_context_lines, 10);
        assert!(!config.history.working_copy);
        assert_eq!(config.history.commit_limit, 100);
    }

    #[test]
    fn sidebar_percent_is_clamped() {
        let config = Config::parse("[ui]\nsidebar_percent = 95\n").unwrap();
        assert_eq!(config.ui.sidebar_percent, 60);
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(Config::parse("[history]\ncommit_limit = \"many\"\n").is_err());
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[history]\nreflog_limit = 7\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.history.reflog_limit, 7);
    }
}
