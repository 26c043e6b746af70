//! File-based logging using simplelog
//!
//! The terminal belongs to the UI, so log records go to a file:
//! `<cache dir>/revscope/revscope.log` unless `--log-file` says otherwise.
//! The level comes from `RUST_LOG` (default `info`).

use std::fs::File;
use std::path::PathBuf;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Default log file location
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("revscope")
        .join("revscope.log")
}

/// Map a `RUST_LOG` value to a level filter
pub fn level_from(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_lowercase).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize file-based logging.
///
/// Returns the log file path, or `None` when the file cannot be created (the
/// application then runs without logging).
pub fn init(path: Option<PathBuf>) -> Option<PathBuf> {
    let path = path.unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    let file = File::create(&path).ok()?;

    let level = level_from(std::env::var("RUST_LOG").ok().as_deref());
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c)
        .build();

    WriteLogger::init(level, config, file).ok()?;
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(level_from(Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(level_from(Some("warn")), LevelFilter::Warn);
        assert_eq!(level_from(Some("off")), LevelFilter::Off);
    }

    #[test]
    fn unknown_or_missing_level_is_info() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("revscope=debug")), LevelFilter::Info);
    }

    #[test]
    fn default_path_ends_with_app_file() {
        assert!(default_log_path().ends_with("revscope/revscope.log"));
    }
}
