//! revscope - terminal browser for git history
//!
//! This library provides:
//! - [`annotate`]: Line-numbered, word-highlighted diff annotation
//! - [`app`]: Application state, navigation and background loading
//! - [`config`]: Configuration file support
//! - [`git`]: git command execution and parsing
//! - [`keys`]: Key binding definitions
//! - [`logger`]: File-based logging
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod annotate;
pub mod app;
pub mod config;
pub mod git;
pub mod keys;
pub mod logger;
pub mod model;
pub mod ui;
