//! git command execution layer
//!
//! Defines the [`HistoryProvider`] contract the navigation layer consumes,
//! and [`GitExecutor`], which fulfills it by running the git CLI.

pub mod constants;
mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::GitExecutor;

use std::collections::HashMap;
use std::io;

use thiserror::Error;

use crate::model::{Commit, FileEntry, FileStats, Revision};

/// Errors that can occur when querying history
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,

    #[error("{path} is absent at {commit}, which is a merge of {parents} parents")]
    AbsentInMerge {
        path: String,
        commit: String,
        parents: usize,
    },
}

/// Source of repository data.
///
/// Every call may fail; empty strings and lists are valid results meaning
/// "nothing to show". Text payloads may contain color escapes.
pub trait HistoryProvider: Send + Sync {
    /// Newest-first repository history
    fn recent_commits(&self, limit: usize) -> Result<Vec<Commit>, GitError>;

    /// History of one path, following renames
    fn file_commits(&self, path: &str) -> Result<Vec<Commit>, GitError>;

    /// Reflog entries that touched `path`
    fn reflog_entries(&self, path: &str, limit: usize) -> Result<Vec<Commit>, GitError>;

    /// Commits that added or removed occurrences of `term` in `path`
    fn search_commits(&self, path: &str, term: &str) -> Result<Vec<Commit>, GitError>;

    /// Unified diff of `path` at `rev`
    fn diff_at(&self, path: &str, rev: &Revision, context_lines: usize)
    -> Result<String, GitError>;

    /// Line-numbered content of `path` at `rev`
    fn full_file_at(&self, path: &str, rev: &Revision) -> Result<String, GitError>;

    /// Blame of `path` at `rev`
    fn blame_at(&self, path: &str, rev: &Revision) -> Result<String, GitError>;

    /// Files touched at `rev` (stats not filled in)
    fn files_changed_in(&self, rev: &Revision) -> Result<Vec<FileEntry>, GitError>;

    /// Per-file added/removed line counts at `rev`
    fn stats_for(&self, rev: &Revision) -> Result<HashMap<String, FileStats>, GitError>;

    /// Every tracked path at `rev` (a commit-ish such as `HEAD`)
    fn tree_files(&self, rev: &str) -> Result<Vec<String>, GitError>;
}
