//! git output parser
//!
//! Parses the output of git plumbing and porcelain commands into models.
//! Parsers never fail: lines they cannot interpret are skipped.

use std::collections::HashMap;

use crate::model::{Commit, FileEntry, FileStats, FileStatus};

/// Parser for git command output
pub struct Parser;

impl Parser {
    /// Parse `git log --format="%h %s"` (or the reflog variant) output
    pub fn parse_log(output: &str) -> Vec<Commit> {
        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let (hash, message) = line.split_once(' ').unwrap_or((line, ""));
                Commit::new(hash, message.trim_start())
            })
            .collect()
    }

    /// Parse `git diff-tree --name-status -r` output
    ///
    /// Format: `<status>\t<path>` or `<status>\t<old>\t<new>` for renames and
    /// copies, in which case the new path is used.
    pub fn parse_name_status(output: &str) -> Vec<FileEntry> {
        output
            .lines()
            .filter_map(|line| {
                let mut fields = line.split('\t');
                let code = fields.next()?.trim();
                let path = fields.last()?;
                if code.is_empty() || path.is_empty() {
                    return None;
                }
                Some(FileEntry::new(path, FileStatus::from_code(code)))
            })
            .collect()
    }

    /// Parse `--numstat` output into per-path counts
    ///
    /// Binary files report `-` for both counts; they are recorded as zero.
    pub fn parse_numstat(output: &str) -> HashMap<String, FileStats> {
        output
            .lines()
            .filter_map(|line| {
                let mut fields = line.splitn(3, '\t');
                let additions = fields.next()?;
                let deletions = fields.next()?;
                let path = fields.next()?;
                if path.is_empty() {
                    return None;
                }
                Some((
                    path.to_string(),
                    FileStats {
                        additions: additions.trim().parse().unwrap_or(0),
                        deletions: deletions.trim().parse().unwrap_or(0),
                    },
                ))
            })
            .collect()
    }

    /// Parse `git status --porcelain` output
    ///
    /// Format: `XY <path>`, with renames reported as `XY <old> -> <new>`.
    pub fn parse_porcelain(output: &str) -> Vec<FileEntry> {
        output
            .lines()
            .filter_map(|line| {
                let code = line.get(..2)?.trim();
                let path = line.get(3..)?.trim();
                if code.is_empty() || path.is_empty() {
                    return None;
                }
                let path = path
                    .split_once(" -> ")
                    .map_or(path, |(_, renamed)| renamed);
                Some(FileEntry::new(path, FileStatus::from_code(code)))
            })
            .collect()
    }

    /// Parse a newline-separated path listing (`ls-tree --name-only`)
    pub fn parse_paths(output: &str) -> Vec<String> {
        output
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parse `git rev-list --parents -n 1 <commit>`: the parents of the commit
    pub fn parse_parents(output: &str) -> Vec<String> {
        output
            .split_whitespace()
            .skip(1)
            .map(str::to_string)
            .collect()
    }

    /// Prefix each line of file content with a right-aligned line number
    pub fn number_lines(content: &str) -> String {
        content
            .lines()
            .enumerate()
            .map(|(i, line)| format!("{:6}\t{}\n", i + 1, line))
            .collect()
    }
}
