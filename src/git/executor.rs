//! git command executor
//!
//! Runs git commands in the repository's top-level directory and implements
//! [`HistoryProvider`] on top of them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, warn};

use super::constants::{self, commands, errors, flags, formats, special};
use super::parser::Parser;
use super::{GitError, HistoryProvider};
use crate::model::{Commit, FileEntry, FileStats, Revision};

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Repository top level; every command runs here
    root: PathBuf,
}

impl GitExecutor {
    /// Open the repository containing `path`.
    ///
    /// Fails with [`GitError::NotARepository`] outside a work tree.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let probe = Self {
            root: path.as_ref().to_path_buf(),
        };
        let toplevel = probe.run(&[commands::REV_PARSE, flags::SHOW_TOPLEVEL])?;
        Ok(Self {
            root: PathBuf::from(toplevel.trim()),
        })
    }

    /// Repository top-level directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run a git command and return its stdout
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        self.run_accepting(args, &[])
    }

    /// Run a git command, treating the given non-zero exit codes as success
    fn run_accepting(&self, args: &[&str], accepted: &[i32]) -> Result<String, GitError> {
        debug!("git {}", args.join(" "));

        let output = Command::new(constants::GIT_COMMAND)
            .arg(flags::NO_PAGER)
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::GitNotFound
                } else {
                    GitError::IoError(e)
                }
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        if output.status.success() || accepted.contains(&exit_code) {
            return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if stderr.contains(errors::NOT_A_REPO) {
            return Err(GitError::NotARepository);
        }
        Err(GitError::CommandFailed { stderr, exit_code })
    }

    fn log(&self, args: &[&str]) -> Result<Vec<Commit>, GitError> {
        match self.run(args) {
            Ok(output) => Ok(Parser::parse_log(&output)),
            // Unborn branch: no history yet, not a failure
            Err(GitError::CommandFailed { ref stderr, .. })
                if stderr.contains(errors::NO_COMMITS_YET) =>
            {
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// `git show <rev>:<path>`
    fn show_blob(&self, rev: &str, path: &str) -> Result<String, GitError> {
        let spec = format!("{rev}:{path}");
        self.run(&[commands::SHOW, &spec])
    }

    /// Parents of a commit, in order
    fn parents_of(&self, hash: &str) -> Result<Vec<String>, GitError> {
        let output = self.run(&[commands::REV_LIST, flags::PARENTS, flags::MAX_COUNT, "1", hash])?;
        Ok(Parser::parse_parents(&output))
    }

    /// Whether git tracks `path` in the index
    fn is_tracked(&self, path: &str) -> Result<bool, GitError> {
        let output = self.run(&[commands::LS_FILES, flags::PATH_SEPARATOR, path])?;
        Ok(!output.trim().is_empty())
    }

    /// Working-copy diff against HEAD, or the whole file as added when untracked
    fn working_copy_diff(&self, path: &str, context: &str) -> Result<String, GitError> {
        let diff = self.run(&[
            commands::DIFF,
            flags::COLOR_ALWAYS,
            context,
            special::HEAD,
            flags::PATH_SEPARATOR,
            path,
        ])?;
        if !diff.is_empty() || self.is_tracked(path)? || !self.root.join(path).exists() {
            return Ok(diff);
        }

        self.run_accepting(
            &[
                commands::DIFF,
                flags::COLOR_ALWAYS,
                context,
                flags::NO_INDEX,
                special::DEV_NULL,
                path,
            ],
            &[special::DIFF_FOUND_EXIT_CODE],
        )
    }
}

impl HistoryProvider for GitExecutor {
    fn recent_commits(&self, limit: usize) -> Result<Vec<Commit>, GitError> {
        let limit = limit.to_string();
        self.log(&[
            commands::LOG,
            flags::NO_COLOR,
            formats::ONELINE,
            flags::MAX_COUNT,
            &limit,
        ])
    }

    fn file_commits(&self, path: &str) -> Result<Vec<Commit>, GitError> {
        self.log(&[
            commands::LOG,
            flags::NO_COLOR,
            formats::ONELINE,
            flags::FOLLOW,
            flags::PATH_SEPARATOR,
            path,
        ])
    }

    fn reflog_entries(&self, path: &str, limit: usize) -> Result<Vec<Commit>, GitError> {
        let limit = limit.to_string();
        self.log(&[
            commands::LOG,
            flags::NO_COLOR,
            flags::WALK_REFLOGS,
            formats::REFLOG,
            flags::MAX_COUNT,
            &limit,
            flags::PATH_SEPARATOR,
            path,
        ])
    }

    fn search_commits(&self, path: &str, term: &str) -> Result<Vec<Commit>, GitError> {
        self.log(&[
            commands::LOG,
            flags::NO_COLOR,
            formats::ONELINE,
            flags::PICKAXE,
            term,
            flags::PATH_SEPARATOR,
            path,
        ])
    }

    fn diff_at(
        &self,
        path: &str,
        rev: &Revision,
        context_lines: usize,
    ) -> Result<String, GitError> {
        let context = format!("-U{context_lines}");
        match rev {
            Revision::WorkingCopy => self.working_copy_diff(path, &context),
            Revision::Commit(hash) => self.run(&[
                commands::SHOW,
                flags::COLOR_ALWAYS,
                &context,
                hash,
                flags::PATH_SEPARATOR,
                path,
            ]),
        }
    }

    fn full_file_at(&self, path: &str, rev: &Revision) -> Result<String, GitError> {
        let hash = match rev {
            Revision::WorkingCopy => {
                let content = std::fs::read_to_string(self.root.join(path))?;
                return Ok(Parser::number_lines(&content));
            }
            Revision::Commit(hash) => hash,
        };

        let content = match self.show_blob(hash, path) {
            Ok(content) => content,
            Err(err) => {
                // Deleted at this commit: read it from the parent, but only
                // when there is exactly one parent to choose
                let Ok(parents) = self.parents_of(hash) else {
                    return Err(err);
                };
                match parents.as_slice() {
                    [] => return Err(err),
                    [parent] => {
                        debug!("{path} absent at {hash}, reading from parent {parent}");
                        self.show_blob(parent, path)?
                    }
                    _ => {
                        warn!("{path} absent at merge commit {hash}");
                        return Err(GitError::AbsentInMerge {
                            path: path.to_string(),
                            commit: hash.clone(),
                            parents: parents.len(),
                        });
                    }
                }
            }
        };

        Ok(Parser::number_lines(&content))
    }

    fn blame_at(&self, path: &str, rev: &Revision) -> Result<String, GitError> {
        match rev {
            Revision::WorkingCopy => self.run(&[commands::BLAME, flags::PATH_SEPARATOR, path]),
            Revision::Commit(hash) => {
                self.run(&[commands::BLAME, hash, flags::PATH_SEPARATOR, path])
            }
        }
    }

    fn files_changed_in(&self, rev: &Revision) -> Result<Vec<FileEntry>, GitError> {
        match rev {
            Revision::WorkingCopy => {
                let output = self.run(&[commands::STATUS, flags::PORCELAIN])?;
                Ok(Parser::parse_porcelain(&output))
            }
            Revision::Commit(hash) => {
                let output = self.run(&[
                    commands::DIFF_TREE,
                    flags::NO_COMMIT_ID,
                    flags::NAME_STATUS,
                    flags::RECURSIVE,
                    flags::ROOT,
                    hash,
                ])?;
                Ok(Parser::parse_name_status(&output))
            }
        }
    }

    fn stats_for(&self, rev: &Revision) -> Result<HashMap<String, FileStats>, GitError> {
        let output = match rev {
            Revision::WorkingCopy => {
                self.run(&[commands::DIFF, flags::NUMSTAT, special::HEAD])?
            }
            Revision::Commit(hash) => self.run(&[
                commands::DIFF_TREE,
                flags::NUMSTAT,
                flags::NO_COMMIT_ID,
                flags::RECURSIVE,
                flags::ROOT,
                hash,
            ])?,
        };
        Ok(Parser::parse_numstat(&output))
    }

    fn tree_files(&self, rev: &str) -> Result<Vec<String>, GitError> {
        let output = self.run(&[commands::LS_TREE, flags::RECURSIVE, flags::NAME_ONLY, rev])?;
        Ok(Parser::parse_paths(&output))
    }
}
