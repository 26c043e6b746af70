//! Applying completed loads
//!
//! A result is applied only while the cursor still wants it: the same path,
//! the same source (and search term), the same position. Anything else is a
//! leftover from a superseded navigation and is dropped.

use log::{debug, warn};

use super::loader::{ContentKey, LoadResult};
use super::state::App;
use crate::git::GitError;
use crate::model::{ActiveSource, Commit, FileEntry, Position, Revision};
use crate::ui::symbols::labels;

/// Shown when a content query succeeds with nothing
pub const NO_CHANGES: &str = "No changes to display";
/// Shown when the selected commit touches no files
pub const NO_FILES_CHANGED: &str = "No files changed in this commit";
/// Shown when a history query succeeds with nothing
pub const NO_COMMITS_FOUND: &str = "No commits found";

fn error_text(err: &GitError) -> String {
    format!("Error: {err}")
}

impl App {
    /// Apply every result that has arrived. Returns whether anything was applied.
    ///
    /// With a deferred loader this runs queued requests, including the ones
    /// the applied results issue, until the queue is empty.
    pub fn drain_results(&mut self) -> bool {
        let mut applied = false;
        while let Some(result) = self.loader.try_recv() {
            self.apply(result);
            applied = true;
        }
        applied
    }

    pub fn apply(&mut self, result: LoadResult) {
        match result {
            LoadResult::RepoCommits(commits) => self.apply_repo_commits(commits),
            LoadResult::FileHistory { path, commits } => self.apply_file_history(&path, commits),
            LoadResult::Reflog { path, commits } => self.apply_reflog(&path, commits),
            LoadResult::Pickaxe {
                path,
                term,
                commits,
            } => self.apply_pickaxe(&path, &term, commits),
            LoadResult::Files {
                position,
                revision,
                files,
            } => self.apply_files(position, &revision, files),
            LoadResult::Content { key, text } => self.apply_content(key, text),
            LoadResult::Tree(paths) => self.apply_tree(paths),
        }
    }

    fn apply_repo_commits(&mut self, commits: Result<Vec<Commit>, GitError>) {
        if !self.repo.is_loading() {
            debug!("Dropping repository history: not requested");
            return;
        }
        match commits {
            Ok(commits) => {
                debug!("Loaded {} commits", commits.len());
                self.repo.replace(commits);
                self.sync_panels();
                if self.repo.revision().is_some() {
                    self.file_list.set_message(labels::LOADING);
                    self.reload_files();
                } else {
                    self.file_list.set_message(labels::NO_COMMITS);
                    if !self.cursor.single_file {
                        self.diff_view.set_message(NO_COMMITS_FOUND);
                    }
                }
            }
            Err(e) => {
                warn!("Repository history failed: {e}");
                self.repo.finish_loading();
                self.sync_panels();
                self.file_list.set_message(error_text(&e));
                if !self.cursor.single_file {
                    self.diff_view.set_message(error_text(&e));
                }
            }
        }
    }

    fn apply_file_history(&mut self, path: &str, commits: Result<Vec<Commit>, GitError>) {
        if !self.cursor.single_file
            || self.cursor.selected_path != path
            || !self.file_history.is_loading()
        {
            debug!("Dropping stale file history for {path}");
            return;
        }
        match commits {
            Ok(commits) => {
                self.file_history.replace(commits);
                self.sync_panels();
                if self.cursor.active != ActiveSource::Default {
                    return;
                }
                if self.content_key().is_some() {
                    self.reload_content();
                } else {
                    self.diff_view.set_message(NO_COMMITS_FOUND);
                }
            }
            Err(e) => {
                warn!("History of {path} failed: {e}");
                self.file_history.finish_loading();
                self.sync_panels();
                self.diff_view.set_message(error_text(&e));
            }
        }
    }

    fn apply_reflog(&mut self, path: &str, commits: Result<Vec<Commit>, GitError>) {
        let wanted = self.cursor.single_file
            && self.cursor.selected_path == path
            && matches!(&self.cursor.active, ActiveSource::Reflog(source) if source.is_loading());
        if !wanted {
            debug!("Dropping stale reflog for {path}");
            return;
        }
        match commits {
            Ok(commits) if !commits.is_empty() => {
                if let Some(source) = self.cursor.active.source_mut() {
                    source.replace(commits);
                }
                self.sync_panels();
                self.reload_content();
            }
            Ok(_) => {
                debug!("No reflog entries for {path}, back to default source");
                self.cursor.active = ActiveSource::Default;
                self.sync_panels();
                self.diff_view.set_message(format!("No reflog entries for {path}"));
            }
            Err(e) => {
                warn!("Reflog of {path} failed: {e}");
                self.cursor.active = ActiveSource::Default;
                self.sync_panels();
                self.diff_view.set_message(error_text(&e));
            }
        }
    }

    fn apply_pickaxe(&mut self, path: &str, term: &str, commits: Result<Vec<Commit>, GitError>) {
        let wanted = self.cursor.single_file
            && self.cursor.selected_path == path
            && matches!(
                &self.cursor.active,
                ActiveSource::Pickaxe { term: active, source } if active == term && source.is_loading()
            );
        if !wanted {
            debug!("Dropping stale search results for {term:?}");
            return;
        }

        match commits {
            Ok(commits) if !commits.is_empty() => {
                if let Some(source) = self.cursor.active.source_mut() {
                    source.replace(commits);
                }
                self.sync_panels();
                self.reload_content();
            }
            // Nothing found or the search failed: fall back to the default
            // source and explain why in place of the content
            Ok(_) => {
                debug!("No commits for {term:?}, back to default source");
                self.cursor.active = ActiveSource::Default;
                self.sync_panels();
                self.diff_view.set_message(format!("{NO_COMMITS_FOUND} for \"{term}\""));
            }
            Err(e) => {
                warn!("Search for {term:?} failed: {e}");
                self.cursor.active = ActiveSource::Default;
                self.sync_panels();
                self.diff_view.set_message(error_text(&e));
            }
        }
    }

    fn apply_files(
        &mut self,
        position: Position,
        revision: &Revision,
        files: Result<Vec<FileEntry>, GitError>,
    ) {
        if self.repo.position() != position || self.repo.revision().as_ref() != Some(revision) {
            debug!("Dropping stale file list for {revision}");
            return;
        }
        let browsing = !self.cursor.single_file;

        match files {
            Ok(files) if files.is_empty() => {
                self.file_list.set_message(NO_FILES_CHANGED);
                if browsing {
                    self.cursor.selected_path.clear();
                    self.sync_panels();
                    self.diff_view.set_message(NO_FILES_CHANGED);
                }
            }
            Ok(files) => {
                let keep = self.cursor.selected_path.clone();
                self.file_list.set_entries(files, Some(&keep));
                if browsing {
                    self.cursor.selected_path = self
                        .file_list
                        .selected_path()
                        .unwrap_or_default()
                        .to_string();
                    self.sync_panels();
                    self.reload_content();
                }
            }
            Err(e) => {
                warn!("Files of {revision} failed: {e}");
                self.file_list.set_message(error_text(&e));
                if browsing {
                    self.diff_view.set_message(error_text(&e));
                }
            }
        }
    }

    fn apply_content(&mut self, key: ContentKey, text: Result<String, GitError>) {
        if self.content_key().as_ref() != Some(&key) {
            debug!("Dropping stale content for {} at {}", key.path, key.revision);
            return;
        }

        match text {
            Ok(text) if text.is_empty() => self.diff_view.set_message(NO_CHANGES),
            Ok(text) if key.mode.is_diff() => self.diff_view.set_diff(Some(key.revision), text),
            Ok(text) => self.diff_view.set_plain(Some(key.revision), text),
            Err(e) => {
                warn!("Content of {} at {} failed: {e}", key.path, key.revision);
                self.diff_view.set_message(error_text(&e));
            }
        }
    }

    fn apply_tree(&mut self, paths: Result<Vec<String>, GitError>) {
        if !self.show_tree {
            debug!("Dropping file tree: tree closed");
            return;
        }
        match paths {
            Ok(paths) => self.file_tree.set_files(&paths),
            Err(e) => {
                warn!("File tree failed: {e}");
                self.file_tree.set_message(error_text(&e));
            }
        }
    }
}
