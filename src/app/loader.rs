//! Background loading of history data
//!
//! Every fetch runs as an independent unit of work: in the background mode
//! one short-lived thread per request, reporting back over a channel that the
//! event loop drains between inputs. Nothing is cancelled; the app decides on
//! arrival whether a result is still wanted.
//!
//! The deferred mode queues requests instead and runs them one at a time on
//! demand, which makes ordering deterministic for tests.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, warn};

use crate::git::{GitError, HistoryProvider};
use crate::model::{Commit, DisplayMode, FileEntry, Position, Revision};

/// Source a content request was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceTag {
    Default,
    Reflog,
    Pickaxe(String),
}

/// The cursor configuration a content load belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentKey {
    pub single_file: bool,
    pub source: SourceTag,
    pub position: Position,
    pub mode: DisplayMode,
    pub path: String,
    pub revision: Revision,
}

/// Unit of work for the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    RepoCommits { limit: usize },
    FileHistory { path: String },
    Reflog { path: String, limit: usize },
    Pickaxe { path: String, term: String },
    Files { position: Position, revision: Revision },
    Content { key: ContentKey, context_lines: usize },
    Tree,
}

/// Completed unit of work, tagged with what it was issued for
#[derive(Debug)]
pub enum LoadResult {
    RepoCommits(Result<Vec<Commit>, GitError>),
    FileHistory {
        path: String,
        commits: Result<Vec<Commit>, GitError>,
    },
    Reflog {
        path: String,
        commits: Result<Vec<Commit>, GitError>,
    },
    Pickaxe {
        path: String,
        term: String,
        commits: Result<Vec<Commit>, GitError>,
    },
    Files {
        position: Position,
        revision: Revision,
        files: Result<Vec<FileEntry>, GitError>,
    },
    Content {
        key: ContentKey,
        text: Result<String, GitError>,
    },
    Tree(Result<Vec<String>, GitError>),
}

/// Run one request against the provider
pub fn execute(provider: &dyn HistoryProvider, request: LoadRequest) -> LoadResult {
    match request {
        LoadRequest::RepoCommits { limit } => {
            LoadResult::RepoCommits(provider.recent_commits(limit))
        }
        LoadRequest::FileHistory { path } => {
            let commits = provider.file_commits(&path);
            LoadResult::FileHistory { path, commits }
        }
        LoadRequest::Reflog { path, limit } => {
            let commits = provider.reflog_entries(&path, limit);
            LoadResult::Reflog { path, commits }
        }
        LoadRequest::Pickaxe { path, term } => {
            let commits = provider.search_commits(&path, &term);
            LoadResult::Pickaxe {
                path,
                term,
                commits,
            }
        }
        LoadRequest::Files { position, revision } => {
            let files = provider.files_changed_in(&revision).map(|files| {
                // Counts are decoration: a numstat failure keeps the list
                match provider.stats_for(&revision) {
                    Ok(stats) => files
                        .into_iter()
                        .map(|mut entry| {
                            entry.stats = stats.get(&entry.path).copied();
                            entry
                        })
                        .collect(),
                    Err(e) => {
                        warn!("No line counts for {revision}: {e}");
                        files
                    }
                }
            });
            LoadResult::Files {
                position,
                revision,
                files,
            }
        }
        LoadRequest::Content { key, context_lines } => {
            let text = match key.mode {
                DisplayMode::Diff | DisplayMode::Context => {
                    provider.diff_at(&key.path, &key.revision, context_lines)
                }
                DisplayMode::FullFile => provider.full_file_at(&key.path, &key.revision),
                DisplayMode::Blame => provider.blame_at(&key.path, &key.revision),
            };
            LoadResult::Content { key, text }
        }
        LoadRequest::Tree => LoadResult::Tree(provider.tree_files("HEAD")),
    }
}

enum Mode {
    Background {
        sender: Sender<LoadResult>,
        receiver: Receiver<LoadResult>,
    },
    Deferred {
        queue: VecDeque<LoadRequest>,
    },
}

/// Dispatches load requests and hands back their results
pub struct Loader {
    provider: Arc<dyn HistoryProvider>,
    mode: Mode,
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mode {
            Mode::Background { .. } => f.write_str("Loader::Background"),
            Mode::Deferred { queue } => f
                .debug_struct("Loader::Deferred")
                .field("queued", &queue.len())
                .finish(),
        }
    }
}

impl Loader {
    /// One thread per request, results over a channel
    pub fn background(provider: Arc<dyn HistoryProvider>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            provider,
            mode: Mode::Background { sender, receiver },
        }
    }

    /// Requests wait in a queue until [`Loader::try_recv`] runs them
    pub fn deferred(provider: Arc<dyn HistoryProvider>) -> Self {
        Self {
            provider,
            mode: Mode::Deferred {
                queue: VecDeque::new(),
            },
        }
    }

    pub fn dispatch(&mut self, request: LoadRequest) {
        debug!("dispatch {request:?}");
        match &mut self.mode {
            Mode::Background { sender, .. } => {
                let provider = Arc::clone(&self.provider);
                let sender = sender.clone();
                thread::spawn(move || {
                    let result = execute(provider.as_ref(), request);
                    // The receiver is gone once the app has quit
                    if sender.send(result).is_err() {
                        debug!("Load finished after shutdown");
                    }
                });
            }
            Mode::Deferred { queue } => queue.push_back(request),
        }
    }

    /// Next completed result, if any. Never blocks in background mode; runs
    /// the oldest queued request in deferred mode.
    pub fn try_recv(&mut self) -> Option<LoadResult> {
        match &mut self.mode {
            Mode::Background { receiver, .. } => receiver.try_recv().ok(),
            Mode::Deferred { queue } => {
                let request = queue.pop_front()?;
                Some(execute(self.provider.as_ref(), request))
            }
        }
    }

    /// Remove and return every queued request (deferred mode)
    pub fn take_queued(&mut self) -> Vec<LoadRequest> {
        match &mut self.mode {
            Mode::Background { .. } => Vec::new(),
            Mode::Deferred { queue } => queue.drain(..).collect(),
        }
    }

    /// Number of queued requests (deferred mode)
    pub fn queued(&self) -> usize {
        match &self.mode {
            Mode::Background { .. } => 0,
            Mode::Deferred { queue } => queue.len(),
        }
    }
}
