//! Commit sources and positions within them
//!
//! A source is an ordered, newest-first list of commits produced by one
//! history query. The navigation cursor always points into exactly one of
//! them through [`ActiveSource`].

use super::{Commit, Revision};

/// Position inside a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The uncommitted working copy, one step newer than index 0
    WorkingCopy,
    /// Index into the commit list (0 = newest)
    Commit(usize),
}

impl Default for Position {
    fn default() -> Self {
        Self::Commit(0)
    }
}

/// Ordered commit list with the cursor position inside it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSource {
    commits: Vec<Commit>,
    position: Position,
    loading: bool,
    working_copy: bool,
}

impl CommitSource {
    /// Create an empty, idle source
    pub fn new(working_copy: bool) -> Self {
        Self {
            working_copy,
            ..Self::default()
        }
    }

    /// Create an empty source that is waiting for its query
    pub fn loading(working_copy: bool) -> Self {
        Self {
            loading: true,
            ..Self::new(working_copy)
        }
    }

    /// Drop the current list and wait for a new query result
    pub fn begin_loading(&mut self) {
        self.commits.clear();
        self.position = Position::default();
        self.loading = true;
    }

    /// Replace the list with a fresh query result and reset to the newest entry.
    ///
    /// An empty result on a source that supports the working copy lands on it.
    pub fn replace(&mut self, commits: Vec<Commit>) {
        self.position = if commits.is_empty() && self.working_copy {
            Position::WorkingCopy
        } else {
            Position::Commit(0)
        };
        self.commits = commits;
        self.loading = false;
    }

    /// Stop waiting without changing the list (query failed)
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn supports_working_copy(&self) -> bool {
        self.working_copy
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Commit under the cursor (None at the working copy or on an empty list)
    pub fn current(&self) -> Option<&Commit> {
        match self.position {
            Position::WorkingCopy => None,
            Position::Commit(index) => self.commits.get(index),
        }
    }

    /// Revision to query for the current position
    pub fn revision(&self) -> Option<Revision> {
        match self.position {
            Position::WorkingCopy if self.working_copy => Some(Revision::WorkingCopy),
            Position::WorkingCopy => None,
            Position::Commit(index) => self
                .commits
                .get(index)
                .map(|commit| Revision::commit(commit.hash.clone())),
        }
    }

    /// Whether the position is addressable: a listed commit or the working
    /// copy where supported.
    pub fn position_in_bounds(&self) -> bool {
        match self.position {
            Position::WorkingCopy => self.working_copy,
            Position::Commit(index) => index < self.commits.len(),
        }
    }

    /// Move one step towards the newest entry. Returns false at the boundary.
    pub fn step_newer(&mut self) -> bool {
        match self.position {
            Position::Commit(0) if self.working_copy => {
                self.position = Position::WorkingCopy;
                true
            }
            Position::Commit(index) if index > 0 => {
                self.position = Position::Commit(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Move one step towards the oldest entry. Returns false at the boundary.
    pub fn step_older(&mut self) -> bool {
        match self.position {
            Position::WorkingCopy if !self.commits.is_empty() => {
                self.position = Position::Commit(0);
                true
            }
            Position::Commit(index) if index + 1 < self.commits.len() => {
                self.position = Position::Commit(index + 1);
                true
            }
            _ => false,
        }
    }

    /// Jump to an index. Returns false when out of range or unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.commits.len() || self.position == Position::Commit(index) {
            return false;
        }
        self.position = Position::Commit(index);
        true
    }

    /// Jump to the working copy. Returns false when unsupported or unchanged.
    pub fn select_working_copy(&mut self) -> bool {
        if !self.working_copy || self.position == Position::WorkingCopy {
            return false;
        }
        self.position = Position::WorkingCopy;
        true
    }
}

/// Kind of commit source the cursor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Repository history in browsing mode, file history in single-file mode
    #[default]
    Default,
    Reflog,
    Pickaxe,
}

/// The alternate source currently replacing the default one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveSource {
    #[default]
    Default,
    Reflog(CommitSource),
    Pickaxe { term: String, source: CommitSource },
}

impl ActiveSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Default => SourceKind::Default,
            Self::Reflog(_) => SourceKind::Reflog,
            Self::Pickaxe { .. } => SourceKind::Pickaxe,
        }
    }

    /// Search term of an active pickaxe source
    pub fn term(&self) -> Option<&str> {
        match self {
            Self::Pickaxe { term, .. } => Some(term),
            _ => None,
        }
    }

    /// Commit list owned by a non-default source
    pub fn source(&self) -> Option<&CommitSource> {
        match self {
            Self::Default => None,
            Self::Reflog(source) | Self::Pickaxe { source, .. } => Some(source),
        }
    }

    pub fn source_mut(&mut self) -> Option<&mut CommitSource> {
        match self {
            Self::Default => None,
            Self::Reflog(source) | Self::Pickaxe { source, .. } => Some(source),
        }
    }

    /// Short label for the diff header and sidebar (`REFLOG`, `S:"term"`)
    pub fn indicator(&self) -> Option<String> {
        match self {
            Self::Default => None,
            Self::Reflog(_) => Some("REFLOG".to_string()),
            Self::Pickaxe { term, .. } => Some(format!("S:\"{term}\"")),
        }
    }
}
