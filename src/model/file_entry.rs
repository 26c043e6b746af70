//! File entries touched by a commit

/// Change status of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    Untracked,
    /// Any other status letter git reports (type change, unmerged, ...)
    Other(String),
}

impl FileStatus {
    /// Map a git status code (`M`, `R100`, `??`, `AM`, ...) to a status
    pub fn from_code(code: &str) -> Self {
        if code == "??" {
            return Self::Untracked;
        }
        match code.chars().next() {
            Some('M') => Self::Modified,
            Some('A') => Self::Added,
            Some('D') => Self::Deleted,
            Some('R') => Self::Renamed,
            Some('C') => Self::Copied,
            _ => Self::Other(code.to_string()),
        }
    }

    /// Short code shown in the file list
    pub fn code(&self) -> &str {
        match self {
            Self::Modified => "M",
            Self::Added => "A",
            Self::Deleted => "D",
            Self::Renamed => "R",
            Self::Copied => "C",
            Self::Untracked => "??",
            Self::Other(code) => code,
        }
    }
}

/// Added/removed line counts for one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStats {
    pub additions: usize,
    pub deletions: usize,
}

/// A file touched by the commit selected in browsing mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub status: FileStatus,
    /// Line counts, when numstat data was available
    pub stats: Option<FileStats>,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
            stats: None,
        }
    }

    /// Builder-style helper used by tests and parsers
    pub fn with_stats(mut self, additions: usize, deletions: usize) -> Self {
        self.stats = Some(FileStats {
            additions,
            deletions,
        });
        self
    }
}
