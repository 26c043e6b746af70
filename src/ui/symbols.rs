//! UI symbols (markers, icons, glyphs)

/// Commit list markers
pub mod markers {
    /// Row standing for the uncommitted working copy
    pub const WORKING_COPY: char = '@';
    /// Ordinary commit row
    pub const COMMIT: char = '○';
    /// Selected row
    pub const SELECTED: char = '●';
}

/// File tree icons
pub mod tree {
    pub const EXPANDED: &str = "v ";
    pub const COLLAPSED: &str = "> ";
    pub const FILE: &str = "  ";
    pub const INDENT: &str = "  ";
}

/// Labels shown in place of missing data
pub mod labels {
    pub const WORKING_COPY: &str = "working copy";
    pub const LOADING: &str = "Loading…";
    pub const NO_COMMITS: &str = "No commits";
    pub const NO_FILES: &str = "No files";
}
