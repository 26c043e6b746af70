//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Panel borders
pub mod panel {
    use super::*;

    /// Border of the focused panel
    pub const FOCUSED_BORDER: Color = Color::Green;
    /// Border of unfocused panels
    pub const BORDER: Color = Color::Reset;
}

/// Colors for the commit list
pub mod commit_list {
    use super::*;

    /// Abbreviated hash
    pub const HASH: Color = Color::Yellow;
    /// Working-copy pseudo row
    pub const WORKING_COPY: Color = Color::Green;
    /// Selected row background
    pub const SELECTED_BG: Color = Color::Rgb(0, 0x66, 0xcc);
    /// Selected row foreground
    pub const SELECTED_FG: Color = Color::White;
}

/// Colors for the file list
pub mod file_list {
    use super::*;

    pub const MODIFIED: Color = Color::Yellow;
    pub const ADDED: Color = Color::Green;
    pub const DELETED: Color = Color::Red;
    pub const RENAMED: Color = Color::Cyan;
    pub const OTHER: Color = Color::Gray;
    /// Addition count
    pub const ADDITIONS: Color = Color::Green;
    /// Deletion count
    pub const DELETIONS: Color = Color::Red;
}

/// Colors for the diff pane
pub mod diff_view {
    use super::*;

    /// Active view-mode tab
    pub const TAB_ACTIVE_BG: Color = Color::Blue;
    /// Inactive view-mode tab
    pub const TAB_INACTIVE: Color = Color::DarkGray;
    /// Source indicator (REFLOG, S:"term")
    pub const SOURCE_INDICATOR: Color = Color::Magenta;
    /// Scroll percentage footer
    pub const FOOTER: Color = Color::DarkGray;
}

/// Colors for the file tree
pub mod file_tree {
    use super::*;

    pub const DIRECTORY: Color = Color::Blue;
}

/// Mode badges in the status bar
pub mod badges {
    use super::*;

    pub const COMMITS: Color = Color::Cyan;
    pub const FILE: Color = Color::Magenta;
    pub const TREE: Color = Color::Yellow;
}
