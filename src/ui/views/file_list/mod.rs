//! File list panel
//!
//! Lists the files touched by the selected commit, with status colors and
//! added/removed line counts. `/` narrows the list by substring.

mod input;
mod render;

use crate::model::{FileEntry, Revision};

/// Action returned by FileListView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileListAction {
    /// No action needed
    None,
    /// Selection moved to this path
    Select(String),
    /// Open this path in single-file mode
    Open(String),
}

/// File list panel state
#[derive(Debug, Default)]
pub struct FileListView {
    entries: Vec<FileEntry>,
    /// Selected index into the filtered entries
    selected: usize,
    /// Committed filter text (case-insensitive substring)
    filter: String,
    /// Whether the filter is being typed
    filtering: bool,
    /// Sidebar revision label (`abc1234`, `FILE: abc1234`, ...)
    pub revision_label: String,
    /// Revision the listed files belong to
    revision: Option<Revision>,
    /// Shown instead of the list (loading, empty, error)
    message: Option<String>,
    scroll_offset: usize,
}

impl FileListView {
    /// Replace the entries, keeping `keep` selected when it is still listed
    pub fn set_entries(&mut self, entries: Vec<FileEntry>, keep: Option<&str>) {
        self.entries = entries;
        self.message = None;
        self.scroll_offset = 0;
        self.selected = keep
            .and_then(|path| self.visible().iter().position(|e| e.path == path))
            .unwrap_or(0);
    }

    /// Replace the list with a message
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.entries.clear();
        self.selected = 0;
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_revision(&mut self, revision: Option<Revision>, label: impl Into<String>) {
        self.revision = revision;
        self.revision_label = label.into();
    }

    pub fn revision(&self) -> Option<&Revision> {
        self.revision.as_ref()
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Entries matching the filter
    pub fn visible(&self) -> Vec<&FileEntry> {
        if self.filter.is_empty() {
            return self.entries.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.path.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.visible()
            .get(self.selected)
            .map(|entry| entry.path.as_str())
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Select a path if it is visible. Returns whether the selection changed.
    pub fn select_path(&mut self, path: &str) -> bool {
        match self.visible().iter().position(|e| e.path == path) {
            Some(index) if index != self.selected => {
                self.selected = index;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FileStatus;

    fn view() -> FileListView {
        let mut view = FileListView::default();
        view.set_entries(
            vec![
                FileEntry::new("src/main.rs", FileStatus::Modified),
                FileEntry::new("README.md", FileStatus::Added),
                FileEntry::new("src/lib.rs", FileStatus::Deleted),
            ],
            None,
        );
        view
    }

    #[test]
    fn keeps_previous_selection_when_present() {
        let mut v = view();
        v.set_entries(
            vec![
                FileEntry::new("a.txt", FileStatus::Modified),
                FileEntry::new("src/lib.rs", FileStatus::Modified),
            ],
            Some("src/lib.rs"),
        );
        assert_eq!(v.selected_path(), Some("src/lib.rs"));

        v.set_entries(vec![FileEntry::new("b.txt", FileStatus::Added)], Some("gone.rs"));
        assert_eq!(v.selected_path(), Some("b.txt"));
    }

    #[test]
    fn message_replaces_entries() {
        let mut v = view();
        v.set_message("No files changed in this commit");
        assert!(v.entries().is_empty());
        assert_eq!(v.selected_path(), None);
        assert_eq!(v.message(), Some("No files changed in this commit"));
    }

    #[test]
    fn select_path_reports_change() {
        let mut v = view();
        assert!(v.select_path("README.md"));
        assert!(!v.select_path("README.md"));
        assert!(!v.select_path("missing"));
    }
}
