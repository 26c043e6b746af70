//! Cursor operations
//!
//! Each operation mutates the cursor, re-derives the panels and issues at
//! most one load. Preconditions that do not hold make the call a no-op.

use log::debug;
use ratatui::style::Style;
use tui_textarea::TextArea;

use super::loader::LoadRequest;
use super::state::{App, Focus};
use crate::model::{ActiveSource, CommitSource, DisplayMode, SourceKind};
use crate::ui::symbols::labels;

impl App {
    // =========================================================================
    // Single-file mode
    // =========================================================================

    /// Follow the history of one path
    pub fn enter_single_file_mode(&mut self, path: &str) {
        if path.is_empty() || self.cursor.single_file {
            return;
        }
        debug!("Entering single-file mode for {path}");

        self.cursor.single_file = true;
        self.cursor.active = ActiveSource::Default;
        self.cursor.display_mode = DisplayMode::Diff;
        self.cursor.selected_path = path.to_string();
        self.file_history.begin_loading();
        self.show_tree = false;
        self.focus = Focus::Diff;

        self.diff_view.set_message(labels::LOADING);
        self.loader.dispatch(LoadRequest::FileHistory {
            path: path.to_string(),
        });
        self.sync_panels();
    }

    /// Back to browsing the repository history
    pub fn exit_single_file_mode(&mut self) {
        if !self.cursor.single_file {
            return;
        }
        debug!("Leaving single-file mode");

        self.cursor.single_file = false;
        self.cursor.display_mode = DisplayMode::Diff;
        self.cursor.active = ActiveSource::Default;
        self.file_history = CommitSource::new(self.config.history.working_copy);
        self.focus = Focus::CommitList;
        if let Some(path) = self.file_list.selected_path() {
            self.cursor.selected_path = path.to_string();
        }

        self.sync_panels();
        self.reload_content();
    }

    /// Switch how the selected file is shown
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if !self.cursor.single_file || self.cursor.display_mode == mode {
            return;
        }
        self.cursor.display_mode = mode;
        self.sync_panels();
        self.reload_content();
    }

    /// Next mode in the diff → ctx → full → blame cycle
    pub fn cycle_display_mode(&mut self) {
        self.set_display_mode(self.cursor.display_mode.next());
    }

    // =========================================================================
    // Sources
    // =========================================================================

    /// Switch to another commit source for the selected path, replacing any
    /// active one. Pickaxe needs a non-empty term.
    pub fn activate_source(&mut self, kind: SourceKind, term: Option<&str>) {
        if !self.cursor.single_file {
            return;
        }
        let path = self.cursor.selected_path.clone();

        match kind {
            SourceKind::Default => {
                self.deactivate_source();
                return;
            }
            SourceKind::Reflog => {
                self.cursor.active = ActiveSource::Reflog(CommitSource::loading(false));
                self.loader.dispatch(LoadRequest::Reflog {
                    path,
                    limit: self.config.history.reflog_limit,
                });
            }
            SourceKind::Pickaxe => {
                let Some(term) = term.filter(|t| !t.is_empty()) else {
                    return;
                };
                self.cursor.active = ActiveSource::Pickaxe {
                    term: term.to_string(),
                    source: CommitSource::loading(false),
                };
                self.loader.dispatch(LoadRequest::Pickaxe {
                    path,
                    term: term.to_string(),
                });
            }
        }

        debug!("Activated {:?} source", kind);
        self.diff_view.set_message(labels::LOADING);
        self.sync_panels();
    }

    /// Return to the default source at its current position
    pub fn deactivate_source(&mut self) {
        if self.cursor.active == ActiveSource::Default {
            return;
        }
        self.cursor.active = ActiveSource::Default;
        self.sync_panels();
        self.reload_content();
    }

    /// `r`: reflog on, or back to the default source
    pub(crate) fn toggle_reflog(&mut self) {
        if self.cursor.source_kind() == SourceKind::Reflog {
            self.deactivate_source();
        } else {
            self.activate_source(SourceKind::Reflog, None);
        }
    }

    /// `s`: ask for a search term, or leave an active search
    pub(crate) fn toggle_pickaxe(&mut self) {
        if !self.cursor.single_file {
            return;
        }
        if self.cursor.source_kind() == SourceKind::Pickaxe {
            self.deactivate_source();
        } else {
            let mut textarea = TextArea::default();
            textarea.set_placeholder_text("search term");
            textarea.set_cursor_line_style(Style::default());
            self.search_input = Some(textarea);
        }
    }

    // =========================================================================
    // Position
    // =========================================================================

    /// One step towards the newest entry of the active source
    pub fn step_newer(&mut self) -> bool {
        let moved = self.current_source_mut().step_newer();
        if moved {
            self.on_position_changed();
        }
        moved
    }

    /// One step towards the oldest entry of the active source
    pub fn step_older(&mut self) -> bool {
        let moved = self.current_source_mut().step_older();
        if moved {
            self.on_position_changed();
        }
        moved
    }

    /// Jump to an index of the active source
    pub fn select_commit(&mut self, index: usize) -> bool {
        let moved = self.current_source_mut().select(index);
        if moved {
            self.on_position_changed();
        }
        moved
    }

    /// Jump to a commit-list row (row 0 is the working copy where supported)
    pub(crate) fn select_row(&mut self, row: usize) -> bool {
        let source = self.current_source_mut();
        let moved = match (source.supports_working_copy(), row) {
            (true, 0) => source.select_working_copy(),
            (true, row) => source.select(row - 1),
            (false, row) => source.select(row),
        };
        if moved {
            self.on_position_changed();
        }
        moved
    }

    /// Esc while browsing: back to the newest commit
    pub fn return_to_latest(&mut self) {
        if self.cursor.single_file {
            return;
        }
        self.select_commit(0);
    }

    fn on_position_changed(&mut self) {
        self.sync_panels();
        if self.cursor.single_file {
            self.reload_content();
        } else {
            self.diff_view.set_message(labels::LOADING);
            self.reload_files();
        }
    }

    /// Show another file of the selected commit (browsing mode)
    pub fn select_file(&mut self, path: &str) {
        if self.cursor.single_file || path.is_empty() {
            return;
        }
        self.file_list.select_path(path);
        self.cursor.selected_path = path.to_string();
        self.sync_panels();
        self.reload_content();
    }

    // =========================================================================
    // Panels
    // =========================================================================

    pub fn toggle_description(&mut self) {
        self.diff_view.toggle_description();
    }

    /// Open or close the file tree (browsing mode)
    pub fn toggle_file_tree(&mut self) {
        if self.cursor.single_file {
            return;
        }
        self.show_tree = !self.show_tree;
        self.focus = Focus::CommitList;
        if self.show_tree {
            self.file_tree.set_message(labels::LOADING);
            self.loader.dispatch(LoadRequest::Tree);
        }
    }

    /// Enter single-file mode for a path picked in the tree
    pub fn open_tree_selection(&mut self, path: &str) {
        self.show_tree = false;
        self.enter_single_file_mode(path);
    }

    pub fn focus_next(&mut self) {
        self.focus = match (self.show_tree, self.focus) {
            (true, Focus::Diff) => Focus::CommitList,
            (true, _) => Focus::Diff,
            (false, Focus::CommitList) => Focus::Files,
            (false, Focus::Files) => Focus::Diff,
            (false, Focus::Diff) => Focus::CommitList,
        };
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = match focus {
            Focus::Files if self.show_tree => Focus::CommitList,
            focus => focus,
        };
    }
}
