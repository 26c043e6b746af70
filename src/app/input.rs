//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, Focus};
use crate::keys;
use crate::model::SourceKind;
use crate::ui::views::{FileListAction, TreeAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt(&key) {
            self.quit();
            return;
        }

        // Text inputs take every key
        if self.search_input.is_some() {
            self.handle_search_key(key);
            return;
        }
        if self.focus == Focus::Files && self.file_list.is_filtering() {
            let action = self.file_list.handle_key(key);
            self.handle_file_list_action(action);
            return;
        }

        if self.show_help {
            if matches!(key.code, keys::HELP | keys::ESC | keys::QUIT) {
                self.show_help = false;
            }
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_focused_key(key);
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::ESC => self.search_input = None,
            keys::SUBMIT => {
                let term = self
                    .search_input
                    .take()
                    .map(|textarea| textarea.lines().join(""))
                    .unwrap_or_default();
                self.activate_source(SourceKind::Pickaxe, Some(&term));
            }
            _ => {
                if let Some(ref mut textarea) = self.search_input {
                    textarea.input(key);
                }
            }
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => self.handle_quit(),
            keys::ESC => self.handle_back(),
            keys::HELP => self.show_help = true,
            keys::TAB => self.focus_next(),
            keys::FOCUS_COMMITS => self.set_focus(Focus::CommitList),
            keys::FOCUS_FILES => self.set_focus(Focus::Files),
            keys::FOCUS_DIFF => self.set_focus(Focus::Diff),
            keys::NEWER => {
                self.step_newer();
            }
            keys::OLDER => {
                self.step_older();
            }
            keys::TOGGLE_DESCRIPTION => self.toggle_description(),
            keys::TOGGLE_TREE if !self.cursor.single_file => self.toggle_file_tree(),
            keys::CYCLE_MODE if self.cursor.single_file => self.cycle_display_mode(),
            keys::REFLOG if self.cursor.single_file => self.toggle_reflog(),
            keys::PICKAXE if self.cursor.single_file => self.toggle_pickaxe(),
            // Diff scrolling works from any panel
            keys::HALF_PAGE_DOWN | keys::HALF_PAGE_UP | keys::NEXT_HUNK | keys::PREV_HUNK => {
                self.diff_view.handle_key(key);
            }
            _ => return false,
        }
        true
    }

    /// `q`: close the tree, leave single-file mode, or quit
    fn handle_quit(&mut self) {
        if self.show_tree {
            self.toggle_file_tree();
        } else if self.cursor.single_file {
            self.exit_single_file_mode();
        } else {
            self.quit();
        }
    }

    /// Esc: close the tree, drop the active source, leave single-file mode,
    /// or return to the newest commit
    fn handle_back(&mut self) {
        if self.show_tree {
            self.toggle_file_tree();
        } else if self.cursor.single_file {
            if self.cursor.source_kind() != SourceKind::Default {
                self.deactivate_source();
            } else {
                self.exit_single_file_mode();
            }
        } else {
            self.return_to_latest();
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::CommitList if self.show_tree => {
                if let TreeAction::Open(path) = self.file_tree.handle_key(key) {
                    self.open_tree_selection(&path);
                }
            }
            Focus::CommitList => self.handle_commit_list_key(key),
            Focus::Files if !self.cursor.single_file => {
                let action = self.file_list.handle_key(key);
                self.handle_file_list_action(action);
            }
            Focus::Files => {}
            Focus::Diff => {
                self.diff_view.handle_key(key);
            }
        }
    }

    fn handle_commit_list_key(&mut self, key: KeyEvent) {
        match key.code {
            code if keys::is_move_down(code) => {
                self.step_older();
            }
            code if keys::is_move_up(code) => {
                self.step_newer();
            }
            keys::GO_TOP => {
                self.select_row(0);
            }
            keys::GO_BOTTOM => {
                let last = self.commit_list.row_count().saturating_sub(1);
                self.select_row(last);
            }
            _ => {}
        }
    }

    fn handle_file_list_action(&mut self, action: FileListAction) {
        match action {
            FileListAction::None => {}
            FileListAction::Select(path) => self.select_file(&path),
            FileListAction::Open(path) => self.enter_single_file_mode(&path),
        }
    }
}
