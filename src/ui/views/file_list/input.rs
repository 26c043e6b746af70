//! Key handling for FileListView

use crossterm::event::{KeyCode, KeyEvent};

use crate::keys;
use crate::ui::navigation;

use super::{FileListAction, FileListView};

impl FileListView {
    /// Handle a key while the file list has focus (browsing mode)
    pub fn handle_key(&mut self, key: KeyEvent) -> FileListAction {
        if self.filtering {
            return self.handle_filter_key(key);
        }

        let before = self.selected;
        match key.code {
            code if keys::is_move_down(code) => {
                let max = self.visible().len().saturating_sub(1);
                self.selected = navigation::select_next(self.selected, max);
            }
            code if keys::is_move_up(code) => {
                self.selected = navigation::select_prev(self.selected);
            }
            keys::GO_TOP => self.selected = 0,
            keys::GO_BOTTOM => self.selected = self.visible().len().saturating_sub(1),
            keys::FILTER => {
                self.filtering = true;
                return FileListAction::None;
            }
            code if keys::is_open(code) => {
                return self
                    .selected_path()
                    .map(|path| FileListAction::Open(path.to_string()))
                    .unwrap_or(FileListAction::None);
            }
            _ => return FileListAction::None,
        }

        self.selection_action(before)
    }

    /// Filter input: typing narrows the list live, Enter keeps the filter,
    /// Esc clears it
    fn handle_filter_key(&mut self, key: KeyEvent) -> FileListAction {
        let before = self.selected_path().map(str::to_string);
        match key.code {
            keys::ESC => {
                self.filtering = false;
                self.filter.clear();
            }
            keys::SUBMIT => {
                self.filtering = false;
                return FileListAction::None;
            }
            KeyCode::Char(c) => self.filter.push(c),
            KeyCode::Backspace => {
                self.filter.pop();
            }
            _ => return FileListAction::None,
        }

        self.selected = 0;
        self.scroll_offset = 0;
        match self.selected_path() {
            Some(path) if before.as_deref() != Some(path) => {
                FileListAction::Select(path.to_string())
            }
            _ => FileListAction::None,
        }
    }

    fn selection_action(&self, before: usize) -> FileListAction {
        if self.selected == before {
            return FileListAction::None;
        }
        self.selected_path()
            .map(|path| FileListAction::Select(path.to_string()))
            .unwrap_or(FileListAction::None)
    }
}
