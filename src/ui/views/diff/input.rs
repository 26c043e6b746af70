//! Key handling for DiffView

use crossterm::event::KeyEvent;

use crate::keys;

use super::DiffView;

impl DiffView {
    /// Handle a scrolling key. Returns false for keys the pane does not use.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            code if keys::is_move_down(code) => self.scroll_down(),
            code if keys::is_move_up(code) => self.scroll_up(),
            keys::HALF_PAGE_DOWN => self.scroll_half_page_down(),
            keys::HALF_PAGE_UP => self.scroll_half_page_up(),
            keys::GO_TOP => self.jump_to_top(),
            keys::GO_BOTTOM => self.jump_to_bottom(),
            keys::NEXT_HUNK => {
                self.next_hunk();
            }
            keys::PREV_HUNK => {
                self.prev_hunk();
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn long_view() -> DiffView {
        let mut view = DiffView::default();
        let lines: Vec<String> = (1..=100).map(|i| format!("line {i}")).collect();
        view.set_plain(None, lines.join("\n"));
        view
    }

    #[test]
    fn half_page_moves_by_half_the_height() {
        let mut v = long_view();
        assert!(v.handle_key(key(KeyCode::Char('d'))));
        assert_eq!(v.scroll_offset(), DiffView::DEFAULT_VISIBLE_HEIGHT / 2);
        v.handle_key(key(KeyCode::Char('u')));
        assert_eq!(v.scroll_offset(), 0);
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut v = long_view();
        v.handle_key(key(KeyCode::Char('k')));
        assert_eq!(v.scroll_offset(), 0);
        v.handle_key(key(KeyCode::Char('G')));
        assert_eq!(v.scroll_offset(), 100 - DiffView::DEFAULT_VISIBLE_HEIGHT);
        v.handle_key(key(KeyCode::Char('j')));
        assert_eq!(v.scroll_offset(), 100 - DiffView::DEFAULT_VISIBLE_HEIGHT);
    }

    #[test]
    fn unrelated_keys_are_not_handled() {
        let mut v = long_view();
        assert!(!v.handle_key(key(KeyCode::Char('x'))));
    }
}
