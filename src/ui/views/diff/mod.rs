//! Diff pane
//!
//! Shows the content for the cursor: an annotated diff, a numbered file, a
//! blame, or an inline message. Hunk offsets from the annotator drive `n`/`N`.

mod input;
mod render;

use ansi_to_tui::IntoText;
use log::warn;
use ratatui::text::Text;

use crate::annotate::{self, DiffPayload};
use crate::model::{DisplayMode, Revision};

/// Header line of the diff pane
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffHeader {
    /// Path being shown
    pub path: String,
    /// Where the content comes from: `2/10: abc1234` or `working copy`
    pub location: String,
    /// Active view-mode tab (single-file mode only)
    pub mode: Option<DisplayMode>,
    /// Non-default source label (`REFLOG`, `S:"term"`)
    pub indicator: Option<String>,
}

/// Diff pane state
#[derive(Debug)]
pub struct DiffView {
    pub header: DiffHeader,
    /// Revision the content is for (None for messages)
    revision: Option<Revision>,
    /// Raw diff kept for re-annotation when the description is toggled
    raw: Option<String>,
    payload: DiffPayload,
    text: Text<'static>,
    /// Show the commit description above the hunks
    show_description: bool,
    scroll_offset: usize,
    /// Last known visible height (updated during render)
    visible_height: usize,
}

impl Default for DiffView {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DiffView {
    /// Visible height assumed before the first render
    const DEFAULT_VISIBLE_HEIGHT: usize = 20;

    pub fn new(show_description: bool) -> Self {
        Self {
            header: DiffHeader::default(),
            revision: None,
            raw: None,
            payload: DiffPayload::default(),
            text: Text::default(),
            show_description,
            scroll_offset: 0,
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Show a unified diff, annotated
    pub fn set_diff(&mut self, revision: Option<Revision>, raw: String) {
        let payload = annotate::annotate(&raw, self.show_description);
        self.raw = Some(raw);
        self.set_payload(revision, payload);
    }

    /// Show content as-is (full file, blame)
    pub fn set_plain(&mut self, revision: Option<Revision>, text: String) {
        self.raw = None;
        self.set_payload(revision, DiffPayload::plain(text));
    }

    /// Replace the content with an inline message
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.raw = None;
        self.set_payload(None, DiffPayload::plain(message.into()));
    }

    fn set_payload(&mut self, revision: Option<Revision>, payload: DiffPayload) {
        self.text = to_text(&payload.text);
        self.payload = payload;
        self.revision = revision;
        self.scroll_offset = 0;
    }

    /// Show or hide the commit description, re-annotating the current diff
    pub fn toggle_description(&mut self) {
        self.show_description = !self.show_description;
        if let Some(raw) = &self.raw {
            self.payload = annotate::annotate(raw, self.show_description);
            self.text = to_text(&self.payload.text);
            self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
        }
    }

    pub fn show_description(&self) -> bool {
        self.show_description
    }

    pub fn revision(&self) -> Option<&Revision> {
        self.revision.as_ref()
    }

    pub fn payload(&self) -> &DiffPayload {
        &self.payload
    }

    /// Rendered content without color escapes
    pub fn plain_text(&self) -> String {
        annotate::strip_ansi(&self.payload.text).into_owned()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn total_lines(&self) -> usize {
        self.text.lines.len()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn max_scroll_offset(&self) -> usize {
        crate::ui::navigation::max_scroll(self.total_lines(), self.visible_height)
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll_offset());
    }

    pub fn scroll_half_page_up(&mut self) {
        let half = self.visible_height / 2;
        self.scroll_offset = self.scroll_offset.saturating_sub(half);
    }

    pub fn scroll_half_page_down(&mut self) {
        let half = self.visible_height / 2;
        self.scroll_offset = (self.scroll_offset + half).min(self.max_scroll_offset());
    }

    pub fn jump_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll_offset();
    }

    /// Jump to the next hunk header. Returns false when there is none.
    pub fn next_hunk(&mut self) -> bool {
        match annotate::next_hunk(self.scroll_offset, &self.payload.hunk_offsets) {
            Some(offset) => {
                self.scroll_offset = offset;
                true
            }
            None => false,
        }
    }

    /// Jump to the previous hunk header. Returns false when there is none.
    pub fn prev_hunk(&mut self) -> bool {
        match annotate::prev_hunk(self.scroll_offset, &self.payload.hunk_offsets) {
            Some(offset) => {
                self.scroll_offset = offset;
                true
            }
            None => false,
        }
    }

    /// Scroll position in percent; content that fits counts as fully scrolled
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_scroll_offset();
        if max == 0 {
            return 100;
        }
        (self.scroll_offset.min(max) * 100 / max) as u16
    }
}

/// Convert escape-colored text to styled ratatui text
fn to_text(text: &str) -> Text<'static> {
    text.as_bytes().into_text().unwrap_or_else(|e| {
        warn!("Cannot convert colored text: {e}");
        Text::from(annotate::strip_ansi(text).into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIFF: &str = "\
commit abc1234
    Add greeting
diff --git a/hello.txt b/hello.txt
--- a/hello.txt
+++ b/hello.txt
@@ -1,2 +1,2 @@
 hello
-world
+there
@@ -10,1 +10,2 @@
 tail
+more
";

    fn view() -> DiffView {
        let mut view = DiffView::default();
        view.set_diff(Some(Revision::commit("abc1234")), DIFF.to_string());
        view.visible_height = 2;
        view
    }

    #[test]
    fn header_is_hidden_by_default() {
        let v = view();
        assert!(!v.plain_text().contains("Add greeting"));
        assert_eq!(v.payload().hunk_offsets, vec![0, 4]);
    }

    #[test]
    fn toggle_description_reannotates() {
        let mut v = view();
        v.toggle_description();
        assert!(v.show_description());
        assert!(v.plain_text().contains("Add greeting"));
        assert_eq!(v.payload().hunk_offsets, vec![5, 9]);
    }

    #[test]
    fn hunk_jumps_stay_put_at_the_ends() {
        let mut v = view();
        assert!(v.next_hunk());
        assert_eq!(v.scroll_offset(), 4);
        assert!(!v.next_hunk());
        assert!(v.prev_hunk());
        assert_eq!(v.scroll_offset(), 0);
        assert!(!v.prev_hunk());
    }

    #[test]
    fn plain_content_has_no_hunks() {
        let mut v = DiffView::default();
        v.set_plain(None, "     1\tfn main() {}\n".to_string());
        assert!(v.payload().hunk_offsets.is_empty());
        assert!(!v.next_hunk());
    }

    #[test]
    fn scroll_percent_tracks_offset() {
        let mut v = view();
        assert_eq!(v.scroll_percent(), 0);
        v.jump_to_bottom();
        assert_eq!(v.scroll_percent(), 100);

        let mut short = DiffView::default();
        short.set_message("No changes to display");
        assert_eq!(short.scroll_percent(), 100);
    }

    #[test]
    fn message_clears_revision() {
        let mut v = view();
        v.set_message("No changes to display");
        assert_eq!(v.revision(), None);
        assert_eq!(v.plain_text(), "No changes to display");
    }
}
