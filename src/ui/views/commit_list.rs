//! Commit list panel
//!
//! Shows the commits of the active source. The rows are derived from the
//! source by `App::sync_panels`; the view never moves the selection itself.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{Commit, CommitSource, Position, Revision};
use crate::ui::{components, navigation, symbols, theme};

/// Commit list panel state
#[derive(Debug, Default)]
pub struct CommitListView {
    /// Panel title (`Commits`, `History`, `Reflog`, `S:"term"`)
    pub title: String,
    commits: Vec<Commit>,
    /// Whether row 0 is the working copy
    working_copy_row: bool,
    /// Selected row (working copy row included)
    selected: usize,
    loading: bool,
    /// Revision the selected row stands for
    revision: Option<Revision>,
    scroll_offset: usize,
}

impl CommitListView {
    /// Mirror a source into the panel
    pub fn show_source(&mut self, title: impl Into<String>, source: &CommitSource) {
        self.title = title.into();
        self.commits = source.commits().to_vec();
        self.working_copy_row = source.supports_working_copy();
        self.selected = match source.position() {
            Position::WorkingCopy => 0,
            Position::Commit(index) => index + usize::from(self.working_copy_row),
        };
        self.loading = source.is_loading();
        self.revision = source.revision();
    }

    pub fn row_count(&self) -> usize {
        self.commits.len() + usize::from(self.working_copy_row)
    }

    pub fn selected_row(&self) -> usize {
        self.selected
    }

    pub fn revision(&self) -> Option<&Revision> {
        self.revision.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = Line::from(format!(" {} ", self.title));
        let block = components::panel_block(1, title, focused);

        if self.loading {
            frame.render_widget(
                components::empty_state(symbols::labels::LOADING).block(block),
                area,
            );
            return;
        }
        if self.row_count() == 0 {
            frame.render_widget(
                components::empty_state(symbols::labels::NO_COMMITS).block(block),
                area,
            );
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        self.scroll_offset =
            navigation::adjust_scroll(self.selected, self.scroll_offset, inner_height);

        let lines: Vec<Line> = (self.scroll_offset..self.row_count())
            .take(inner_height)
            .map(|row| self.build_row(row))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn build_row(&self, row: usize) -> Line<'static> {
        let is_selected = row == self.selected;

        let mut line = if self.working_copy_row && row == 0 {
            Line::from(vec![
                Span::raw(format!("{} ", symbols::markers::WORKING_COPY)),
                Span::styled(
                    symbols::labels::WORKING_COPY,
                    Style::default().fg(theme::commit_list::WORKING_COPY),
                ),
            ])
        } else {
            let commit = &self.commits[row - usize::from(self.working_copy_row)];
            let marker = if is_selected {
                symbols::markers::SELECTED
            } else {
                symbols::markers::COMMIT
            };
            Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(
                    commit.hash.clone(),
                    Style::default().fg(theme::commit_list::HASH),
                ),
                Span::raw(" "),
                Span::raw(commit.message.clone()),
            ])
        };

        if is_selected {
            line = line.style(
                Style::default()
                    .fg(theme::commit_list::SELECTED_FG)
                    .bg(theme::commit_list::SELECTED_BG)
                    .add_modifier(Modifier::BOLD),
            );
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(working_copy: bool) -> CommitSource {
        let mut source = CommitSource::new(working_copy);
        source.replace(vec![
            Commit::new("aaa1111", "first"),
            Commit::new("bbb2222", "second"),
        ]);
        source
    }

    #[test]
    fn working_copy_row_shifts_commits() {
        let mut s = source(true);
        s.step_older();
        let mut view = CommitListView::default();
        view.show_source("Commits", &s);
        assert_eq!(view.row_count(), 3);
        assert_eq!(view.selected_row(), 2);
        assert_eq!(view.revision(), Some(&Revision::commit("bbb2222")));
    }

    #[test]
    fn working_copy_selected_is_row_zero() {
        let mut s = source(true);
        s.step_newer();
        let mut view = CommitListView::default();
        view.show_source("History", &s);
        assert_eq!(view.selected_row(), 0);
        assert_eq!(view.revision(), Some(&Revision::WorkingCopy));
    }

    #[test]
    fn without_working_copy_rows_match_indices() {
        let mut view = CommitListView::default();
        view.show_source("Reflog", &source(false));
        assert_eq!(view.row_count(), 2);
        assert_eq!(view.selected_row(), 0);
    }
}
