//! Rendering for FileListView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{FileEntry, FileStatus};
use crate::ui::{components, navigation, symbols, theme};

use super::FileListView;

fn status_color(status: &FileStatus) -> Color {
    match status {
        FileStatus::Modified => theme::file_list::MODIFIED,
        FileStatus::Added | FileStatus::Untracked => theme::file_list::ADDED,
        FileStatus::Deleted => theme::file_list::DELETED,
        FileStatus::Renamed | FileStatus::Copied => theme::file_list::RENAMED,
        FileStatus::Other(_) => theme::file_list::OTHER,
    }
}

impl FileListView {
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let mut title = vec![Span::raw(" Files ")];
        if !self.revision_label.is_empty() {
            title.push(Span::styled(
                format!("{} ", self.revision_label),
                Style::default().fg(theme::commit_list::HASH),
            ));
        }
        if self.filtering || !self.filter.is_empty() {
            title.push(Span::styled(
                format!("/{} ", self.filter),
                Style::default().fg(Color::Yellow),
            ));
        }
        let block = components::panel_block(2, Line::from(title), focused);

        if let Some(message) = &self.message {
            frame.render_widget(components::empty_state(message).block(block), area);
            return;
        }

        let visible = self.visible();
        if visible.is_empty() {
            frame.render_widget(
                components::empty_state(symbols::labels::NO_FILES).block(block),
                area,
            );
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let offset = navigation::adjust_scroll(self.selected, self.scroll_offset, inner_height);

        let lines: Vec<Line> = visible
            .iter()
            .enumerate()
            .skip(offset)
            .take(inner_height)
            .map(|(i, entry)| build_entry_line(entry, i == self.selected))
            .collect();

        self.scroll_offset = offset;
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn build_entry_line(entry: &FileEntry, is_selected: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{:2} ", entry.status.code()),
            Style::default().fg(status_color(&entry.status)),
        ),
        Span::raw(entry.path.clone()),
    ];
    if let Some(stats) = entry.stats {
        spans.push(Span::styled(
            format!(" +{}", stats.additions),
            Style::default().fg(theme::file_list::ADDITIONS),
        ));
        spans.push(Span::styled(
            format!(" -{}", stats.deletions),
            Style::default().fg(theme::file_list::DELETIONS),
        ));
    }

    let line = Line::from(spans);
    if is_selected {
        line.style(
            Style::default()
                .bg(theme::commit_list::SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        line
    }
}
