//! Rendering logic for the application

use ratatui::{
    Frame,
    prelude::*,
    widgets::Paragraph,
};

use super::state::{App, Focus};
use crate::keys;
use crate::ui::theme;
use crate::ui::widgets::{
    build_status_bar_with_prefix, mode_badge, render_error_banner, render_help_panel,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
        let columns = Layout::horizontal([
            Constraint::Percentage(self.config.ui.sidebar_percent),
            Constraint::Min(0),
        ])
        .split(rows[0]);

        if self.show_tree {
            self.file_tree
                .render(frame, columns[0], self.focus == Focus::CommitList);
        } else {
            let sidebar =
                Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(columns[0]);
            self.commit_list
                .render(frame, sidebar[0], self.focus == Focus::CommitList);
            self.file_list
                .render(frame, sidebar[1], self.focus == Focus::Files);
        }
        self.diff_view
            .render(frame, columns[1], self.focus == Focus::Diff);

        self.render_status_bar(frame, rows[1]);

        // Render error banner above status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }

        if self.show_help {
            render_help_panel(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref textarea) = self.search_input {
            let prompt = "Search: ";
            let hints = build_status_bar_with_prefix(Vec::new(), keys::INPUT_HINTS);
            let chunks = Layout::horizontal([
                Constraint::Length(prompt.len() as u16),
                Constraint::Min(1),
                Constraint::Length(hints.width() as u16),
            ])
            .split(area);
            frame.render_widget(Paragraph::new(prompt.bold()), chunks[0]);
            frame.render_widget(textarea, chunks[1]);
            frame.render_widget(Paragraph::new(hints), chunks[2]);
            return;
        }

        let (label, color, hints) = if self.show_tree {
            ("TREE", theme::badges::TREE, keys::TREE_HINTS)
        } else if self.cursor.single_file {
            ("FILE", theme::badges::FILE, keys::FILE_MODE_HINTS)
        } else {
            ("COMMITS", theme::badges::COMMITS, keys::COMMITS_HINTS)
        };

        let line = build_status_bar_with_prefix(vec![mode_badge(label, color)], hints);
        frame.render_widget(Paragraph::new(line), area);
    }
}
