//! Help panel widget
//!
//! Centered overlay listing every key binding, grouped by context.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Clear, Paragraph},
};

use crate::keys;
use crate::ui::components;

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Browsing", keys::BROWSE_KEYS);
    push_section(&mut lines, "Single-file mode", keys::FILE_MODE_KEYS);
    push_section(&mut lines, "Diff pane", keys::DIFF_KEYS);
    push_section(&mut lines, "File tree", keys::TREE_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", entry.key),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
}

/// Render the help overlay centered in `area`
pub fn render_help_panel(frame: &mut Frame, area: Rect) {
    let lines = build_help_lines();
    let width = 56.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let title = Line::from(" revscope - Help ").bold().centered();
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(components::bordered_block(title)),
        popup,
    );
}
