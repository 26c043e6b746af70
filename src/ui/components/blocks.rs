//! Block components for UI rendering
//!
//! Common block patterns used across panels.

use ratatui::{
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders},
};

use crate::ui::theme;

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
}

/// Create a numbered panel block; the focused panel gets a green, bold border.
///
/// The panel number (`[1]`, `[2]`, `[3]`) is the focus key for that panel.
pub fn panel_block<'a>(number: u8, title: Line<'a>, focused: bool) -> Block<'a> {
    let label = Line::from(format!("[{number}]"));
    let block = bordered_block(label).title(title);
    if focused {
        block.border_style(
            Style::default()
                .fg(theme::panel::FOCUSED_BORDER)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        block.border_style(Style::default().fg(theme::panel::BORDER))
    }
}
