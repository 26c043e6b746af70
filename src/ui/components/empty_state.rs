//! Placeholder for panels with no rows to show

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Dimmed message centered one row below the panel border, shown while a
/// panel is loading or has nothing to list
pub fn empty_state(message: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::default(),
        Line::from(message.to_owned()).dark_gray().centered(),
    ])
}
