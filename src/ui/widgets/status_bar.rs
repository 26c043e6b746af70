//! Status bar widget

use ratatui::{prelude::*, text::Line};

use crate::keys::KeyHint;

fn hint_span(hint: &KeyHint) -> Span<'static> {
    Span::styled(
        format!(" [{}] {} ", hint.key, hint.label),
        Style::default().fg(Color::Black).bg(hint.color),
    )
}

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(hint_span(hint));
    }

    Line::from(spans)
}

/// Mode badge shown at the start of the status bar (`COMMITS`, `FILE`, `TREE`)
pub fn mode_badge(label: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {label} "),
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_are_rendered_as_badges() {
        let hints = &[
            KeyHint {
                key: "q",
                label: "Quit",
                color: Color::Red,
            },
            KeyHint {
                key: "?",
                label: "Help",
                color: Color::Cyan,
            },
        ];

        let line = build_status_bar_with_prefix(Vec::new(), hints);
        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[1].content, " [q] Quit ");
        assert_eq!(line.spans[3].content, " [?] Help ");
    }

    #[test]
    fn prefix_comes_first() {
        let line = build_status_bar_with_prefix(
            vec![mode_badge("FILE", Color::Magenta)],
            &[KeyHint {
                key: "c",
                label: "View",
                color: Color::Yellow,
            }],
        );
        assert_eq!(line.spans[0].content, " FILE ");
        assert_eq!(line.spans.last().unwrap().content, " [c] View ");
    }
}
