//! Rendering for DiffView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::DisplayMode;
use crate::ui::{components, theme};

use super::DiffView;

impl DiffView {
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let footer = Line::from(format!(" {}% ", self.scroll_percent()))
            .fg(theme::diff_view::FOOTER)
            .right_aligned();
        let block = components::panel_block(3, self.build_title(), focused).title_bottom(footer);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (tabs_area, content_area) = if self.header.mode.is_some() {
            let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);
            (Some(chunks[0]), chunks[1])
        } else {
            (None, inner)
        };

        if let (Some(tabs_area), Some(mode)) = (tabs_area, self.header.mode) {
            frame.render_widget(Paragraph::new(self.build_tabs(mode)), tabs_area);
        }

        self.visible_height = content_area.height as usize;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());

        let visible: Vec<Line> = self
            .text
            .lines
            .iter()
            .skip(self.scroll_offset)
            .take(self.visible_height)
            .cloned()
            .collect();
        frame.render_widget(Paragraph::new(visible), content_area);
    }

    fn build_title(&self) -> Line<'static> {
        let header = &self.header;
        if header.path.is_empty() {
            return Line::from(" Diff ");
        }
        let title = if header.location.is_empty() {
            format!(" {} ", header.path)
        } else {
            format!(" {} ({}) ", header.path, header.location)
        };
        Line::from(title).bold()
    }

    fn build_tabs(&self, active: DisplayMode) -> Line<'static> {
        let mut spans = Vec::new();
        for mode in DisplayMode::ALL {
            let label = format!(" {} ", mode.label());
            if mode == active {
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .bg(theme::diff_view::TAB_ACTIVE_BG)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    label,
                    Style::default().fg(theme::diff_view::TAB_INACTIVE),
                ));
            }
        }
        if let Some(indicator) = &self.header.indicator {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                indicator.clone(),
                Style::default()
                    .fg(theme::diff_view::SOURCE_INDICATOR)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        Line::from(spans)
    }
}
