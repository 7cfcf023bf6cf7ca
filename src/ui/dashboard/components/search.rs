//! Search box with refresh indicator

use super::super::palette::Palette;
use crate::controller::DashboardView;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Shown in place of the refresh glyph while a background fetch runs.
pub const REFRESHING_INDICATOR: &str = "…";

pub fn render_search(f: &mut Frame, area: Rect, view: &DashboardView, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(5)])
        .split(area);

    let content = if view.search.is_empty() {
        Line::from(vec![
            Span::styled("▏", Style::default().fg(palette.accent)),
            Span::styled("Search...", Style::default().fg(palette.muted)),
        ])
    } else {
        Line::from(vec![
            Span::styled(view.search.clone(), Style::default().fg(palette.text)),
            Span::styled("▏", Style::default().fg(palette.accent)),
        ])
    };
    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface)),
    );
    f.render_widget(input, chunks[0]);

    let (indicator, color) = if view.is_refreshing {
        (REFRESHING_INDICATOR, palette.accent)
    } else {
        ("⟳", palette.muted)
    };
    let refresh = Paragraph::new(indicator)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(refresh, chunks[1]);
}
