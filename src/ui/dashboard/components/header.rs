//! Dashboard header component
//!
//! Renders the title and the active theme

use super::super::palette::Palette;
use crate::controller::DashboardView;
use crate::prefs::Theme;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, view: &DashboardView, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(10)])
        .split(area);

    let title_text = if view.compact {
        "CRYPTO DASHBOARD".to_string()
    } else {
        format!("CRYPTO DASHBOARD v{}", env!("CARGO_PKG_VERSION"))
    };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(palette.border));

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(block.clone());
    f.render_widget(title, chunks[0]);

    let theme_label = match view.theme {
        Theme::Dark => "☾ dark",
        Theme::Light => "☀ light",
    };
    let theme = Paragraph::new(theme_label)
        .alignment(Alignment::Right)
        .style(Style::default().fg(palette.muted))
        .block(block);
    f.render_widget(theme, chunks[1]);
}
