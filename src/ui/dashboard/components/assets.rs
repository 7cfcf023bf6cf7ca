//! Dashboard asset table component
//!
//! Renders the table body, or the loading and empty notices in its place.
//! A search waiting on the full listing shows the bare table header.

use super::super::palette::Palette;
use super::super::utils::spinner_frame;
use crate::controller::{AssetRow, DashboardView, ViewState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub const NO_RESULTS: &str = "No results found.";

pub fn render_assets(f: &mut Frame, area: Rect, view: &DashboardView, palette: &Palette, tick: usize) {
    match &view.state {
        ViewState::Loading => render_notice(
            f,
            area,
            format!("{} Loading prices...", spinner_frame(tick)),
            palette.accent,
        ),
        ViewState::AwaitingSearch => render_table(f, area, &[], view.compact, palette),
        ViewState::Empty => render_notice(f, area, NO_RESULTS.to_string(), palette.muted),
        ViewState::Top(rows) | ViewState::Search(rows) => {
            render_table(f, area, rows, view.compact, palette)
        }
    }
}

fn render_notice(f: &mut Frame, area: Rect, text: String, color: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);
    let notice = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    f.render_widget(notice, chunks[1]);
}

fn column_widths(compact: bool) -> [Constraint; 5] {
    if compact {
        [
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(9),
        ]
    } else {
        [
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Length(24),
            Constraint::Length(24),
        ]
    }
}

fn render_table(f: &mut Frame, area: Rect, rows: &[AssetRow], compact: bool, palette: &Palette) {
    let header = Row::new(["#", "Name", "Price", "24h Volume", "Market Cap"])
        .style(
            Style::default()
                .fg(palette.text)
                .bg(palette.header_background)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let body = rows.iter().map(|row| {
        let name = Line::from(vec![
            Span::styled(
                row.name.clone(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(row.symbol.clone(), Style::default().fg(palette.muted)),
        ]);
        Row::new(vec![
            Cell::from(row.rank.to_string()).style(Style::default().fg(palette.muted)),
            Cell::from(name),
            Cell::from(row.price.clone()).style(Style::default().fg(palette.price)),
            Cell::from(row.volume.clone()).style(Style::default().fg(palette.figures)),
            Cell::from(row.market_cap.clone()).style(Style::default().fg(palette.figures)),
        ])
        .style(Style::default().bg(palette.surface))
    });

    let table = Table::new(body, column_widths(compact))
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(table, area);
}
