//! Dashboard footer component
//!
//! Renders the status line and key hints

use super::super::palette::Palette;
use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, format_compact_timestamp, get_event_color};
use crate::controller::DashboardView;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the two-line footer.
pub fn render_footer(
    f: &mut Frame,
    area: Rect,
    view: &DashboardView,
    state: &DashboardState,
    palette: &Palette,
) {
    let mut status = Vec::new();
    let shown = view.state.rows().len();
    if shown > 0 {
        status.push(Span::styled(
            format!("{} assets", shown),
            Style::default().fg(palette.muted),
        ));
    }
    if let Some(updated) = view.last_updated {
        push_separator(&mut status, palette);
        status.push(Span::styled(
            format!("Updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(palette.muted),
        ));
    }
    let diagnostic = view
        .last_error
        .as_ref()
        .filter(|_| state.shows_fetch_errors());
    if let Some(error) = diagnostic {
        push_separator(&mut status, palette);
        status.push(Span::styled(
            clean_http_error_message(error),
            Style::default().fg(palette.error),
        ));
    } else if let Some(event) = state.latest_event() {
        push_separator(&mut status, palette);
        status.push(Span::styled(
            format!(
                "{} {}",
                format_compact_timestamp(&event.timestamp),
                clean_http_error_message(&event.msg)
            ),
            Style::default().fg(get_event_color(event, palette)),
        ));
    }

    let hints = if view.compact {
        "[Esc] Clear/Quit  [F5] Refresh  [F2] Theme"
    } else {
        "[Type] Search  [Esc] Clear/Quit  [F5/Ctrl+R] Refresh  [F2/Ctrl+T] Theme  [Ctrl+C] Quit"
    };

    let footer = Paragraph::new(vec![
        Line::from(status),
        Line::from(Span::styled(
            hints,
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(footer, area);
}

fn push_separator(spans: &mut Vec<Span<'static>>, palette: &Palette) {
    if !spans.is_empty() {
        spans.push(Span::styled(" · ", Style::default().fg(palette.muted)));
    }
}
