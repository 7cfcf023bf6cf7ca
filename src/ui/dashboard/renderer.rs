//! Dashboard main renderer

use super::components::{assets, footer, header, search};
use super::palette::Palette;
use super::state::DashboardState;
use crate::controller::DashboardView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::Style;
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, view: &DashboardView, state: &DashboardState) {
    let palette = Palette::for_theme(view.theme);
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .margin(if view.compact { 0 } else { 1 })
        .split(f.area());

    header::render_header(f, main_chunks[0], view, &palette);
    search::render_search(f, main_chunks[1], view, &palette);
    assets::render_assets(f, main_chunks[2], view, &palette, state.tick);
    footer::render_footer(f, main_chunks[3], view, state, &palette);
}
