//! Plain-text rendering for headless output and snapshots

use crate::controller::{AssetRow, ViewState};
use crate::ui::dashboard::components::assets::NO_RESULTS;

const HEADERS: [&str; 5] = ["#", "Name", "Price", "24h Volume", "Market Cap"];

/// Renders a view state as lines of text, without colour.
pub fn render_state(state: &ViewState) -> String {
    match state {
        ViewState::Loading => "Loading prices...".to_string(),
        ViewState::AwaitingSearch => "Searching all assets...".to_string(),
        ViewState::Empty => NO_RESULTS.to_string(),
        ViewState::Top(rows) | ViewState::Search(rows) => render_table(rows),
    }
}

/// Left-aligned text table with one space-padded column per field.
pub fn render_table(rows: &[AssetRow]) -> String {
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.rank.to_string(),
                format!("{} ({})", row.name, row.symbol),
                row.price.clone(),
                row.volume.clone(),
                row.market_cap.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_line(&HEADERS.map(str::to_string), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &cells {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
