//! Render-ready snapshot of the dashboard.

use crate::assets::Asset;
use crate::format::{NumberFormatter, format_price};
use crate::prefs::Theme;
use chrono::{DateTime, Local};

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRow {
    /// 1-based position in the displayed list.
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub volume: String,
    pub market_cap: String,
}

/// What the body of the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// The top-N listing has never resolved.
    Loading,
    /// The top-N listing, no search term.
    Top(Vec<AssetRow>),
    /// A search term is set but the full listing has never resolved.
    AwaitingSearch,
    /// Full listing filtered by the search term.
    Search(Vec<AssetRow>),
    /// The selected listing resolved with nothing to show.
    Empty,
}

impl ViewState {
    pub fn rows(&self) -> &[AssetRow] {
        match self {
            ViewState::Top(rows) | ViewState::Search(rows) => rows,
            ViewState::Loading | ViewState::AwaitingSearch | ViewState::Empty => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub state: ViewState,
    pub theme: Theme,
    /// Large magnitudes use T/B/M suffixes.
    pub compact: bool,
    pub search: String,
    /// A request for the displayed listing is in flight.
    pub is_refreshing: bool,
    /// When the displayed listing last resolved.
    pub last_updated: Option<DateTime<Local>>,
    /// Most recent failure of the displayed listing, cleared by the next success.
    pub last_error: Option<String>,
}

/// Formats assets for display, ranking them in the order given.
pub fn build_rows(assets: &[Asset], formatter: &NumberFormatter, compact: bool) -> Vec<AssetRow> {
    assets
        .iter()
        .enumerate()
        .map(|(index, asset)| AssetRow {
            rank: index + 1,
            id: asset.id.clone(),
            name: asset.name.clone(),
            symbol: asset.symbol.to_uppercase(),
            price: format_price(asset.price()),
            volume: formatter.format(asset.volume_24h(), compact),
            market_cap: formatter.format(asset.market_cap(), compact),
        })
        .collect()
}
