//! One-shot table output

use super::messages::print_fetch_failure;
use crate::coincap::{AssetApi, CoinCapClient};
use crate::controller::build_rows;
use crate::filter::filter_assets;
use crate::format::{NumberFormatter, NumberLocale};
use crate::ui::plain::render_table;
use std::error::Error;

/// Options for a single snapshot
#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    pub search: Option<String>,
    pub compact: bool,
    pub limit: usize,
}

/// Fetches once and prints the table the dashboard would show.
///
/// With a search term the full listing is filtered; otherwise the top
/// `limit` assets are printed. A failed fetch is reported and returned.
pub async fn run_snapshot(api_url: &str, options: SnapshotOptions) -> Result<(), Box<dyn Error>> {
    let client = CoinCapClient::new(api_url)?;
    let term = options.search.unwrap_or_default();
    let limit = if term.is_empty() {
        Some(options.limit)
    } else {
        None
    };

    let assets = match client.fetch_assets(limit).await {
        Ok(assets) => assets,
        Err(e) => {
            print_fetch_failure(&e);
            return Err(e.into());
        }
    };

    let formatter = NumberFormatter::new(NumberLocale::from_env());
    let rows = build_rows(&filter_assets(&assets, &term), &formatter, options.compact);
    println!("{}", render_table(&rows));
    Ok(())
}
