//! Case-insensitive name/symbol filtering of asset lists.

use crate::assets::Asset;

/// Returns the assets whose name or symbol contains `term`, ignoring case.
///
/// The result keeps the input order. An empty term matches everything.
pub fn filter_assets(assets: &[Asset], term: &str) -> Vec<Asset> {
    if term.is_empty() {
        return assets.to_vec();
    }
    let needle = term.to_lowercase();
    assets
        .iter()
        .filter(|asset| matches_term(asset, &needle))
        .cloned()
        .collect()
}

fn matches_term(asset: &Asset, needle: &str) -> bool {
    asset.name.to_lowercase().contains(needle) || asset.symbol.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_asset;

    fn sample() -> Vec<Asset> {
        vec![
            test_asset("bitcoin", "Bitcoin", "btc"),
            test_asset("ethereum", "Ethereum", "ETH"),
            test_asset("wrapped-bitcoin", "Wrapped Bitcoin", "WBTC"),
            test_asset("tether", "Tether", "USDT"),
        ]
    }

    #[test]
    fn test_empty_term_returns_list_unchanged() {
        let assets = sample();
        assert_eq!(filter_assets(&assets, ""), assets);
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let result = filter_assets(&sample(), "BIT");
        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["bitcoin", "wrapped-bitcoin"]);
    }

    #[test]
    fn test_matches_symbol_case_insensitively() {
        let result = filter_assets(&sample(), "eth");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "ethereum");

        let result = filter_assets(&sample(), "usd");
        assert_eq!(result[0].id, "tether");
    }

    #[test]
    fn test_every_result_contains_term() {
        let assets = sample();
        for term in ["b", "T", "coin", "zzz", "wB"] {
            let needle = term.to_lowercase();
            for asset in filter_assets(&assets, term) {
                assert!(
                    asset.name.to_lowercase().contains(&needle)
                        || asset.symbol.to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let assets = sample();
        for term in ["bit", "T", "", "nothing"] {
            let once = filter_assets(&assets, term);
            assert_eq!(filter_assets(&once, term), once);
        }
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_assets(&sample(), "dogecoin").is_empty());
    }
}
