//! Asset records as delivered by the price index.

use serde::{Deserialize, Deserializer, Serialize};

/// One priced instrument. Numeric fields stay in their wire form (decimal
/// strings) and are parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub price_usd: String,
    #[serde(
        rename = "volumeUsd24Hr",
        default,
        deserialize_with = "nullable_string"
    )]
    pub volume_usd24_hr: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub market_cap_usd: String,
}

impl Asset {
    pub fn price(&self) -> f64 {
        parse_decimal(&self.price_usd)
    }

    pub fn volume_24h(&self) -> f64 {
        parse_decimal(&self.volume_usd24_hr)
    }

    pub fn market_cap(&self) -> f64 {
        parse_decimal(&self.market_cap_usd)
    }
}

/// The `{ "data": [...] }` envelope around every asset listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsResponse {
    pub data: Vec<Asset>,
}

/// Parses a decimal string, yielding NaN for anything unparsable.
pub fn parse_decimal(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) fn test_asset(id: &str, name: &str, symbol: &str) -> Asset {
    Asset {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        price_usd: "1.0".to_string(),
        volume_usd24_hr: "1000.0".to_string(),
        market_cap_usd: "1000000.0".to_string(),
    }
}
