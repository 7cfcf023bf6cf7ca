use crate::assets::Asset;
use crate::coincap::error::ApiError;

pub(crate) mod client;
pub use client::CoinCapClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AssetApi: Send + Sync {
    /// Lists assets in the index's rank order, the first `limit` of them when
    /// a limit is given.
    async fn fetch_assets(&self, limit: Option<usize>) -> Result<Vec<Asset>, ApiError>;
}
