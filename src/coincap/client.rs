//! CoinCap Client
//!
//! A read-only client for the CoinCap asset index.

use crate::assets::{Asset, AssetsResponse};
use crate::coincap::AssetApi;
use crate::coincap::error::ApiError;
use crate::consts::cli_consts::http;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("cryptodash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CoinCapClient {
    client: Client,
    base_url: String,
}

impl CoinCapClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn assets_endpoint(limit: Option<usize>) -> String {
        match limit {
            Some(limit) => format!("assets?limit={}", limit),
            None => "assets".to_string(),
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request(&self, endpoint: &str) -> Result<AssetsResponse, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl AssetApi for CoinCapClient {
    async fn fetch_assets(&self, limit: Option<usize>) -> Result<Vec<Asset>, ApiError> {
        let envelope = self.get_request(&Self::assets_endpoint(limit)).await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_without_double_slash() {
        let client = CoinCapClient::new("https://api.coincap.io/v2/").unwrap();
        assert_eq!(
            client.build_url("/assets"),
            "https://api.coincap.io/v2/assets"
        );
    }

    #[test]
    fn test_assets_endpoint() {
        assert_eq!(
            CoinCapClient::assets_endpoint(Some(20)),
            "assets?limit=20"
        );
        assert_eq!(CoinCapClient::assets_endpoint(None), "assets");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        // Port 9 (discard) on localhost is closed on test machines
        let client = CoinCapClient::new("http://127.0.0.1:9/v2").unwrap();
        let result = client.fetch_assets(Some(1)).await;
        assert!(matches!(result, Err(ApiError::Reqwest(_))));
    }
}
