//! Asset fetching for the dashboard queries

use super::core::EventSender;
use crate::assets::Asset;
use crate::coincap::AssetApi;
use crate::coincap::error::ApiError;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::network::ErrorHandler;
use crate::query::{FetchFailure, FetchOutcome, FetchRequest, QueryKey};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs one request per [`FetchRequest`] and reports the outcome.
///
/// Retry scheduling belongs to the query layer; a fetcher makes exactly one
/// attempt and classifies the failure.
#[derive(Clone)]
pub struct AssetFetcher {
    api: Arc<dyn AssetApi>,
    outcome_sender: mpsc::Sender<FetchOutcome<Vec<Asset>>>,
    event_sender: EventSender,
    error_handler: ErrorHandler,
}

impl AssetFetcher {
    pub fn new(
        api: Arc<dyn AssetApi>,
        outcome_sender: mpsc::Sender<FetchOutcome<Vec<Asset>>>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            api,
            outcome_sender,
            event_sender,
            error_handler: ErrorHandler::new(),
        }
    }

    /// Start the request on the runtime. Aborting the handle drops the
    /// request without reporting an outcome.
    pub fn spawn(&self, request: FetchRequest) -> JoinHandle<()> {
        let fetcher = self.clone();
        tokio::spawn(async move {
            let outcome = fetcher.fetch(request).await;
            let _ = fetcher.outcome_sender.send(outcome).await;
        })
    }

    pub async fn fetch(&self, request: FetchRequest) -> FetchOutcome<Vec<Asset>> {
        let source = request.key.source();
        self.event_sender
            .send_fetch_event(
                source,
                format!("Fetching {}...", describe(&request)),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;

        let result = match self.api.fetch_assets(request.limit).await {
            Ok(assets) => {
                self.event_sender
                    .send_fetch_event(
                        source,
                        format!("Loaded {} assets", assets.len()),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                Ok(assets)
            }
            Err(e) => {
                let failure = self.to_failure(&e);
                self.event_sender
                    .send_fetch_event(
                        source,
                        format!("Failed to fetch {}: {}", describe(&request), e),
                        EventType::Error,
                        self.error_handler.classify_error(&e),
                    )
                    .await;
                Err(failure)
            }
        };

        FetchOutcome {
            key: request.key,
            request_id: request.request_id,
            result,
        }
    }

    fn to_failure(&self, error: &ApiError) -> FetchFailure {
        FetchFailure::new(error.to_string(), self.error_handler.should_retry(error))
            .with_retry_after(error.get_retry_after_seconds().map(Duration::from_secs))
    }
}

fn describe(request: &FetchRequest) -> String {
    match (request.key, request.limit) {
        (QueryKey::TopAssets, Some(limit)) => format!("top {} assets", limit),
        (QueryKey::TopAssets, None) | (QueryKey::AllAssets, _) => "all assets".to_string(),
    }
}
