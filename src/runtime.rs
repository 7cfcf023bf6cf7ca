//! Runtime for executing the controller's fetch commands

use crate::assets::Asset;
use crate::coincap::AssetApi;
use crate::consts::cli_consts::OUTCOME_QUEUE_SIZE;
use crate::controller::DashboardController;
use crate::events::Event;
use crate::query::{Completion, FetchCommand, FetchOutcome, QueryKey};
use crate::workers::{AssetFetcher, EventSender};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Couples a [`DashboardController`] with the tasks running its fetches.
///
/// At most one fetch task exists per query; starting a new one aborts the
/// previous task for the same key.
pub struct DashboardRuntime {
    controller: DashboardController,
    fetcher: AssetFetcher,
    outcome_receiver: mpsc::Receiver<FetchOutcome<Vec<Asset>>>,
    in_flight: HashMap<QueryKey, JoinHandle<()>>,
}

impl DashboardRuntime {
    pub fn new(
        api: Arc<dyn AssetApi>,
        controller: DashboardController,
        event_sender: mpsc::Sender<Event>,
    ) -> Self {
        let (outcome_sender, outcome_receiver) = mpsc::channel(OUTCOME_QUEUE_SIZE);
        let fetcher = AssetFetcher::new(api, outcome_sender, EventSender::new(event_sender));
        Self {
            controller,
            fetcher,
            outcome_receiver,
            in_flight: HashMap::new(),
        }
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DashboardController {
        &mut self.controller
    }

    /// Poll the controller and start or abort fetch tasks accordingly.
    pub fn pump(&mut self, now: Instant) {
        for command in self.controller.poll(now) {
            match command {
                FetchCommand::Start(request) => {
                    let handle = self.fetcher.spawn(request);
                    if let Some(previous) = self.in_flight.insert(request.key, handle) {
                        previous.abort();
                    }
                }
                FetchCommand::Abort(key) => {
                    if let Some(handle) = self.in_flight.remove(&key) {
                        handle.abort();
                    }
                }
            }
        }
    }

    /// Wait for the next fetch to finish.
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome<Vec<Asset>>> {
        self.outcome_receiver.recv().await
    }

    pub fn apply(&mut self, outcome: FetchOutcome<Vec<Asset>>, now: Instant) -> Completion {
        let key = outcome.key;
        let completion = self.controller.apply_outcome(outcome, now);
        if completion != Completion::Discarded {
            self.in_flight.remove(&key);
        }
        completion
    }

    /// Events raised by the controller since the last call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.controller.drain_events()
    }

    pub fn shutdown(&mut self) {
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
    }
}

impl Drop for DashboardRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_asset;
    use crate::coincap::MockAssetApi;
    use crate::controller::ViewState;
    use crate::format::NumberFormatter;
    use crate::prefs::{DisplayPreference, MemoryPreferenceStore, Viewport};

    fn runtime(api: MockAssetApi) -> (DashboardRuntime, mpsc::Receiver<Event>) {
        let preferences = DisplayPreference::load(
            Box::new(MemoryPreferenceStore::default()),
            Viewport::from_columns(160),
        );
        let controller = DashboardController::new(preferences, NumberFormatter::default());
        let (event_sender, event_receiver) = mpsc::channel(32);
        (
            DashboardRuntime::new(Arc::new(api), controller, event_sender),
            event_receiver,
        )
    }

    fn listing(limit: Option<usize>) -> Vec<Asset> {
        let assets = vec![
            test_asset("bitcoin", "Bitcoin", "btc"),
            test_asset("ethereum", "Ethereum", "eth"),
            test_asset("wrapped-bitcoin", "Wrapped Bitcoin", "wbtc"),
        ];
        match limit {
            Some(limit) => assets.into_iter().take(limit).collect(),
            None => assets,
        }
    }

    #[tokio::test]
    async fn test_pump_fetches_and_applies_top_listing() {
        let mut api = MockAssetApi::new();
        api.expect_fetch_assets()
            .times(1)
            .returning(|limit| Ok(listing(limit)));
        let (mut runtime, _events) = runtime(api);

        runtime.pump(Instant::now());
        let outcome = runtime.next_outcome().await.unwrap();
        assert_eq!(runtime.apply(outcome, Instant::now()), Completion::Applied);

        let view = runtime.controller().view();
        assert!(matches!(view.state, ViewState::Top(_)));
        assert_eq!(view.state.rows().len(), 3);
        assert!(!view.is_refreshing);
    }

    #[tokio::test]
    async fn test_search_uses_full_listing() {
        let mut api = MockAssetApi::new();
        api.expect_fetch_assets()
            .returning(|limit| Ok(listing(limit.map(|_| 1))));
        let (mut runtime, _events) = runtime(api);

        runtime.controller_mut().set_search("bit");
        runtime.pump(Instant::now());
        for _ in 0..2 {
            let outcome = runtime.next_outcome().await.unwrap();
            runtime.apply(outcome, Instant::now());
        }

        let view = runtime.controller().view();
        let ids: Vec<_> = view.state.rows().iter().map(|row| row.id.clone()).collect();
        assert_eq!(ids, vec!["bitcoin", "wrapped-bitcoin"]);
    }

    #[tokio::test]
    async fn test_abandoned_full_fetch_never_reports() {
        let mut api = MockAssetApi::new();
        api.expect_fetch_assets()
            .returning(|limit| Ok(listing(limit)));
        let (mut runtime, _events) = runtime(api);

        let now = Instant::now();
        runtime.controller_mut().set_search("bit");
        runtime.pump(now);
        // Neither task has run yet on the current-thread runtime
        runtime.controller_mut().clear_search();
        runtime.pump(now);

        let outcome = runtime.next_outcome().await.unwrap();
        assert_eq!(outcome.key, QueryKey::TopAssets);
        runtime.apply(outcome, now);

        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert!(runtime.outcome_receiver.try_recv().is_err());
        assert!(runtime.in_flight.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_events_are_forwarded() {
        let mut api = MockAssetApi::new();
        api.expect_fetch_assets()
            .returning(|limit| Ok(listing(limit)));
        let (mut runtime, mut events) = runtime(api);

        runtime.pump(Instant::now());
        runtime.next_outcome().await.unwrap();

        let mut received = Vec::new();
        while let Ok(event) = events.try_recv() {
            received.push(event);
        }
        assert!(received.iter().any(|event| event.msg == "Loaded 3 assets"));
    }
}
