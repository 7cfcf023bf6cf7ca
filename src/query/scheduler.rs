//! Decides which queries to fetch, and which in-flight fetches to abandon,
//! each time the dashboard is polled.

use crate::query::descriptor::{QueryDescriptor, QueryKey};
use crate::query::state::{Completion, FetchFailure, QueryState, RequestId};
use std::time::Instant;

/// A request the runtime should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub key: QueryKey,
    pub request_id: RequestId,
    pub limit: Option<usize>,
}

/// Instructions for whoever executes fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchCommand {
    /// Start a fetch, replacing any running one for the same key.
    Start(FetchRequest),
    /// Stop the running fetch for this key; its result will be ignored anyway.
    Abort(QueryKey),
}

/// Result of a fetch, tagged with the request it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome<T> {
    pub key: QueryKey,
    pub request_id: RequestId,
    pub result: Result<T, FetchFailure>,
}

#[derive(Debug)]
pub struct QueryScheduler<T> {
    top: QueryState<T>,
    all: QueryState<T>,
}

impl<T> Default for QueryScheduler<T> {
    fn default() -> Self {
        Self {
            top: QueryState::default(),
            all: QueryState::default(),
        }
    }
}

impl<T> QueryScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, key: QueryKey) -> &QueryState<T> {
        match key {
            QueryKey::TopAssets => &self.top,
            QueryKey::AllAssets => &self.all,
        }
    }

    fn state_mut(&mut self, key: QueryKey) -> &mut QueryState<T> {
        match key {
            QueryKey::TopAssets => &mut self.top,
            QueryKey::AllAssets => &mut self.all,
        }
    }

    /// Reconcile every query against its descriptor.
    pub fn poll(&mut self, descriptors: &[QueryDescriptor], now: Instant) -> Vec<FetchCommand> {
        let mut commands = Vec::new();
        for descriptor in descriptors {
            let state = self.state_mut(descriptor.key);
            let was_enabled = state.is_enabled();
            if state.sync(descriptor) {
                state.request_refetch();
            }

            if !descriptor.enabled {
                if was_enabled && state.cancel().is_some() {
                    commands.push(FetchCommand::Abort(descriptor.key));
                }
                continue;
            }

            if state.is_due(now) {
                let request_id = state.begin_fetch();
                commands.push(FetchCommand::Start(FetchRequest {
                    key: descriptor.key,
                    request_id,
                    limit: descriptor.limit,
                }));
            }
        }
        commands
    }

    /// Manual refresh of one query; takes effect on the next poll.
    pub fn request_refetch(&mut self, key: QueryKey) {
        self.state_mut(key).request_refetch();
    }

    /// Flag enabled queries that opted into focus refetching.
    pub fn on_focus_gained(&mut self, descriptors: &[QueryDescriptor]) {
        for descriptor in descriptors {
            if descriptor.enabled && descriptor.refetch_on_focus {
                self.state_mut(descriptor.key).request_refetch();
            }
        }
    }

    pub fn complete(&mut self, outcome: FetchOutcome<T>, now: Instant) -> Completion {
        self.state_mut(outcome.key)
            .complete(outcome.request_id, outcome.result, now)
    }
}
