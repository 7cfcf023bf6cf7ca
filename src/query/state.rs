//! Cache entry and request bookkeeping for a single query.

use crate::network::RequestTimer;
use crate::query::descriptor::QueryDescriptor;
use std::time::{Duration, Instant};

/// Monotonic identifier of one request issued for a query.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Transport-independent description of a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
    pub retryable: bool,
    pub retry_after: Option<Duration>,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>, retryable: bool) -> Self {
        Self {
            message: message.into(),
            retryable,
            retry_after: None,
        }
    }

    pub fn with_retry_after(mut self, retry_after: Option<Duration>) -> Self {
        self.retry_after = retry_after;
        self
    }
}

/// What happened when a response was offered to a query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The response replaced the cached data.
    Applied,
    /// The request failed; cached data is untouched. `retry_in` is the
    /// delay before the scheduled retry, `None` if no retry is planned.
    Failed { retry_in: Option<Duration> },
    /// The response belonged to a superseded or abandoned request.
    Discarded,
}

/// Cached data plus the state of the most recent request.
#[derive(Debug)]
pub struct QueryState<T> {
    data: Option<T>,
    in_flight: Option<RequestId>,
    issued: u64,
    attempted: bool,
    enabled: bool,
    refetch_requested: bool,
    refresh_interval: Option<Duration>,
    next_refresh_at: Option<Instant>,
    retry_at: Option<Instant>,
    last_error: Option<String>,
    timer: RequestTimer,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::new(RequestTimer::default())
    }
}

impl<T> QueryState<T> {
    pub fn new(timer: RequestTimer) -> Self {
        Self {
            data: None,
            in_flight: None,
            issued: 0,
            attempted: false,
            enabled: false,
            refetch_requested: false,
            refresh_interval: None,
            next_refresh_at: None,
            retry_at: None,
            last_error: None,
            timer,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// True until the first successful response arrives.
    pub fn is_loading(&self) -> bool {
        self.data.is_none()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Ask for a fetch on the next poll, even if one is in flight.
    pub fn request_refetch(&mut self) {
        self.refetch_requested = true;
    }

    /// Record the descriptor's current settings.
    ///
    /// Returns `true` when the query goes from disabled to enabled.
    pub(crate) fn sync(&mut self, descriptor: &QueryDescriptor) -> bool {
        self.refresh_interval = descriptor.refresh_interval;
        let became_enabled = descriptor.enabled && !self.enabled;
        self.enabled = descriptor.enabled;
        became_enabled
    }

    /// Whether a new request should be started at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        if !self.enabled {
            return false;
        }
        if self.refetch_requested {
            return true;
        }
        if self.in_flight.is_some() {
            return false;
        }
        if let Some(retry_at) = self.retry_at {
            return now >= retry_at;
        }
        if !self.attempted {
            return true;
        }
        match self.next_refresh_at {
            Some(at) => now >= at,
            None => false,
        }
    }

    /// Issue a new request, superseding any in flight.
    pub fn begin_fetch(&mut self) -> RequestId {
        self.issued += 1;
        let id = RequestId(self.issued);
        self.in_flight = Some(id);
        self.attempted = true;
        self.refetch_requested = false;
        self.retry_at = None;
        id
    }

    /// Abandon the in-flight request and any pending retry.
    ///
    /// Returns the abandoned request, if there was one.
    pub fn cancel(&mut self) -> Option<RequestId> {
        self.refetch_requested = false;
        self.retry_at = None;
        self.timer.give_up();
        self.in_flight.take()
    }

    /// Offer the result of request `id` to the cache.
    pub fn complete(
        &mut self,
        id: RequestId,
        result: Result<T, FetchFailure>,
        now: Instant,
    ) -> Completion {
        if self.in_flight != Some(id) {
            return Completion::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.last_error = None;
                self.timer.record_success();
                self.next_refresh_at = self.refresh_interval.map(|interval| now + interval);
                Completion::Applied
            }
            Err(failure) => {
                let retry_in = if failure.retryable {
                    self.timer.record_failure(failure.retry_after)
                } else {
                    self.timer.give_up();
                    None
                };
                self.last_error = Some(failure.message);
                match retry_in {
                    Some(delay) => self.retry_at = Some(now + delay),
                    None => {
                        self.next_refresh_at =
                            self.refresh_interval.map(|interval| now + interval)
                    }
                }
                Completion::Failed { retry_in }
            }
        }
    }
}
