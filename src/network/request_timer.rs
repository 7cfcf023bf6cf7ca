//! Retry timing for failed requests
//!
//! Server-provided retry delays override the local exponential backoff.

use crate::consts::cli_consts::retry;
use std::cmp::min;
use std::time::Duration;

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTimerConfig {
    /// Delay before the first retry; doubled for each further retry
    pub base_retry_delay: Duration,
    /// Upper bound for any retry delay, server-provided ones included
    pub max_retry_delay: Duration,
    /// Retries allowed after the first failed attempt
    pub max_retries: u32,
}

impl RequestTimerConfig {
    pub fn exponential(base_retry_delay: Duration, max_retry_delay: Duration, max_retries: u32) -> Self {
        Self {
            base_retry_delay,
            max_retry_delay,
            max_retries,
        }
    }
}

impl Default for RequestTimerConfig {
    fn default() -> Self {
        Self::exponential(
            retry::base_retry_delay(),
            retry::max_retry_delay(),
            retry::MAX_RETRIES,
        )
    }
}

/// Tracks consecutive failures of one request stream and decides when (and
/// whether) the next retry happens.
#[derive(Debug, Clone)]
pub struct RequestTimer {
    config: RequestTimerConfig,
    consecutive_failures: u32,
}

impl RequestTimer {
    pub fn new(config: RequestTimerConfig) -> Self {
        Self {
            config,
            consecutive_failures: 0,
        }
    }

    /// Record a successful request
    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
    }

    /// Record a failed request with optional server-provided retry delay.
    ///
    /// Returns the delay before the next retry, or `None` once the retry
    /// budget is spent. Spending the budget resets the failure count so the
    /// next regular attempt starts with a fresh budget.
    pub fn record_failure(&mut self, server_retry_delay: Option<Duration>) -> Option<Duration> {
        self.consecutive_failures += 1;
        if self.consecutive_failures > self.config.max_retries {
            self.consecutive_failures = 0;
            return None;
        }

        // Server retry delay overrides the local backoff
        let delay = server_retry_delay.unwrap_or_else(|| self.backoff_delay());
        Some(min(delay, self.config.max_retry_delay))
    }

    /// Abandon retrying after a failure that retrying cannot fix.
    pub fn give_up(&mut self) {
        self.consecutive_failures = 0;
    }

    fn backoff_delay(&self) -> Duration {
        let exponent = self.consecutive_failures.saturating_sub(1).min(16);
        self.config
            .base_retry_delay
            .saturating_mul(1u32 << exponent)
    }
}

impl Default for RequestTimer {
    fn default() -> Self {
        Self::new(RequestTimerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_until_budget_is_spent() {
        let mut timer = RequestTimer::default();
        assert_eq!(timer.record_failure(None), Some(Duration::from_secs(1)));
        assert_eq!(timer.record_failure(None), Some(Duration::from_secs(2)));
        assert_eq!(timer.record_failure(None), Some(Duration::from_secs(4)));
        assert_eq!(timer.record_failure(None), None);

        // The budget starts over afterwards
        assert_eq!(timer.record_failure(None), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_server_retry_overrides_backoff() {
        let mut timer = RequestTimer::default();
        assert_eq!(
            timer.record_failure(Some(Duration::from_secs(7))),
            Some(Duration::from_secs(7))
        );
    }

    #[test]
    fn test_delays_are_capped() {
        let config = RequestTimerConfig::exponential(
            Duration::from_secs(20),
            Duration::from_secs(30),
            5,
        );
        let mut timer = RequestTimer::new(config);
        assert_eq!(timer.record_failure(None), Some(Duration::from_secs(20)));
        assert_eq!(timer.record_failure(None), Some(Duration::from_secs(30)));
        assert_eq!(
            timer.record_failure(Some(Duration::from_secs(600))),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_success_resets_failures() {
        let mut timer = RequestTimer::default();
        timer.record_failure(None);
        timer.record_failure(None);
        timer.record_success();
        assert_eq!(timer.record_failure(None), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_give_up_resets_failures() {
        let mut timer = RequestTimer::default();
        timer.record_failure(None);
        timer.record_failure(None);
        timer.give_up();
        assert_eq!(timer.record_failure(None), Some(Duration::from_secs(1)));
    }
}
