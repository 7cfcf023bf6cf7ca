//! Centralized error handling and classification

use crate::coincap::error::ApiError;
use crate::logging::LogLevel;

/// Centralized error handler for all price index requests
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level.
    ///
    /// Nothing here is worse than a warning: the dashboard keeps showing its
    /// last good data, so a failed refresh never needs the user's attention.
    pub fn classify_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Rate limiting - expected under load, low priority
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,

            // Schema drift or a proxy error page
            ApiError::Decode(_) => LogLevel::Warn,

            _ => LogLevel::Warn,
        }
    }

    /// Determine if an error should trigger retry logic
    pub fn should_retry(&self, error: &ApiError) -> bool {
        match error {
            // Retry on network/connection errors
            ApiError::Reqwest(_) => true,

            // A body that failed to decode will not decode on the next attempt
            ApiError::Decode(_) => false,

            ApiError::Http { status, .. } => match *status {
                // Timeout and rate limiting clear up on their own
                408 | 429 => true,
                // Other client errors won't change by retrying
                400..=499 => false,
                500..=599 => true,
                _ => false,
            },
        }
    }
}
