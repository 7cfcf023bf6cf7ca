pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events kept by the dashboard for display.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events from fetch workers
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of buffered fetch outcomes waiting for the UI loop
    pub const OUTCOME_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // QUERY CONFIGURATION
    // =============================================================================

    /// Asset query configuration
    pub mod queries {
        use std::time::Duration;

        /// Number of assets shown in the default ranked view
        pub const TOP_ASSETS_LIMIT: usize = 20;

        /// Automatic refresh period of the top-N query (milliseconds)
        pub const TOP_REFRESH_INTERVAL_MS: u64 = 30_000;

        /// Helper function to get the top-N refresh interval
        pub const fn top_refresh_interval() -> Duration {
            Duration::from_millis(TOP_REFRESH_INTERVAL_MS)
        }
    }

    /// Retry behaviour after a failed fetch
    pub mod retry {
        use std::time::Duration;

        /// Number of retries after the first failed attempt
        pub const MAX_RETRIES: u32 = 3;

        /// Delay before the first retry (milliseconds); doubles on each retry
        pub const BASE_RETRY_DELAY_MS: u64 = 1_000;

        /// Upper bound for any computed or server-provided retry delay (milliseconds)
        pub const MAX_RETRY_DELAY_MS: u64 = 30_000;

        pub const fn base_retry_delay() -> Duration {
            Duration::from_millis(BASE_RETRY_DELAY_MS)
        }

        pub const fn max_retry_delay() -> Duration {
            Duration::from_millis(MAX_RETRY_DELAY_MS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        /// Connect timeout for the price index (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout for the price index (seconds)
        /// The full asset list is a few hundred records, well within this bound.
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    pub mod display {
        use std::time::Duration;

        /// Viewports at or below this width (pixels) use the compact layout
        pub const MOBILE_BREAKPOINT_PX: u32 = 768;

        /// Assumed width of one terminal cell when the terminal reports no pixel size
        pub const FALLBACK_CELL_WIDTH_PX: u32 = 8;

        /// UI redraw and scheduler polling period (milliseconds)
        pub const UI_TICK_MS: u64 = 250;

        pub const fn ui_tick() -> Duration {
            Duration::from_millis(UI_TICK_MS)
        }
    }
}
