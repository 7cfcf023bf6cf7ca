//! Dashboard screen state
//!
//! Everything the screen tracks that is not derived from the controller:
//! the animation tick and the recent activity log.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event as WorkerEvent;
use crate::logging::{LogLevel, get_rust_log_level};
use crate::ui::app::UIConfig;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct DashboardState {
    /// Animation tick counter
    pub tick: usize,
    /// Recent events, oldest first
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to paint the theme background
    pub with_background_color: bool,
    /// Events below this level stay out of the log
    pub log_threshold: LogLevel,
}

impl DashboardState {
    pub fn new(ui_config: &UIConfig) -> Self {
        Self {
            tick: 0,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            log_threshold: get_rust_log_level(),
        }
    }

    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Add an event to activity logs with size limit
    pub fn add_event(&mut self, event: WorkerEvent) {
        if !event.should_display_at(self.log_threshold) {
            return;
        }
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn latest_event(&self) -> Option<&WorkerEvent> {
        self.activity_logs.back()
    }

    /// Fetch errors are diagnostics, shown only when debugging.
    pub fn shows_fetch_errors(&self) -> bool {
        self.log_threshold <= LogLevel::Debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventType, Source};
    use crate::logging::LogLevel;

    fn success(msg: &str) -> WorkerEvent {
        WorkerEvent::new(
            Source::TopAssets,
            msg.to_string(),
            EventType::Success,
            LogLevel::Info,
        )
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = DashboardState::new(&UIConfig::new(true));
        for i in 0..MAX_ACTIVITY_LOGS + 5 {
            state.add_event(success(&format!("event {}", i)));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(
            state.latest_event().map(|event| event.msg.as_str()),
            Some(format!("event {}", MAX_ACTIVITY_LOGS + 4).as_str())
        );
    }

    #[test]
    fn test_fetch_failure_event_is_not_logged_by_default() {
        let mut state = DashboardState::new(&UIConfig::new(true));
        state.log_threshold = LogLevel::Info;
        state.add_event(WorkerEvent::new(
            Source::AllAssets,
            "Failed to fetch all assets: HTTP error with status 503".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        assert!(state.latest_event().is_none());
        assert!(!state.shows_fetch_errors());

        state.log_threshold = LogLevel::Debug;
        assert!(state.shows_fetch_errors());
    }

    #[test]
    fn test_tick_advances() {
        let mut state = DashboardState::new(&UIConfig::new(false));
        state.update();
        state.update();
        assert_eq!(state.tick, 2);
        assert!(!state.with_background_color);
    }
}
