//! Event System
//!
//! Types and implementations for fetch worker and preference events

use crate::logging::{LogLevel, get_rust_log_level, should_log};
use chrono::Local;
use std::fmt::Display;

/// Where an event originated.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Fetches of the ranked top-N list.
    TopAssets,
    /// Fetches of the complete asset list used for searching.
    AllAssets,
    /// Theme persistence.
    Preferences,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn preferences_warning(msg: String) -> Self {
        Self::new(Source::Preferences, msg, EventType::Error, LogLevel::Warn)
    }

    pub fn should_display(&self) -> bool {
        self.should_display_at(get_rust_log_level())
    }

    /// Whether the event is shown under the given log threshold.
    ///
    /// Fetch failures degrade silently: they only surface at Debug or below,
    /// whatever level the error handler assigned them.
    pub fn should_display_at(&self, threshold: LogLevel) -> bool {
        if self.is_fetch_failure() {
            return threshold <= LogLevel::Debug;
        }
        // Success events are only interesting when they clear the env threshold
        if self.event_type == EventType::Success && self.log_level >= LogLevel::Info {
            return true;
        }
        should_log(self.log_level, threshold)
    }

    fn is_fetch_failure(&self) -> bool {
        self.event_type == EventType::Error
            && matches!(self.source, Source::TopAssets | Source::AllAssets)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match self.source {
            Source::TopAssets => "top",
            Source::AllAssets => "all",
            Source::Preferences => "prefs",
        };
        write!(
            f,
            "{} [{}] [{}] {}",
            self.event_type, self.timestamp, source, self.msg
        )
    }
}
