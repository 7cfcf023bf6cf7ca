//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use super::palette::Palette;
use crate::events::{Event as WorkerEvent, EventType, Source};
use ratatui::prelude::Color;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Get a ratatui color for an activity log entry
pub fn get_event_color(event: &WorkerEvent, palette: &Palette) -> Color {
    match (event.event_type, event.source) {
        (EventType::Error, _) => palette.error,
        (EventType::Success, _) => palette.price,
        (_, Source::Preferences) => palette.accent,
        _ => palette.muted,
    }
}

/// Format compact timestamp (HH:MM:SS) from a full "YYYY-MM-DD HH:MM:SS" timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    match timestamp.split_once(' ') {
        Some((_, time)) if time.len() >= 8 => time[..8].to_string(),
        // Fallback to original timestamp if parsing fails
        _ => timestamp.to_string(),
    }
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose HTTP error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Price index timed out - retrying...".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error - retrying...".to_string();
    }
    if msg.contains("status 429") {
        return "Rate limited by price index - backing off...".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}
