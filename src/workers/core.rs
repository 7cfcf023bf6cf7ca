//! Core worker utilities

use crate::events::{Event, EventType, Source};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_fetch_event(
        &self,
        source: Source,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::new(source, message, event_type, log_level))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_event_reaches_receiver() {
        let (sender, mut receiver) = mpsc::channel(4);
        let events = EventSender::new(sender);
        events
            .send_fetch_event(
                Source::TopAssets,
                "Loaded 20 assets".to_string(),
                EventType::Success,
                LogLevel::Info,
            )
            .await;

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.source, Source::TopAssets);
        assert_eq!(event.msg, "Loaded 20 assets");
        assert_eq!(event.event_type, EventType::Success);
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped_is_ignored() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);
        EventSender::new(sender)
            .send_fetch_event(
                Source::Preferences,
                "ignored".to_string(),
                EventType::Error,
                LogLevel::Warn,
            )
            .await;
    }
}
