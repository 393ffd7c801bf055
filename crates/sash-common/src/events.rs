//! Event fan-out between the controlling process and its windows.
//!
//! The bus always broadcasts to every subscriber; events that carry a
//! `WindowId` are filtered on the receiving side. Lagging receivers drop
//! the oldest events per `tokio::sync::broadcast` semantics.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::WindowId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    WindowOpened(WindowId),
    WindowClosed(WindowId),
    WindowFocused(WindowId),
    SettingsChanged { key: String },
    Channel { name: String, payload: serde_json::Value },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish an event to every subscriber. Returns the number of
    /// receivers; zero when nobody is listening, which is not an error.
    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::Shutdown);

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::Shutdown));
    }

    #[tokio::test]
    async fn multiple_subscribers_see_the_same_event() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::WindowOpened(WindowId(7)));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::WindowOpened(id) if id == WindowId(7)));
        assert!(matches!(e2, Event::WindowOpened(id) if id == WindowId(7)));
    }

    #[tokio::test]
    async fn window_lifecycle_events_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let id = WindowId(1);

        bus.publish(Event::WindowOpened(id));
        bus.publish(Event::WindowFocused(id));
        bus.publish(Event::WindowClosed(id));

        assert!(matches!(rx.recv().await.unwrap(), Event::WindowOpened(i) if i == id));
        assert!(matches!(rx.recv().await.unwrap(), Event::WindowFocused(i) if i == id));
        assert!(matches!(rx.recv().await.unwrap(), Event::WindowClosed(i) if i == id));
    }

    #[tokio::test]
    async fn channel_event_carries_payload() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::Channel {
            name: "refresh".into(),
            payload: serde_json::json!({ "view": "main" }),
        });

        let event = rx.recv().await.unwrap();
        match event {
            Event::Channel { name, payload } => {
                assert_eq!(name, "refresh");
                assert_eq!(payload["view"], "main");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(Event::Shutdown), 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        assert_eq!(bus.publish(Event::SettingsChanged { key: "theme".into() }), 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
