//! Domain event bus.
//!
//! Services publish `DomainEvent`s after their writes commit. The bus hands each
//! event to every registered listener in registration order and awaits them one
//! after another. Listeners own their error handling: a failing listener never
//! fails the action that emitted the event.

use async_trait::async_trait;

use crate::server::model::event::DomainEvent;

/// Reacts to domain events.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Handles one event. Implementations log their own failures.
    async fn on_event(&self, event: &DomainEvent);
}

/// Ordered collection of event listeners.
pub struct EventBus {
    listeners: Vec<Box<dyn EventListener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn register(&mut self, listener: Box<dyn EventListener>) {
        self.listeners.push(listener);
    }

    /// Delivers the event to every listener in registration order.
    pub async fn emit(&self, event: DomainEvent) {
        tracing::debug!("Emitting {:?}", event);

        for listener in &self.listeners {
            listener.on_event(&event).await;
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl EventListener for Recorder {
        async fn on_event(&self, event: &DomainEvent) {
            let label = match event {
                DomainEvent::ReportResolved { report_id, .. } => format!("report {}", report_id),
                _ => "other".to_string(),
            };
            self.log
                .lock()
                .unwrap()
                .push(format!("{}: {}", self.name, label));
        }
    }

    #[tokio::test]
    async fn delivers_to_listeners_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.register(Box::new(Recorder {
            name: "first",
            log: log.clone(),
        }));
        bus.register(Box::new(Recorder {
            name: "second",
            log: log.clone(),
        }));

        bus.emit(DomainEvent::ReportResolved {
            report_id: 7,
            report_title: "Spam".to_string(),
            reporter_id: 1,
        })
        .await;

        assert_eq!(
            *log.lock().unwrap(),
            vec!["first: report 7".to_string(), "second: report 7".to_string()]
        );
    }

    #[tokio::test]
    async fn emitting_without_listeners_is_a_no_op() {
        EventBus::new()
            .emit(DomainEvent::FriendRequested {
                sender_id: 1,
                sender_name: "Sari".to_string(),
                recipient_id: 2,
            })
            .await;
    }
}
