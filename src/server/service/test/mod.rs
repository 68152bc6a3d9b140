use sea_orm::DatabaseConnection;

use crate::server::service::{
    event::EventBus, mailer::Mailer, notification::NotificationListener,
};

mod friend;
mod organization;
mod preference;
mod project;
mod report;
mod suspension;
mod task;

/// Event bus with the notification listener registered and e-mail disabled.
fn notification_bus(db: &DatabaseConnection) -> EventBus {
    let mut events = EventBus::new();
    events.register(Box::new(NotificationListener::new(
        db.clone(),
        Mailer::disabled(),
        "http://localhost:8080".to_string(),
    )));
    events
}
