//! Notification reading and delivery.
//!
//! `NotificationService` serves a user's own notifications. `NotificationListener`
//! turns domain events into notifications, honoring each recipient's preference
//! for the notification's category.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::preference::NotificationChannel,
    server::{
        data::{notification::NotificationRepository, user::UserRepository},
        error::AppError,
        model::{
            event::DomainEvent,
            notification::{CreateNotificationParam, Notification},
        },
        service::{event::EventListener, mailer::Mailer, preference::PreferenceService},
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        NotificationRepository::new(self.db).get_by_user(user_id).await
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(())` - Marked as read
    /// - `Err(AppError::NotFound)` - No such notification owned by the user
    pub async fn read(&self, user_id: i32, notification_id: i32) -> Result<(), AppError> {
        let found = NotificationRepository::new(self.db)
            .mark_read(notification_id, user_id)
            .await?;
        if !found {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }

    /// Marks every notification of the user as read, returning how many changed.
    pub async fn read_all(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }

    pub async fn delete(&self, user_id: i32, notification_id: i32) -> Result<(), AppError> {
        let found = NotificationRepository::new(self.db)
            .delete(notification_id, user_id)
            .await?;
        if !found {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }
}

/// Event listener that stores notifications and sends e-mails.
pub struct NotificationListener {
    db: DatabaseConnection,
    mailer: Mailer,
    app_url: String,
}

impl NotificationListener {
    pub fn new(db: DatabaseConnection, mailer: Mailer, app_url: String) -> Self {
        Self {
            db,
            mailer,
            app_url,
        }
    }

    /// Delivers one notification according to the recipient's preference.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Stored (and e-mailed when the channel is `email`)
    /// - `Ok(None)` - The recipient turned this category off
    /// - `Err(AppError)` - Preference lookup or insert failed
    pub async fn deliver(
        &self,
        param: CreateNotificationParam,
    ) -> Result<Option<Notification>, AppError> {
        let preference = PreferenceService::new(&self.db).get(param.user_id).await?;
        let channel = preference.channel(param.category.preference_key());

        if channel == NotificationChannel::Off {
            tracing::debug!(
                "User {} has {} notifications off",
                param.user_id,
                param.category.as_str()
            );
            return Ok(None);
        }

        let notification = NotificationRepository::new(&self.db).create(param).await?;

        if channel == NotificationChannel::Email {
            match UserRepository::new(&self.db)
                .find_by_id(notification.user_id)
                .await?
            {
                Some(user) => self.mailer.send(
                    user.email,
                    notification.title.clone(),
                    format!("{}\n\n{}", notification.description, self.app_url),
                ),
                None => tracing::warn!(
                    "Recipient {} of notification {} no longer exists",
                    notification.user_id,
                    notification.id
                ),
            }
        }

        Ok(Some(notification))
    }
}

#[async_trait]
impl EventListener for NotificationListener {
    async fn on_event(&self, event: &DomainEvent) {
        for param in event.notifications() {
            let user_id = param.user_id;
            let category = param.category;

            if let Err(e) = self.deliver(param).await {
                tracing::error!(
                    "Failed to deliver {} notification to user {}: {}",
                    category.as_str(),
                    user_id,
                    e
                );
            }
        }
    }
}
