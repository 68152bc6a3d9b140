//! Notification domain models.
//!
//! Every notification has a category, and every category is governed by exactly
//! one preference key. The recipient's value for that key decides whether the
//! notification is dropped, stored, or stored and e-mailed.

use chrono::{DateTime, Utc};

use crate::{
    model::notification::{NotificationCategory, NotificationDto},
    server::{error::internal::InternalError, model::preference::PreferenceKey},
};

impl NotificationCategory {
    /// Label stored in `notification.category` and shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organisasi => "Organisasi",
            Self::Proyek => "Proyek",
            Self::Tugas => "Tugas",
            Self::DiskusiProyek => "Diskusi Proyek",
            Self::DiskusiPribadi => "Diskusi Pribadi",
            Self::Laporan => "Laporan",
            Self::Teman => "Teman",
            Self::Kontribusi => "Kontribusi",
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        match value {
            "Organisasi" => Ok(Self::Organisasi),
            "Proyek" => Ok(Self::Proyek),
            "Tugas" => Ok(Self::Tugas),
            "Diskusi Proyek" => Ok(Self::DiskusiProyek),
            "Diskusi Pribadi" => Ok(Self::DiskusiPribadi),
            "Laporan" => Ok(Self::Laporan),
            "Teman" => Ok(Self::Teman),
            "Kontribusi" => Ok(Self::Kontribusi),
            other => Err(InternalError::InvalidEnumValue {
                kind: "notification category",
                value: other.to_string(),
            }),
        }
    }

    /// Preference key that controls delivery of this category.
    pub fn preference_key(&self) -> PreferenceKey {
        match self {
            Self::Organisasi => PreferenceKey::OrgNotif,
            Self::Proyek => PreferenceKey::ProjectNotif,
            Self::Tugas => PreferenceKey::TaskNotif,
            Self::DiskusiProyek => PreferenceKey::ProjectDiscussionNotif,
            Self::DiskusiPribadi => PreferenceKey::PrivateDiscussionNotif,
            Self::Laporan => PreferenceKey::ReportNotif,
            Self::Teman => PreferenceKey::FriendNotif,
            Self::Kontribusi => PreferenceKey::ContribNotif,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub category: NotificationCategory,
    /// Id of the entity the notification is about, interpreted per category.
    pub type_id: Option<i32>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            type_id: self.type_id,
            read: self.read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            description: entity.description,
            category: NotificationCategory::from_stored(&entity.category)?,
            type_id: entity.type_id,
            read: entity.read,
            created_at: entity.created_at,
        })
    }
}

/// A notification to deliver to one user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateNotificationParam {
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub category: NotificationCategory,
    pub type_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const CATEGORIES: [NotificationCategory; 8] = [
        NotificationCategory::Organisasi,
        NotificationCategory::Proyek,
        NotificationCategory::Tugas,
        NotificationCategory::DiskusiProyek,
        NotificationCategory::DiskusiPribadi,
        NotificationCategory::Laporan,
        NotificationCategory::Teman,
        NotificationCategory::Kontribusi,
    ];

    #[test]
    fn every_category_has_its_own_notification_key() {
        let keys: HashSet<PreferenceKey> = CATEGORIES.iter().map(|c| c.preference_key()).collect();

        assert_eq!(keys.len(), CATEGORIES.len());
        assert!(!keys.contains(&PreferenceKey::FriendInvite));
    }

    #[test]
    fn stored_label_round_trips() {
        for category in CATEGORIES {
            assert_eq!(
                NotificationCategory::from_stored(category.as_str()).unwrap(),
                category
            );
        }
    }

    #[test]
    fn stored_label_matches_serialized_label() {
        let json = serde_json::to_string(&NotificationCategory::DiskusiProyek).unwrap();

        assert_eq!(json, "\"Diskusi Proyek\"");
    }
}
