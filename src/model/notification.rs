use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category of a notification. Serialized with the labels shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum NotificationCategory {
    Organisasi,
    Proyek,
    Tugas,
    #[serde(rename = "Diskusi Proyek")]
    DiskusiProyek,
    #[serde(rename = "Diskusi Pribadi")]
    DiskusiPribadi,
    Laporan,
    Teman,
    Kontribusi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: NotificationCategory,
    pub type_id: Option<i32>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
