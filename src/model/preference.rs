use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Delivery channel for a notification preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Off,
    #[default]
    On,
    Email,
}

/// Whether other users may send friend requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Off,
    #[default]
    On,
}

/// Fully resolved preferences of a user. Keys never stored resolve to their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PreferenceDto {
    pub org_notif: NotificationChannel,
    pub project_notif: NotificationChannel,
    pub task_notif: NotificationChannel,
    pub project_discussion_notif: NotificationChannel,
    pub private_discussion_notif: NotificationChannel,
    pub report_notif: NotificationChannel,
    pub friend_notif: NotificationChannel,
    pub contrib_notif: NotificationChannel,
    pub friend_invite: Toggle,
}

/// Partial preference update. Only present keys are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePreferenceDto {
    pub org_notif: Option<NotificationChannel>,
    pub project_notif: Option<NotificationChannel>,
    pub task_notif: Option<NotificationChannel>,
    pub project_discussion_notif: Option<NotificationChannel>,
    pub private_discussion_notif: Option<NotificationChannel>,
    pub report_notif: Option<NotificationChannel>,
    pub friend_notif: Option<NotificationChannel>,
    pub contrib_notif: Option<NotificationChannel>,
    pub friend_invite: Option<Toggle>,
}
