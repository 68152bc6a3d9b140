//! User preference overlay.
//!
//! Preferences are stored sparsely: a `user_preference` row exists only for keys
//! the user has changed. Reads collect the stored rows into a key → value map and
//! deserialize it into `UserPreference`, whose serde defaults fill every key that
//! has no row. Writes only touch the keys present in the update.

use std::collections::HashMap;

use serde::Deserialize;

use crate::model::preference::{
    NotificationChannel, PreferenceDto, Toggle, UpdatePreferenceDto,
};
use crate::server::error::internal::InternalError;

/// The nine preference keys seeded into the `preference` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    OrgNotif,
    ProjectNotif,
    TaskNotif,
    ProjectDiscussionNotif,
    PrivateDiscussionNotif,
    ReportNotif,
    FriendNotif,
    ContribNotif,
    FriendInvite,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 9] = [
        Self::OrgNotif,
        Self::ProjectNotif,
        Self::TaskNotif,
        Self::ProjectDiscussionNotif,
        Self::PrivateDiscussionNotif,
        Self::ReportNotif,
        Self::FriendNotif,
        Self::ContribNotif,
        Self::FriendInvite,
    ];

    /// Name stored in `preference.name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrgNotif => "org_notif",
            Self::ProjectNotif => "project_notif",
            Self::TaskNotif => "task_notif",
            Self::ProjectDiscussionNotif => "project_discussion_notif",
            Self::PrivateDiscussionNotif => "private_discussion_notif",
            Self::ReportNotif => "report_notif",
            Self::FriendNotif => "friend_notif",
            Self::ContribNotif => "contrib_notif",
            Self::FriendInvite => "friend_invite",
        }
    }
}

impl NotificationChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
            Self::Email => "email",
        }
    }
}

impl Toggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }
}

/// Resolved preferences of a single user.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct UserPreference {
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

impl UserPreference {
    /// Parses the sparse stored map. Unknown keys are ignored; absent keys take defaults.
    pub fn from_sparse(values: HashMap<String, String>) -> Result<Self, InternalError> {
        let value = serde_json::to_value(values)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Delivery channel for a notification key. `FriendInvite` is not a channel
    /// and maps `on`/`off` onto the matching channel.
    pub fn channel(&self, key: PreferenceKey) -> NotificationChannel {
        match key {
            PreferenceKey::OrgNotif => self.org_notif,
            PreferenceKey::ProjectNotif => self.project_notif,
            PreferenceKey::TaskNotif => self.task_notif,
            PreferenceKey::ProjectDiscussionNotif => self.project_discussion_notif,
            PreferenceKey::PrivateDiscussionNotif => self.private_discussion_notif,
            PreferenceKey::ReportNotif => self.report_notif,
            PreferenceKey::FriendNotif => self.friend_notif,
            PreferenceKey::ContribNotif => self.contrib_notif,
            PreferenceKey::FriendInvite => match self.friend_invite {
                Toggle::On => NotificationChannel::On,
                Toggle::Off => NotificationChannel::Off,
            },
        }
    }

    pub fn accepts_friend_invites(&self) -> bool {
        self.friend_invite == Toggle::On
    }

    pub fn into_dto(self) -> PreferenceDto {
        PreferenceDto {
            org_notif: self.org_notif,
            project_notif: self.project_notif,
            task_notif: self.task_notif,
            project_discussion_notif: self.project_discussion_notif,
            private_discussion_notif: self.private_discussion_notif,
            report_notif: self.report_notif,
            friend_notif: self.friend_notif,
            contrib_notif: self.contrib_notif,
            friend_invite: self.friend_invite,
        }
    }
}

/// Keys to write for one user, each with its serialized value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePreferenceParam {
    pub values: Vec<(PreferenceKey, &'static str)>,
}

impl UpdatePreferenceParam {
    pub fn from_dto(dto: UpdatePreferenceDto) -> Self {
        let channels = [
            (PreferenceKey::OrgNotif, dto.org_notif),
            (PreferenceKey::ProjectNotif, dto.project_notif),
            (PreferenceKey::TaskNotif, dto.task_notif),
            (PreferenceKey::ProjectDiscussionNotif, dto.project_discussion_notif),
            (PreferenceKey::PrivateDiscussionNotif, dto.private_discussion_notif),
            (PreferenceKey::ReportNotif, dto.report_notif),
            (PreferenceKey::FriendNotif, dto.friend_notif),
            (PreferenceKey::ContribNotif, dto.contrib_notif),
        ];

        let mut values: Vec<(PreferenceKey, &'static str)> = channels
            .into_iter()
            .filter_map(|(key, channel)| channel.map(|c| (key, c.as_str())))
            .collect();
        if let Some(invite) = dto.friend_invite {
            values.push((PreferenceKey::FriendInvite, invite.as_str()));
        }

        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
