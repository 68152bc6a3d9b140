//! Domain events emitted by services after their writes commit.
//!
//! Each event carries everything needed to describe it to its recipients, so
//! listeners never have to query the originating service again. The mapping from
//! an event to the notifications it produces lives in `DomainEvent::notifications`.

use crate::{
    model::notification::NotificationCategory,
    server::model::notification::CreateNotificationParam,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    FriendRequested {
        sender_id: i32,
        sender_name: String,
        recipient_id: i32,
    },
    FriendAccepted {
        acceptor_id: i32,
        acceptor_name: String,
        sender_id: i32,
    },
    OrganizationInvited {
        org_id: i32,
        org_name: String,
        inviter_name: String,
        user_id: i32,
    },
    ProjectInvited {
        project_id: i32,
        project_name: String,
        inviter_name: String,
        user_id: i32,
    },
    TaskAssigned {
        task_id: i32,
        task_name: String,
        assigner_name: String,
        user_id: i32,
    },
    TaskCompleted {
        task_id: i32,
        task_name: String,
        completed_by: String,
        admin_ids: Vec<i32>,
    },
    MessageSent {
        chatroom_id: i32,
        chatroom_name: String,
        /// Present for project discussion rooms, absent for private rooms.
        project_id: Option<i32>,
        sender_name: String,
        recipient_ids: Vec<i32>,
    },
    ReportResolved {
        report_id: i32,
        report_title: String,
        reporter_id: i32,
    },
}

impl DomainEvent {
    /// Notifications this event produces, one per recipient.
    pub fn notifications(&self) -> Vec<CreateNotificationParam> {
        match self {
            Self::FriendRequested {
                sender_id,
                sender_name,
                recipient_id,
            } => vec![CreateNotificationParam {
                user_id: *recipient_id,
                title: "Permintaan pertemanan".to_string(),
                description: format!("{} mengirim permintaan pertemanan", sender_name),
                category: NotificationCategory::Teman,
                type_id: Some(*sender_id),
            }],
            Self::FriendAccepted {
                acceptor_id,
                acceptor_name,
                sender_id,
            } => vec![CreateNotificationParam {
                user_id: *sender_id,
                title: "Pertemanan diterima".to_string(),
                description: format!("{} menerima permintaan pertemanan Anda", acceptor_name),
                category: NotificationCategory::Teman,
                type_id: Some(*acceptor_id),
            }],
            Self::OrganizationInvited {
                org_id,
                org_name,
                inviter_name,
                user_id,
            } => vec![CreateNotificationParam {
                user_id: *user_id,
                title: "Undangan organisasi".to_string(),
                description: format!(
                    "{} mengundang Anda bergabung ke organisasi {}",
                    inviter_name, org_name
                ),
                category: NotificationCategory::Organisasi,
                type_id: Some(*org_id),
            }],
            Self::ProjectInvited {
                project_id,
                project_name,
                inviter_name,
                user_id,
            } => vec![CreateNotificationParam {
                user_id: *user_id,
                title: "Undangan proyek".to_string(),
                description: format!(
                    "{} mengundang Anda bergabung ke proyek {}",
                    inviter_name, project_name
                ),
                category: NotificationCategory::Proyek,
                type_id: Some(*project_id),
            }],
            Self::TaskAssigned {
                task_id,
                task_name,
                assigner_name,
                user_id,
            } => vec![CreateNotificationParam {
                user_id: *user_id,
                title: "Tugas baru".to_string(),
                description: format!("{} menugaskan Anda pada {}", assigner_name, task_name),
                category: NotificationCategory::Tugas,
                type_id: Some(*task_id),
            }],
            Self::TaskCompleted {
                task_id,
                task_name,
                completed_by,
                admin_ids,
            } => admin_ids
                .iter()
                .map(|admin_id| CreateNotificationParam {
                    user_id: *admin_id,
                    title: "Tugas selesai".to_string(),
                    description: format!("{} menyelesaikan {}", completed_by, task_name),
                    category: NotificationCategory::Kontribusi,
                    type_id: Some(*task_id),
                })
                .collect(),
            Self::MessageSent {
                chatroom_id,
                chatroom_name,
                project_id,
                sender_name,
                recipient_ids,
            } => {
                let category = if project_id.is_some() {
                    NotificationCategory::DiskusiProyek
                } else {
                    NotificationCategory::DiskusiPribadi
                };

                recipient_ids
                    .iter()
                    .map(|recipient_id| CreateNotificationParam {
                        user_id: *recipient_id,
                        title: format!("Pesan baru di {}", chatroom_name),
                        description: format!("{} mengirim pesan", sender_name),
                        category,
                        type_id: Some(*chatroom_id),
                    })
                    .collect()
            }
            Self::ReportResolved {
                report_id,
                report_title,
                reporter_id,
            } => vec![CreateNotificationParam {
                user_id: *reporter_id,
                title: "Laporan ditindaklanjuti".to_string(),
                description: format!("Laporan \"{}\" telah diselesaikan", report_title),
                category: NotificationCategory::Laporan,
                type_id: Some(*report_id),
            }],
        }
    }
}
