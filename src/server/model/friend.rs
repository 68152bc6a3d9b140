//! Friendship edge model.
//!
//! A friendship is stored as a single directed edge per unordered pair of users.
//! While pending, `from_user_id` is the sender. Once accepted, the acceptor is
//! stored as `from_user_id`. The caller-relative `FriendStatus` is derived from
//! the edge by `FriendEdge::status_for`.

use chrono::{DateTime, Utc};

use crate::{
    model::friend::{FriendDto, FriendStatus},
    server::{error::internal::InternalError, model::user::User},
};

/// Status as persisted in the `friend.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStatus {
    Pending,
    Accepted,
}

impl EdgeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        match value {
            "Pending" => Ok(Self::Pending),
            "Accepted" => Ok(Self::Accepted),
            other => Err(InternalError::InvalidEnumValue {
                kind: "friend status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FriendEdge {
    pub from_user_id: i32,
    pub to_user_id: i32,
    pub status: EdgeStatus,
    pub created_at: DateTime<Utc>,
}

impl FriendEdge {
    pub fn from_entity(entity: entity::friend::Model) -> Result<Self, InternalError> {
        Ok(Self {
            from_user_id: entity.from_user_id,
            to_user_id: entity.to_user_id,
            status: EdgeStatus::from_stored(&entity.status)?,
            created_at: entity.created_at,
        })
    }

    /// Status of this edge as seen by `user_id`.
    ///
    /// Accepted edges read `Accepted` from both sides. A pending edge reads
    /// `Sent` for the stored sender and `Pending` for the other endpoint.
    pub fn status_for(&self, user_id: i32) -> FriendStatus {
        match self.status {
            EdgeStatus::Accepted => FriendStatus::Accepted,
            EdgeStatus::Pending if self.from_user_id == user_id => FriendStatus::Sent,
            EdgeStatus::Pending => FriendStatus::Pending,
        }
    }

    /// The endpoint that is not `user_id`.
    pub fn other(&self, user_id: i32) -> i32 {
        if self.from_user_id == user_id {
            self.to_user_id
        } else {
            self.from_user_id
        }
    }
}

/// A friend (or friend request) of some user, resolved to the other user's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Friend {
    pub user: User,
    pub status: FriendStatus,
}

impl Friend {
    pub fn into_dto(self) -> FriendDto {
        FriendDto {
            user: self.user.into_dto(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: i32, to: i32, status: EdgeStatus) -> FriendEdge {
        FriendEdge {
            from_user_id: from,
            to_user_id: to,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn pending_edge_reads_sent_for_sender_and_pending_for_receiver() {
        let pending = edge(1, 2, EdgeStatus::Pending);

        assert_eq!(pending.status_for(1), FriendStatus::Sent);
        assert_eq!(pending.status_for(2), FriendStatus::Pending);
    }

    #[test]
    fn accepted_edge_reads_accepted_from_both_sides() {
        let accepted = edge(2, 1, EdgeStatus::Accepted);

        assert_eq!(accepted.status_for(1), FriendStatus::Accepted);
        assert_eq!(accepted.status_for(2), FriendStatus::Accepted);
    }

    #[test]
    fn rejects_unknown_stored_status() {
        assert!(EdgeStatus::from_stored("Blocked").is_err());
    }
}
