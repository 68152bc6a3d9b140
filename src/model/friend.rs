use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Friendship status between two users, always relative to the asking user.
///
/// - `None` - no edge exists
/// - `Sent` - the asking user sent a request that is still pending
/// - `Pending` - the other user sent a request the asking user has not answered
/// - `Accepted` - the users are friends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FriendStatus {
    None,
    Sent,
    Pending,
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FriendDto {
    pub user: UserDto,
    pub status: FriendStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendStatusDto {
    pub status: FriendStatus,
}
