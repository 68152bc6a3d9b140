use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::friend::FriendStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub about: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// A user profile as seen by another user, including their friendship status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub friend_status: FriendStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub name: String,
    pub about: Option<String>,
}
