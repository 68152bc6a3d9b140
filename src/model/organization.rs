use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrgRole {
    Admin,
    Member,
    Invited,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrganizationDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// An organization together with the asking user's role in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MyOrganizationDto {
    pub organization: OrganizationDto,
    pub role: OrgRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrganizationDto {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrganizationMemberDto {
    pub user: UserDto,
    pub role: OrgRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InviteMemberDto {
    pub user_id: i32,
}
