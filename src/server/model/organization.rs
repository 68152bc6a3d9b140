//! Organization domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::organization::{
        CreateOrganizationDto, MyOrganizationDto, OrgRole, OrganizationDto, OrganizationMemberDto,
    },
    server::{
        error::{internal::InternalError, AppError},
        model::user::User,
        util::validate::require_non_empty,
    },
};

impl OrgRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Member => "Member",
            Self::Invited => "Invited",
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        match value {
            "Admin" => Ok(Self::Admin),
            "Member" => Ok(Self::Member),
            "Invited" => Ok(Self::Invited),
            other => Err(InternalError::InvalidEnumValue {
                kind: "organization role",
                value: other.to_string(),
            }),
        }
    }

    /// Invited users are not members until they accept.
    pub fn is_member(&self) -> bool {
        !matches!(self, Self::Invited)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Organization {
    pub fn into_dto(self) -> OrganizationDto {
        OrganizationDto {
            id: self.id,
            name: self.name,
            description: self.description,
            address: self.address,
            phone: self.phone,
            category: self.category,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::organization::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            address: entity.address,
            phone: entity.phone,
            category: entity.category,
            created_at: entity.created_at,
        }
    }
}

/// Organization paired with the asking user's role.
#[derive(Debug, Clone, PartialEq)]
pub struct MyOrganization {
    pub organization: Organization,
    pub role: OrgRole,
}

impl MyOrganization {
    pub fn into_dto(self) -> MyOrganizationDto {
        MyOrganizationDto {
            organization: self.organization.into_dto(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationMember {
    pub user: User,
    pub role: OrgRole,
}

impl OrganizationMember {
    pub fn into_dto(self) -> OrganizationMemberDto {
        OrganizationMemberDto {
            user: self.user.into_dto(),
            role: self.role,
        }
    }
}

/// Parameters for creating or updating an organization's descriptive fields.
#[derive(Debug, Clone)]
pub struct OrganizationParam {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub category: String,
}

impl OrganizationParam {
    pub fn from_dto(dto: CreateOrganizationDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_empty("name", dto.name)?,
            description: dto.description.trim().to_string(),
            address: dto.address.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            category: dto.category.trim().to_string(),
        })
    }
}
