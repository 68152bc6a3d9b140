//! Organization and membership repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::organization::OrgRole,
    server::{
        error::AppError,
        model::{
            organization::{MyOrganization, Organization, OrganizationMember, OrganizationParam},
            user::User,
        },
    },
};

pub struct OrganizationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: OrganizationParam) -> Result<Organization, DbErr> {
        let entity = entity::organization::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            address: ActiveValue::Set(param.address),
            phone: ActiveValue::Set(param.phone),
            category: ActiveValue::Set(param.category),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Organization::from_entity(entity))
    }

    pub async fn find_by_id(&self, org_id: i32) -> Result<Option<Organization>, DbErr> {
        let entity = entity::prelude::Organization::find_by_id(org_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Organization::from_entity))
    }

    /// Updates the descriptive fields of an organization.
    ///
    /// # Returns
    /// - `Ok(Some(Organization))` - Updated organization
    /// - `Ok(None)` - No organization with that id
    pub async fn update(
        &self,
        org_id: i32,
        param: OrganizationParam,
    ) -> Result<Option<Organization>, DbErr> {
        let Some(existing) = entity::prelude::Organization::find_by_id(org_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::organization::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.address = ActiveValue::Set(param.address);
        active.phone = ActiveValue::Set(param.phone);
        active.category = ActiveValue::Set(param.category);
        let entity = active.update(self.db).await?;

        Ok(Some(Organization::from_entity(entity)))
    }

    /// Deletes an organization. Projects, buckets, tasks and memberships cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Organization deleted
    /// - `Ok(false)` - No organization with that id
    pub async fn delete(&self, org_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Organization::delete_by_id(org_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Organizations the user belongs to or is invited to, newest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<MyOrganization>, AppError> {
        let rows = entity::prelude::OrganizationUser::find()
            .filter(entity::organization_user::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Organization)
            .order_by_desc(entity::organization_user::Column::OrgId)
            .all(self.db)
            .await?;

        let mut organizations = Vec::with_capacity(rows.len());
        for (membership, organization) in rows {
            if let Some(organization) = organization {
                organizations.push(MyOrganization {
                    organization: Organization::from_entity(organization),
                    role: OrgRole::from_stored(&membership.role)?,
                });
            }
        }

        Ok(organizations)
    }

    /// Role of the user in the organization, if any.
    pub async fn get_role(&self, org_id: i32, user_id: i32) -> Result<Option<OrgRole>, AppError> {
        let membership = entity::prelude::OrganizationUser::find_by_id((org_id, user_id))
            .one(self.db)
            .await?;

        match membership {
            Some(membership) => Ok(Some(OrgRole::from_stored(&membership.role)?)),
            None => Ok(None),
        }
    }

    /// Adds a membership row. Fails if the user already has a role in the organization.
    pub async fn add_member(&self, org_id: i32, user_id: i32, role: OrgRole) -> Result<(), DbErr> {
        entity::organization_user::ActiveModel {
            org_id: ActiveValue::Set(org_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn set_role(&self, org_id: i32, user_id: i32, role: OrgRole) -> Result<(), DbErr> {
        entity::organization_user::ActiveModel {
            org_id: ActiveValue::Unchanged(org_id),
            user_id: ActiveValue::Unchanged(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Removes a membership row.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - The user had no role in the organization
    pub async fn remove_member(&self, org_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::OrganizationUser::delete_by_id((org_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Members and invitees of an organization, ordered by user id.
    pub async fn get_members(&self, org_id: i32) -> Result<Vec<OrganizationMember>, AppError> {
        let rows = entity::prelude::OrganizationUser::find()
            .filter(entity::organization_user::Column::OrgId.eq(org_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::organization_user::Column::UserId)
            .all(self.db)
            .await?;

        let mut members = Vec::with_capacity(rows.len());
        for (membership, user) in rows {
            if let Some(user) = user {
                members.push(OrganizationMember {
                    user: User::from_entity(user),
                    role: OrgRole::from_stored(&membership.role)?,
                });
            }
        }

        Ok(members)
    }
}
