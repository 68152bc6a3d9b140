//! Project and project membership repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::project::ProjectRole,
    server::{
        error::AppError,
        model::{
            project::{CreateProjectParam, Project, ProjectMember, UpdateProjectParam},
            user::User,
        },
    },
};

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateProjectParam) -> Result<Project, DbErr> {
        let entity = entity::project::ActiveModel {
            org_id: ActiveValue::Set(param.org_id),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            archived: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(entity))
    }

    pub async fn find_by_id(&self, project_id: i32) -> Result<Option<Project>, DbErr> {
        let entity = entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Project::from_entity))
    }

    /// Projects of an organization, newest first.
    pub async fn get_by_org(&self, org_id: i32) -> Result<Vec<Project>, DbErr> {
        let entities = entity::prelude::Project::find()
            .filter(entity::project::Column::OrgId.eq(org_id))
            .order_by_desc(entity::project::Column::CreatedAt)
            .order_by_desc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Project::from_entity).collect())
    }

    /// Updates name, description and archive flag.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - Updated project
    /// - `Ok(None)` - No project with that id
    pub async fn update(&self, param: UpdateProjectParam) -> Result<Option<Project>, DbErr> {
        let Some(existing) = entity::prelude::Project::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::project::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.archived = ActiveValue::Set(param.archived);
        let entity = active.update(self.db).await?;

        Ok(Some(Project::from_entity(entity)))
    }

    pub async fn delete(&self, project_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Project::delete_by_id(project_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_role(
        &self,
        project_id: i32,
        user_id: i32,
    ) -> Result<Option<ProjectRole>, AppError> {
        let membership = entity::prelude::ProjectUser::find_by_id((project_id, user_id))
            .one(self.db)
            .await?;

        match membership {
            Some(membership) => Ok(Some(ProjectRole::from_stored(&membership.role)?)),
            None => Ok(None),
        }
    }

    pub async fn add_member(
        &self,
        project_id: i32,
        user_id: i32,
        role: ProjectRole,
    ) -> Result<(), DbErr> {
        entity::project_user::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn set_role(
        &self,
        project_id: i32,
        user_id: i32,
        role: ProjectRole,
    ) -> Result<(), DbErr> {
        entity::project_user::ActiveModel {
            project_id: ActiveValue::Unchanged(project_id),
            user_id: ActiveValue::Unchanged(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn remove_member(&self, project_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ProjectUser::delete_by_id((project_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Members and invitees of a project, ordered by user id.
    pub async fn get_members(&self, project_id: i32) -> Result<Vec<ProjectMember>, AppError> {
        let rows = entity::prelude::ProjectUser::find()
            .filter(entity::project_user::Column::ProjectId.eq(project_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::project_user::Column::UserId)
            .all(self.db)
            .await?;

        let mut members = Vec::with_capacity(rows.len());
        for (membership, user) in rows {
            if let Some(user) = user {
                members.push(ProjectMember {
                    user: User::from_entity(user),
                    role: ProjectRole::from_stored(&membership.role)?,
                });
            }
        }

        Ok(members)
    }

    /// Ids of the project's admins, ordered ascending.
    pub async fn get_admin_ids(&self, project_id: i32) -> Result<Vec<i32>, DbErr> {
        let memberships = entity::prelude::ProjectUser::find()
            .filter(entity::project_user::Column::ProjectId.eq(project_id))
            .filter(entity::project_user::Column::Role.eq(ProjectRole::Admin.as_str()))
            .order_by_asc(entity::project_user::Column::UserId)
            .all(self.db)
            .await?;

        Ok(memberships.into_iter().map(|m| m.user_id).collect())
    }
}
