//! Project factory for creating test projects and memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    org_id: i32,
    name: String,
    archived: bool,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Project {id}"`
    /// - archived: `false`
    pub fn new(db: &'a DatabaseConnection, org_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            org_id,
            name: format!("Project {}", id),
            archived: false,
        }
    }

    /// Sets the project name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the project is archived.
    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            org_id: ActiveValue::Set(self.org_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Test project".to_string()),
            archived: ActiveValue::Set(self.archived),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values inside the given organization.
pub async fn create_project(
    db: &DatabaseConnection,
    org_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, org_id).build().await
}

/// Adds a user to a project with the given role (`Admin`, `Dev` or `Invited`).
pub async fn add_member(
    db: &DatabaseConnection,
    project_id: i32,
    user_id: i32,
    role: &str,
) -> Result<entity::project_user::Model, DbErr> {
    entity::project_user::ActiveModel {
        project_id: ActiveValue::Set(project_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role.to_string()),
    }
    .insert(db)
    .await
}
