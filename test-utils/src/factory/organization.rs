//! Organization factory for creating test organizations and memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test organizations with customizable fields.
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
}

impl<'a> OrganizationFactory<'a> {
    /// Creates a new OrganizationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Organization {id}"`
    /// - category: `"Community"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Organization {}", id),
            category: "Community".to_string(),
        }
    }

    /// Sets the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the organization category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builds and inserts the organization entity into the database.
    pub async fn build(self) -> Result<entity::organization::Model, DbErr> {
        entity::organization::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Test organization".to_string()),
            address: ActiveValue::Set("Jl. Test No. 1".to_string()),
            phone: ActiveValue::Set("0800000000".to_string()),
            category: ActiveValue::Set(self.category),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    OrganizationFactory::new(db).build().await
}

/// Adds a user to an organization with the given role (`Admin`, `Member` or `Invited`).
pub async fn add_member(
    db: &DatabaseConnection,
    org_id: i32,
    user_id: i32,
    role: &str,
) -> Result<entity::organization_user::Model, DbErr> {
    entity::organization_user::ActiveModel {
        org_id: ActiveValue::Set(org_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role.to_string()),
    }
    .insert(db)
    .await
}
