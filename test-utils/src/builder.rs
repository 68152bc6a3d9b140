use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, fixture};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Friend};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Friend)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether the recognized preference keys should be inserted after table creation.
    seed_preferences: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            seed_preferences: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user table plus the tables every notification dispatch touches.
    ///
    /// Includes `User`, `Suspension`, `Notification`, `Preference` and `UserPreference`,
    /// and seeds the preference keys so preference lookups resolve. `Suspension` is
    /// here because every authenticated request checks it.
    pub fn with_user_tables(mut self) -> Self {
        self.seed_preferences = true;
        self.with_table(User)
            .with_table(Suspension)
            .with_table(Notification)
            .with_table(Preference)
            .with_table(UserPreference)
    }

    /// Adds user tables plus `Friend`.
    pub fn with_friend_tables(self) -> Self {
        self.with_user_tables().with_table(Friend)
    }

    /// Adds user tables plus the organization and project hierarchy down to tasks.
    ///
    /// Includes `Organization`, `OrganizationUser`, `Project`, `ProjectUser`, `Bucket`,
    /// `Task`, `TaskUser`, `Chatroom`, `ChatroomUser` and `Message`.
    pub fn with_project_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Organization)
            .with_table(OrganizationUser)
            .with_table(Project)
            .with_table(ProjectUser)
            .with_table(Bucket)
            .with_table(Task)
            .with_table(TaskUser)
            .with_table(Chatroom)
            .with_table(ChatroomUser)
            .with_table(Message)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_project_tables()
            .with_table(Friend)
            .with_table(Report)
            .with_table(Article)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements in the order they were added, then seeds preference keys when a
    /// preference table was requested through `with_user_tables()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if self.seed_preferences {
            fixture::preference::seed_preferences(setup.database().await?).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
