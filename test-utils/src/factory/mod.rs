//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they depend on, and
//! `helpers` offers shortcuts that create a whole dependency chain at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let (org, project, bucket) =
//!         factory::helpers::create_bucket_with_dependencies(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .name("Alice")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod bucket;
pub mod friend;
pub mod helpers;
pub mod notification;
pub mod organization;
pub mod project;
pub mod task;
pub mod user;

pub use bucket::create_bucket;
pub use friend::create_friend_edge;
pub use organization::create_organization;
pub use project::create_project;
pub use task::create_task;
pub use user::create_user;
