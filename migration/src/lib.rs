pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_suspension_table;
mod m20260101_000003_create_report_table;
mod m20260101_000004_create_friend_table;
mod m20260101_000005_create_organization_table;
mod m20260101_000006_create_organization_user_table;
mod m20260101_000007_create_project_table;
mod m20260101_000008_create_project_user_table;
mod m20260101_000009_create_bucket_table;
mod m20260101_000010_create_task_table;
mod m20260101_000011_create_task_user_table;
mod m20260101_000012_create_chatroom_table;
mod m20260101_000013_create_chatroom_user_table;
mod m20260101_000014_create_message_table;
mod m20260101_000015_create_notification_table;
mod m20260101_000016_create_preference_table;
mod m20260101_000017_create_user_preference_table;
mod m20260101_000018_create_article_table;

pub use m20260101_000016_create_preference_table::PREFERENCE_KEYS;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_suspension_table::Migration),
            Box::new(m20260101_000003_create_report_table::Migration),
            Box::new(m20260101_000004_create_friend_table::Migration),
            Box::new(m20260101_000005_create_organization_table::Migration),
            Box::new(m20260101_000006_create_organization_user_table::Migration),
            Box::new(m20260101_000007_create_project_table::Migration),
            Box::new(m20260101_000008_create_project_user_table::Migration),
            Box::new(m20260101_000009_create_bucket_table::Migration),
            Box::new(m20260101_000010_create_task_table::Migration),
            Box::new(m20260101_000011_create_task_user_table::Migration),
            Box::new(m20260101_000012_create_chatroom_table::Migration),
            Box::new(m20260101_000013_create_chatroom_user_table::Migration),
            Box::new(m20260101_000014_create_message_table::Migration),
            Box::new(m20260101_000015_create_notification_table::Migration),
            Box::new(m20260101_000016_create_preference_table::Migration),
            Box::new(m20260101_000017_create_user_preference_table::Migration),
            Box::new(m20260101_000018_create_article_table::Migration),
        ]
    }
}
