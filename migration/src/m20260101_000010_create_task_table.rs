use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000009_create_bucket_table::Bucket;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::Id))
                    .col(integer(Task::BucketId))
                    .col(string(Task::Name))
                    .col(text_null(Task::Description))
                    .col(integer(Task::Order))
                    .col(timestamp_with_time_zone_null(Task::StartAt))
                    .col(timestamp_with_time_zone_null(Task::EndAt))
                    .col(boolean(Task::Done).default(false))
                    .col(
                        timestamp_with_time_zone(Task::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_bucket_id")
                            .from(Task::Table, Task::BucketId)
                            .to(Bucket::Table, Bucket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_task_bucket_order")
                    .table(Task::Table)
                    .col(Task::BucketId)
                    .col(Task::Order)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Task {
    Table,
    Id,
    BucketId,
    Name,
    Description,
    Order,
    StartAt,
    EndAt,
    Done,
    CreatedAt,
}
