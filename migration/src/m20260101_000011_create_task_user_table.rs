use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260101_000001_create_user_table::User, m20260101_000010_create_task_table::Task};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskUser::Table)
                    .if_not_exists()
                    .col(integer(TaskUser::TaskId))
                    .col(integer(TaskUser::UserId))
                    .primary_key(Index::create().col(TaskUser::TaskId).col(TaskUser::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_user_task_id")
                            .from(TaskUser::Table, TaskUser::TaskId)
                            .to(Task::Table, Task::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_user_user_id")
                            .from(TaskUser::Table, TaskUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TaskUser {
    Table,
    TaskId,
    UserId,
}
