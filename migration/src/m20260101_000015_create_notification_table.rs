use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(integer(Notification::UserId))
                    .col(string(Notification::Title))
                    .col(text(Notification::Description))
                    .col(string(Notification::Category))
                    .col(integer_null(Notification::TypeId))
                    .col(boolean(Notification::Read).default(false))
                    .col(
                        timestamp_with_time_zone(Notification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_user_id")
                            .from(Notification::Table, Notification::UserId)
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
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Category,
    TypeId,
    Read,
    CreatedAt,
}
