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
                    .table(Friend::Table)
                    .if_not_exists()
                    .col(integer(Friend::FromUserId))
                    .col(integer(Friend::ToUserId))
                    .col(string(Friend::Status))
                    .col(
                        timestamp_with_time_zone(Friend::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(Friend::FromUserId)
                            .col(Friend::ToUserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_from_user_id")
                            .from(Friend::Table, Friend::FromUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_to_user_id")
                            .from(Friend::Table, Friend::ToUserId)
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
            .drop_table(Table::drop().table(Friend::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friend {
    Table,
    FromUserId,
    ToUserId,
    Status,
    CreatedAt,
}
