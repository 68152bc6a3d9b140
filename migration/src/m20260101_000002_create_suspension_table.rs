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
                    .table(Suspension::Table)
                    .if_not_exists()
                    .col(pk_auto(Suspension::Id))
                    .col(integer(Suspension::UserId))
                    .col(text(Suspension::Reason))
                    .col(timestamp_with_time_zone(Suspension::ExpiredAt))
                    .col(
                        timestamp_with_time_zone(Suspension::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_suspension_user_id")
                            .from(Suspension::Table, Suspension::UserId)
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
            .drop_table(Table::drop().table(Suspension::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Suspension {
    Table,
    Id,
    UserId,
    Reason,
    ExpiredAt,
    CreatedAt,
}
