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
                    .table(Report::Table)
                    .if_not_exists()
                    .col(pk_auto(Report::Id))
                    .col(integer(Report::SenderId))
                    .col(integer(Report::ReportedId))
                    .col(string(Report::Title))
                    .col(text(Report::Description))
                    .col(boolean(Report::Resolved).default(false))
                    .col(
                        timestamp_with_time_zone(Report::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_sender_id")
                            .from(Report::Table, Report::SenderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_reported_id")
                            .from(Report::Table, Report::ReportedId)
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
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Report {
    Table,
    Id,
    SenderId,
    ReportedId,
    Title,
    Description,
    Resolved,
    CreatedAt,
}
