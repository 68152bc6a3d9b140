use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000007_create_project_table::Project;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chatroom::Table)
                    .if_not_exists()
                    .col(pk_auto(Chatroom::Id))
                    .col(string(Chatroom::Name))
                    .col(integer_null(Chatroom::ProjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chatroom_project_id")
                            .from(Chatroom::Table, Chatroom::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Chatroom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Chatroom {
    Table,
    Id,
    Name,
    ProjectId,
}
