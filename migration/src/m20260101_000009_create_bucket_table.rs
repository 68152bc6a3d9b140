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
                    .table(Bucket::Table)
                    .if_not_exists()
                    .col(pk_auto(Bucket::Id))
                    .col(integer(Bucket::ProjectId))
                    .col(string(Bucket::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bucket_project_id")
                            .from(Bucket::Table, Bucket::ProjectId)
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
            .drop_table(Table::drop().table(Bucket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bucket {
    Table,
    Id,
    ProjectId,
    Name,
}
