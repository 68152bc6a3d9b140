use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User, m20260101_000007_create_project_table::Project,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectUser::Table)
                    .if_not_exists()
                    .col(integer(ProjectUser::ProjectId))
                    .col(integer(ProjectUser::UserId))
                    .col(string(ProjectUser::Role))
                    .primary_key(
                        Index::create()
                            .col(ProjectUser::ProjectId)
                            .col(ProjectUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_user_project_id")
                            .from(ProjectUser::Table, ProjectUser::ProjectId)
                            .to(Project::Table, Project::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_user_user_id")
                            .from(ProjectUser::Table, ProjectUser::UserId)
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
            .drop_table(Table::drop().table(ProjectUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProjectUser {
    Table,
    ProjectId,
    UserId,
    Role,
}
