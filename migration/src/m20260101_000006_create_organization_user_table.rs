use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User,
    m20260101_000005_create_organization_table::Organization,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrganizationUser::Table)
                    .if_not_exists()
                    .col(integer(OrganizationUser::OrgId))
                    .col(integer(OrganizationUser::UserId))
                    .col(string(OrganizationUser::Role))
                    .primary_key(
                        Index::create()
                            .col(OrganizationUser::OrgId)
                            .col(OrganizationUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_user_org_id")
                            .from(OrganizationUser::Table, OrganizationUser::OrgId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_user_user_id")
                            .from(OrganizationUser::Table, OrganizationUser::UserId)
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
            .drop_table(Table::drop().table(OrganizationUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrganizationUser {
    Table,
    OrgId,
    UserId,
    Role,
}
