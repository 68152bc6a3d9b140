use sea_orm_migration::{prelude::*, schema::*};

/// Names of every recognized user preference, seeded into the `preference` table.
pub const PREFERENCE_KEYS: [&str; 9] = [
    "org_notif",
    "project_notif",
    "task_notif",
    "project_discussion_notif",
    "private_discussion_notif",
    "report_notif",
    "friend_notif",
    "contrib_notif",
    "friend_invite",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Preference::Table)
                    .if_not_exists()
                    .col(pk_auto(Preference::Id))
                    .col(string_uniq(Preference::Name))
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Preference::Table)
            .columns([Preference::Name]);
        for key in PREFERENCE_KEYS {
            seed.values_panic([key.into()]);
        }

        manager.exec_stmt(seed.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Preference::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Preference {
    Table,
    Id,
    Name,
}
