use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User, m20260101_000012_create_chatroom_table::Chatroom,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatroomUser::Table)
                    .if_not_exists()
                    .col(integer(ChatroomUser::ChatroomId))
                    .col(integer(ChatroomUser::UserId))
                    .primary_key(
                        Index::create()
                            .col(ChatroomUser::ChatroomId)
                            .col(ChatroomUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chatroom_user_chatroom_id")
                            .from(ChatroomUser::Table, ChatroomUser::ChatroomId)
                            .to(Chatroom::Table, Chatroom::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chatroom_user_user_id")
                            .from(ChatroomUser::Table, ChatroomUser::UserId)
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
            .drop_table(Table::drop().table(ChatroomUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatroomUser {
    Table,
    ChatroomId,
    UserId,
}
