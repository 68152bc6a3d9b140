use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub chatroom_id: i32,
    pub sender_id: i32,
    pub message: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chatroom::Entity",
        from = "Column::ChatroomId",
        to = "super::chatroom::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Chatroom,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SenderId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Sender,
}

impl ActiveModelBehavior for ActiveModel {}
