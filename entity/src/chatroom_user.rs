use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chatroom_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub chatroom_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
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
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::chatroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chatroom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
