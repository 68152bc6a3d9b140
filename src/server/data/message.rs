use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::chatroom::{MessageItem, SendMessageParam};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a message. The sender name is supplied by the caller.
    pub async fn create(
        &self,
        param: SendMessageParam,
        sender_name: String,
    ) -> Result<MessageItem, DbErr> {
        let entity = entity::message::ActiveModel {
            chatroom_id: ActiveValue::Set(param.chatroom_id),
            sender_id: ActiveValue::Set(param.sender_id),
            message: ActiveValue::Set(param.message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MessageItem::from_entity(entity, sender_name))
    }

    /// Messages of a chatroom in the order they were sent, with sender names.
    pub async fn get_by_chatroom(&self, chatroom_id: i32) -> Result<Vec<MessageItem>, DbErr> {
        let rows = entity::prelude::Message::find()
            .filter(entity::message::Column::ChatroomId.eq(chatroom_id))
            .select_also(entity::prelude::User)
            .join(JoinType::LeftJoin, entity::message::Relation::Sender.def())
            .order_by_asc(entity::message::Column::CreatedAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(message, sender)| {
                let sender_name = sender.map(|user| user.name).unwrap_or_default();
                MessageItem::from_entity(message, sender_name)
            })
            .collect())
    }
}
