//! Chatroom and chatroom membership repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::chatroom::Chatroom;

pub struct ChatroomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChatroomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a chatroom. `project_id` is `None` for private rooms.
    pub async fn create(&self, name: String, project_id: Option<i32>) -> Result<Chatroom, DbErr> {
        let entity = entity::chatroom::ActiveModel {
            name: ActiveValue::Set(name),
            project_id: ActiveValue::Set(project_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Chatroom::from_entity(entity))
    }

    pub async fn find_by_id(&self, chatroom_id: i32) -> Result<Option<Chatroom>, DbErr> {
        let entity = entity::prelude::Chatroom::find_by_id(chatroom_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Chatroom::from_entity))
    }

    /// The discussion room of a project.
    pub async fn find_by_project(&self, project_id: i32) -> Result<Option<Chatroom>, DbErr> {
        let entity = entity::prelude::Chatroom::find()
            .filter(entity::chatroom::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::chatroom::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Chatroom::from_entity))
    }

    /// The private room shared by exactly `a` and `b`, if one exists.
    pub async fn find_private_between(&self, a: i32, b: i32) -> Result<Option<Chatroom>, DbErr> {
        let rooms_of_a: Vec<i32> = entity::prelude::ChatroomUser::find()
            .select_only()
            .column(entity::chatroom_user::Column::ChatroomId)
            .filter(entity::chatroom_user::Column::UserId.eq(a))
            .into_tuple()
            .all(self.db)
            .await?;
        if rooms_of_a.is_empty() {
            return Ok(None);
        }

        let shared: Vec<i32> = entity::prelude::ChatroomUser::find()
            .select_only()
            .column(entity::chatroom_user::Column::ChatroomId)
            .filter(entity::chatroom_user::Column::UserId.eq(b))
            .filter(entity::chatroom_user::Column::ChatroomId.is_in(rooms_of_a))
            .into_tuple()
            .all(self.db)
            .await?;
        if shared.is_empty() {
            return Ok(None);
        }

        let entity = entity::prelude::Chatroom::find()
            .filter(entity::chatroom::Column::Id.is_in(shared))
            .filter(entity::chatroom::Column::ProjectId.is_null())
            .order_by_asc(entity::chatroom::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Chatroom::from_entity))
    }

    /// Chatrooms the user is a member of, by id.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Chatroom>, DbErr> {
        let rows = entity::prelude::ChatroomUser::find()
            .filter(entity::chatroom_user::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Chatroom)
            .order_by_asc(entity::chatroom_user::Column::ChatroomId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, chatroom)| chatroom.map(Chatroom::from_entity))
            .collect())
    }

    /// Adds a user to a chatroom. Adding an existing member is a no-op.
    pub async fn add_member(&self, chatroom_id: i32, user_id: i32) -> Result<(), DbErr> {
        if self.is_member(chatroom_id, user_id).await? {
            return Ok(());
        }

        entity::chatroom_user::ActiveModel {
            chatroom_id: ActiveValue::Set(chatroom_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn remove_member(&self, chatroom_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::ChatroomUser::delete_by_id((chatroom_id, user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn is_member(&self, chatroom_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::ChatroomUser::find_by_id((chatroom_id, user_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    pub async fn get_member_ids(&self, chatroom_id: i32) -> Result<Vec<i32>, DbErr> {
        let ids: Vec<i32> = entity::prelude::ChatroomUser::find()
            .select_only()
            .column(entity::chatroom_user::Column::UserId)
            .filter(entity::chatroom_user::Column::ChatroomId.eq(chatroom_id))
            .order_by_asc(entity::chatroom_user::Column::UserId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids)
    }
}
