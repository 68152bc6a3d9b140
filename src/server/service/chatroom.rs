//! Project discussion rooms and private rooms between friends.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::friend::FriendStatus,
    server::{
        data::{
            chatroom::ChatroomRepository, friend::FriendRepository, message::MessageRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            chatroom::{Chatroom, MessageItem, SendMessageParam},
            event::DomainEvent,
        },
        service::{
            access::{load_actor, require_project_member},
            event::EventBus,
        },
    },
};

pub struct ChatroomService<'a> {
    db: &'a DatabaseConnection,
    events: &'a EventBus,
}

impl<'a> ChatroomService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a EventBus) -> Self {
        Self { db, events }
    }

    /// Discussion room of a project the actor belongs to.
    pub async fn get_project_room(
        &self,
        actor_id: i32,
        project_id: i32,
    ) -> Result<Chatroom, AppError> {
        require_project_member(self.db, project_id, actor_id).await?;

        ChatroomRepository::new(self.db)
            .find_by_project(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chatroom not found".to_string()))
    }

    /// Returns the private room between the actor and a friend, creating it on first use.
    ///
    /// # Returns
    /// - `Ok(Chatroom)` - Existing or newly created room
    /// - `Err(AppError::BadRequest)` - Other user is the actor or not an accepted friend
    /// - `Err(AppError::NotFound)` - Other user does not exist
    pub async fn open_private(&self, actor_id: i32, other_id: i32) -> Result<Chatroom, AppError> {
        if actor_id == other_id {
            return Err(AppError::BadRequest(
                "You cannot open a chat with yourself".to_string(),
            ));
        }

        let other = UserRepository::new(self.db)
            .find_by_id(other_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let status = FriendRepository::new(self.db)
            .get_status(actor_id, other_id)
            .await?;
        if status != FriendStatus::Accepted {
            return Err(AppError::BadRequest(
                "Private chats are only available between friends".to_string(),
            ));
        }

        let repo = ChatroomRepository::new(self.db);
        if let Some(chatroom) = repo.find_private_between(actor_id, other_id).await? {
            return Ok(chatroom);
        }

        let actor = load_actor(self.db, actor_id).await?;

        let txn = self.db.begin().await?;
        let repo = ChatroomRepository::new(&txn);
        let chatroom = repo
            .create(format!("{}, {}", actor.name, other.name), None)
            .await?;
        repo.add_member(chatroom.id, actor_id).await?;
        repo.add_member(chatroom.id, other_id).await?;
        txn.commit().await?;

        Ok(chatroom)
    }

    pub async fn list_mine(&self, actor_id: i32) -> Result<Vec<Chatroom>, AppError> {
        Ok(ChatroomRepository::new(self.db)
            .get_for_user(actor_id)
            .await?)
    }

    /// Messages of a room, oldest first. Only room members may read them.
    pub async fn get_messages(
        &self,
        actor_id: i32,
        chatroom_id: i32,
    ) -> Result<Vec<MessageItem>, AppError> {
        self.require_member(actor_id, chatroom_id).await?;

        Ok(MessageRepository::new(self.db)
            .get_by_chatroom(chatroom_id)
            .await?)
    }

    /// Posts a message and notifies the other members of the room.
    pub async fn send_message(&self, param: SendMessageParam) -> Result<MessageItem, AppError> {
        let chatroom = self.require_member(param.sender_id, param.chatroom_id).await?;
        let sender = load_actor(self.db, param.sender_id).await?;

        let txn = self.db.begin().await?;
        let message = MessageRepository::new(&txn)
            .create(param, sender.name.clone())
            .await?;
        let recipient_ids: Vec<i32> = ChatroomRepository::new(&txn)
            .get_member_ids(chatroom.id)
            .await?
            .into_iter()
            .filter(|id| *id != sender.id)
            .collect();
        txn.commit().await?;

        self.events
            .emit(DomainEvent::MessageSent {
                chatroom_id: chatroom.id,
                chatroom_name: chatroom.name,
                project_id: chatroom.project_id,
                sender_name: sender.name,
                recipient_ids,
            })
            .await;

        Ok(message)
    }

    async fn require_member(&self, actor_id: i32, chatroom_id: i32) -> Result<Chatroom, AppError> {
        let repo = ChatroomRepository::new(self.db);
        let chatroom = repo
            .find_by_id(chatroom_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chatroom not found".to_string()))?;

        if !repo.is_member(chatroom_id, actor_id).await? {
            return Err(AuthError::AccessDenied(
                actor_id,
                format!("not a member of chatroom {}", chatroom_id),
            )
            .into());
        }

        Ok(chatroom)
    }
}
