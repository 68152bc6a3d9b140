use chrono::{DateTime, Utc};

use crate::{
    model::chatroom::{ChatroomDto, MessageItemDto},
    server::{error::AppError, util::validate::require_non_empty},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Chatroom {
    pub id: i32,
    pub name: String,
    /// `None` for private rooms between two friends.
    pub project_id: Option<i32>,
}

impl Chatroom {
    pub fn into_dto(self) -> ChatroomDto {
        ChatroomDto {
            id: self.id,
            name: self.name,
            project_id: self.project_id,
        }
    }

    pub fn from_entity(entity: entity::chatroom::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            project_id: entity.project_id,
        }
    }
}

/// Message joined with the sender's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageItem {
    pub id: i32,
    pub chatroom_id: i32,
    pub sender_id: i32,
    pub sender_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl MessageItem {
    pub fn into_dto(self) -> MessageItemDto {
        MessageItemDto {
            id: self.id,
            chatroom_id: self.chatroom_id,
            sender_id: self.sender_id,
            sender_name: self.sender_name,
            message: self.message,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::message::Model, sender_name: String) -> Self {
        Self {
            id: entity.id,
            chatroom_id: entity.chatroom_id,
            sender_id: entity.sender_id,
            sender_name,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SendMessageParam {
    pub chatroom_id: i32,
    pub sender_id: i32,
    pub message: String,
}

impl SendMessageParam {
    pub fn new(chatroom_id: i32, sender_id: i32, message: String) -> Result<Self, AppError> {
        Ok(Self {
            chatroom_id,
            sender_id,
            message: require_non_empty("message", message)?,
        })
    }
}
