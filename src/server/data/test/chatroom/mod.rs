use crate::server::{
    data::{chatroom::ChatroomRepository, message::MessageRepository},
    model::chatroom::SendMessageParam,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_private_between;
mod members;
mod messages;
