use crate::{
    model::notification::NotificationCategory,
    server::{
        data::notification::NotificationRepository, error::AppError,
        model::notification::CreateNotificationParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
mod mark_read;
