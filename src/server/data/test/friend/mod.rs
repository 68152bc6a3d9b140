use crate::{
    model::friend::FriendStatus,
    server::{data::friend::FriendRepository, error::AppError, model::friend::EdgeStatus},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_between;
mod get_edges_for_user;
mod get_status;
