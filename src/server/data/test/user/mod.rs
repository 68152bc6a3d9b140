use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials_by_email;
mod find_many;
mod search_by_name;
mod update_profile;
