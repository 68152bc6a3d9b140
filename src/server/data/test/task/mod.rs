use crate::server::{
    data::task::TaskRepository,
    model::task::{CreateTaskParam, UpdateTaskParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign;
mod create;
mod get_by_bucket;
mod get_max_order;
mod set_position;
mod update_fields;

fn create_param(bucket_id: i32, name: &str) -> CreateTaskParam {
    CreateTaskParam {
        bucket_id,
        name: name.to_string(),
        description: None,
        start_at: None,
        end_at: None,
    }
}
