//! SeaORM entity definitions for every table in the schema.

pub mod prelude;

pub mod article;
pub mod bucket;
pub mod chatroom;
pub mod chatroom_user;
pub mod friend;
pub mod message;
pub mod notification;
pub mod organization;
pub mod organization_user;
pub mod preference;
pub mod project;
pub mod project_user;
pub mod report;
pub mod suspension;
pub mod task;
pub mod task_user;
pub mod user;
pub mod user_preference;
