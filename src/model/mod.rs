//! Data transfer objects shared by the HTTP API and its OpenAPI document.

pub mod api;
pub mod article;
pub mod chatroom;
pub mod friend;
pub mod notification;
pub mod organization;
pub mod preference;
pub mod project;
pub mod report;
pub mod suspension;
pub mod task;
pub mod user;
