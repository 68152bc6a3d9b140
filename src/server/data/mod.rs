//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `sea_orm::ConnectionTrait`. Services that need several
//! writes to succeed or fail together open a `DatabaseTransaction` and construct their
//! repositories on it; nested calls then share that transaction instead of opening savepoints.

pub mod article;
pub mod bucket;
pub mod chatroom;
pub mod friend;
pub mod message;
pub mod notification;
pub mod organization;
pub mod preference;
pub mod project;
pub mod report;
pub mod suspension;
pub mod task;
pub mod user;

#[cfg(test)]
mod test;
