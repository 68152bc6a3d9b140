//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types validate request input in their `from_dto` constructors so services
//! only ever see well-formed values.

pub mod article;
pub mod chatroom;
pub mod event;
pub mod friend;
pub mod notification;
pub mod organization;
pub mod preference;
pub mod project;
pub mod report;
pub mod suspension;
pub mod task;
pub mod user;
