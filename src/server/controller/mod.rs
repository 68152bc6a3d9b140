//! HTTP handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into domain
//! parameters, call a service and convert the result back into DTOs. Access
//! rules beyond "logged in" and "site admin" are enforced by the services.

pub mod article;
pub mod auth;
pub mod chatroom;
pub mod friend;
pub mod notification;
pub mod organization;
pub mod project;
pub mod report;
pub mod suspension;
pub mod task;
pub mod user;
