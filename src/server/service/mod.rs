//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and emitting domain events
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling multi-step writes in a single transaction
//!
//! Events are emitted only after the transaction that produced them commits.

pub mod access;
pub mod article;
pub mod auth;
pub mod bucket;
pub mod chatroom;
pub mod event;
pub mod friend;
pub mod mailer;
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
