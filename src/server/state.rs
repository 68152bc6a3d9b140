//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Event bus that turns domain events into notifications
//! - Application URL for generating links

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::event::EventBus;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<EventBus>` is a reference-counted pointer
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Event bus that services publish domain events to after committing.
    pub events: Arc<EventBus>,

    /// Application base URL for generating links.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `events` - Event bus with its listeners registered
    /// - `app_url` - Application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, events: Arc<EventBus>, app_url: String) -> Self {
        Self {
            db,
            events,
            app_url,
        }
    }
}
