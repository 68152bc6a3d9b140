//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the collaboration service:
//! API endpoints, workflow rules, data access, and infrastructure. The backend
//! uses Axum as the web framework and SeaORM on SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Workflow rules, access checks and event publishing
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, domain events and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session handling and login guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, event bus, app URL)
//! - **Startup** (`startup`) - Initialization of database, sessions, CORS and the event bus
//! - **Router** (`router`) - Axum route table and OpenAPI document
//! - **Utilities** (`util/`) - Password hashing, Markdown rendering and input validation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** resolves the logged-in user from the session
//! 3. **Controller** converts DTOs to params and calls a service
//! 4. **Service** checks access, runs the workflow inside a transaction where
//!    several writes belong together, and publishes domain events after commit
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
