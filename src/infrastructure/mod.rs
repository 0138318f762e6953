//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence, caching and view tracking.
//!
//! # Modules
//!
//! - [`cache`] - Page cache abstractions (Redis, in-memory and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`redis_connection`] - Shared Redis connection setup
//! - [`views`] - Article view counters

pub mod cache;
pub mod persistence;
pub mod redis_connection;
pub mod views;
