//! Domain layer containing blog entities and repository contracts.
//!
//! This module defines the data the blog works with and the traits the
//! infrastructure layer implements. It has no knowledge of HTTP, templates or
//! concrete storage engines.
//!
//! # Architecture
//!
//! - [`entities`] - Articles, tags, comments, replies and identities
//! - [`repositories`] - Data access trait definitions
//! - [`pagination`] - Page arithmetic shared by every listing
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod pagination;
pub mod repositories;
