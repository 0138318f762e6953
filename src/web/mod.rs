//! Web layer: server-rendered blog pages and form submissions.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page, feed and submission handlers
//! - [`middleware`] - Sessions, page cache, view counting, tracing, rate limiting
//! - [`routes`] - Route configuration
//! - [`flash`] - One-shot localized notices
//! - [`forms`] - Comment and reply forms
//! - [`extract`] - Page number extractor

pub mod dto;
pub mod extract;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
