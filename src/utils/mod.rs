//! Utility functions for request handling.
//!
//! - [`request_root`] - Absolute request URLs from `Host` and proxy headers
//! - [`cookies`] - Cookie lookup and `Set-Cookie` construction
//! - [`path_segment`] - Percent-encoding of category and tag names in links

pub mod cookies;
pub mod path_segment;
pub mod request_root;
