//! Web middleware: sessions, page caching, view counting and protection.

pub mod rate_limit;
pub mod response_cache;
pub mod session;
pub mod tracing;
pub mod view_tracking;
