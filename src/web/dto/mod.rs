//! Response bodies of the JSON endpoints.

pub mod health;
