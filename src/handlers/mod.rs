//! HTTP handlers for the admin API.

pub mod admin;
pub use admin::*;
