//! Route tables. Each function returns a stateless `Router` ready to merge.

mod admin;
mod common;

pub use admin::admin_routes;
pub use common::common_routes;
