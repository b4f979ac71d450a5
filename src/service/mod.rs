//! Admin use cases plus the request-validation and password helpers they rely on.

mod admin;
pub mod password;
pub mod validation;

pub use admin::AdminService;
pub use password::hash_password;
