//! Admin persistence contract and its PostgreSQL implementation.

mod postgres;
pub use postgres::PgAdminRepository;

use crate::error::AppError;
use crate::models::{Admin, CreateAdminParams, ListAdminParams, UpdateAdminParams};
use async_trait::async_trait;

/// Each call is one round trip against the store. Store errors pass through unchanged,
/// except that a missing target row is reported as [`AppError::NotFound`].
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn get(&self, email: &str) -> Result<Admin, AppError>;

    /// One page plus the total number of admins matching the filter. An empty page is `Ok`.
    async fn list(&self, params: &ListAdminParams) -> Result<(Vec<Admin>, i64), AppError>;

    async fn create(&self, params: &CreateAdminParams) -> Result<Admin, AppError>;

    /// Coalesce-style update: `None` fields keep their stored value.
    async fn update(&self, params: &UpdateAdminParams) -> Result<Admin, AppError>;

    /// Returns the row as it was before removal.
    async fn delete(&self, email: &str) -> Result<Admin, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

pub(crate) fn admin_not_found(email: &str) -> AppError {
    AppError::NotFound(format!("admin '{}'", email))
}
