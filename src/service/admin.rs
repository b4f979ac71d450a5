//! Admin use cases. Applies list defaults, hashes passwords and shapes list results;
//! persistence is delegated to an [`AdminRepository`].

use crate::error::AppError;
use crate::models::{
    Admin, AdminChanges, AdminOrderBy, CreateAdminParams, ListAdminParams, ListAdminResponse, NewAdmin,
    UpdateAdminParams,
};
use crate::repository::AdminRepository;
use crate::service::password::hash_password;
use crate::sql::SortDirection;
use std::sync::Arc;

#[derive(Clone)]
pub struct AdminService {
    repo: Arc<dyn AdminRepository>,
}

impl AdminService {
    pub fn new(repo: Arc<dyn AdminRepository>) -> Self {
        AdminService { repo }
    }

    pub async fn get_admin(&self, email: &str) -> Result<Admin, AppError> {
        self.repo.get(email).await
    }

    /// Unset ordering falls back to `admin_id DESC`. The caller's params are left untouched.
    pub async fn list_admins(&self, params: &ListAdminParams) -> Result<ListAdminResponse, AppError> {
        let params = ListAdminParams {
            order_by: Some(params.order_by.unwrap_or(AdminOrderBy::AdminId)),
            order_direction: Some(params.order_direction.unwrap_or(SortDirection::Desc)),
            ..params.clone()
        };
        let (admins, totals) = self.repo.list(&params).await?;
        Ok(ListAdminResponse { totals, admins })
    }

    pub async fn create_admin(&self, input: NewAdmin) -> Result<Admin, AppError> {
        let hashed_password = hash_password(&input.password)?;
        let params = CreateAdminParams {
            role_id: input.role_id,
            email: input.email,
            hashed_password,
            firstname: input.firstname,
            lastname: input.lastname,
            active: input.active,
            lock_expires: input.lock_expires,
        };
        let admin = self.repo.create(&params).await?;
        tracing::info!(admin_id = admin.admin_id, email = %admin.email, "admin created");
        Ok(admin)
    }

    pub async fn update_admin(&self, changes: AdminChanges) -> Result<Admin, AppError> {
        let hashed_password = changes.password.as_deref().map(hash_password).transpose()?;
        let params = UpdateAdminParams {
            email: changes.email,
            role_id: changes.role_id,
            hashed_password,
            firstname: changes.firstname,
            lastname: changes.lastname,
            active: changes.active,
            lock_expires: changes.lock_expires,
        };
        let admin = self.repo.update(&params).await?;
        tracing::info!(admin_id = admin.admin_id, email = %admin.email, "admin updated");
        Ok(admin)
    }

    pub async fn delete_admin(&self, email: &str) -> Result<Admin, AppError> {
        let admin = self.repo.delete(email).await?;
        tracing::info!(admin_id = admin.admin_id, email = %admin.email, "admin deleted");
        Ok(admin)
    }

    /// Whether the admin may sign in. A NULL `active` column reads as inactive.
    pub async fn is_admin_active(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.repo.get(email).await?.active.unwrap_or(false))
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.repo.ping().await
    }
}
