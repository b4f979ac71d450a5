//! Executes the admin statements from [`crate::sql`] against a shared `PgPool`.

use super::{admin_not_found, AdminRepository};
use crate::error::AppError;
use crate::models::{Admin, CreateAdminParams, ListAdminParams, UpdateAdminParams};
use crate::sql::{build_filter_conditions, count, delete, insert, select_by_email, select_list, update};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        PgAdminRepository { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    async fn get(&self, email: &str) -> Result<Admin, AppError> {
        let sql = select_by_email();
        tracing::debug!(sql = %sql, email = %email, "query");
        sqlx::query_as::<_, Admin>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| admin_not_found(email))
    }

    async fn list(&self, params: &ListAdminParams) -> Result<(Vec<Admin>, i64), AppError> {
        let offset = params.offset();
        if params.page_size < 0 || offset < 0 {
            return Err(AppError::Validation(format!(
                "page_size and current_page must be positive (page_size {}, current_page {})",
                params.page_size, params.current_page
            )));
        }
        let filter = build_filter_conditions(&params.filter);

        let q = select_list(
            &filter,
            params.order_by.unwrap_or_default(),
            params.order_direction.unwrap_or_default(),
            i64::from(params.page_size),
            offset,
        );
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Admin>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let admins = query.fetch_all(&self.pool).await?;

        let c = count(&filter);
        tracing::debug!(sql = %c.sql, params = ?c.params, "query");
        let mut total_query = sqlx::query_scalar::<_, i64>(&c.sql);
        for p in &c.params {
            total_query = total_query.bind(p.clone());
        }
        let totals = total_query.fetch_one(&self.pool).await?;

        Ok((admins, totals))
    }

    async fn create(&self, params: &CreateAdminParams) -> Result<Admin, AppError> {
        let sql = insert();
        tracing::debug!(sql = %sql, email = %params.email, role_id = params.role_id, "query");
        let admin = sqlx::query_as::<_, Admin>(&sql)
            .bind(params.role_id)
            .bind(&params.email)
            .bind(&params.hashed_password)
            .bind(&params.firstname)
            .bind(&params.lastname)
            .bind(params.active)
            .bind(params.lock_expires)
            .fetch_one(&self.pool)
            .await?;
        Ok(admin)
    }

    async fn update(&self, params: &UpdateAdminParams) -> Result<Admin, AppError> {
        let sql = update();
        tracing::debug!(sql = %sql, email = %params.email, "query");
        sqlx::query_as::<_, Admin>(&sql)
            .bind(&params.email)
            .bind(params.role_id)
            .bind(&params.hashed_password)
            .bind(&params.firstname)
            .bind(&params.lastname)
            .bind(params.active)
            .bind(params.lock_expires)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| admin_not_found(&params.email))
    }

    async fn delete(&self, email: &str) -> Result<Admin, AppError> {
        let sql = delete();
        tracing::debug!(sql = %sql, email = %email, "query");
        sqlx::query_as::<_, Admin>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| admin_not_found(email))
    }

    async fn ping(&self) -> Result<(), AppError> {
        crate::store::ping(&self.pool).await
    }
}
