//! Authorization roles and their per-permission rules. Admins reference a role by `role_id`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `authorization_role` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AuthorizationRole {
    pub role_id: i64,
    pub role_name: String,
    pub is_administrator: bool,
    pub created_at: DateTime<Utc>,
}

/// A row from the `authorization_rule` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AuthorizationRule {
    pub rule_id: i64,
    pub role_id: i64,
    pub permission_code: String,
    pub is_allowed: bool,
    pub created_at: DateTime<Utc>,
}
