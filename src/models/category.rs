use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `category` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub category_id: i64,
    pub parent_id: i64,
    pub name: String,
    pub url_key: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
