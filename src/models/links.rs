use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `post_link` table, assigning a post to a category.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PostLink {
    pub link_id: i64,
    pub category_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}
