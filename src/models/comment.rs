use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `comment` table. `parent_id` is set for replies.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub parent_id: Option<i64>,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
