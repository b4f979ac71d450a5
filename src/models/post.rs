use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `post` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Post {
    pub post_id: i64,
    pub name: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url_key: Option<String>,
    pub thumbnail: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
