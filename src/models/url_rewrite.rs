//! SEO url keys resolved to categories or posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of entity a rewrite points at, stored as the `url_rewrite_entity` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "url_rewrite_entity")]
pub enum UrlRewriteEntity {
    #[sqlx(rename = "1")]
    #[serde(rename = "1")]
    Category,
    #[sqlx(rename = "2")]
    #[serde(rename = "2")]
    Post,
}

/// A row from the `url_rewrite` table. A NULL `entity_type` means the rewrite is unassigned.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct UrlRewrite {
    pub url_rewrite_id: i64,
    pub entity_type: Option<UrlRewriteEntity>,
    pub entity_id: Option<i64>,
    pub url_key: Option<String>,
    pub created_at: DateTime<Utc>,
}
