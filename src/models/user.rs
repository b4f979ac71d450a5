//! Blog readers (front-end accounts), distinct from admins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored as the `gender` enum with single-digit labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "gender")]
pub enum Gender {
    #[sqlx(rename = "1")]
    #[serde(rename = "1")]
    Male,
    #[sqlx(rename = "2")]
    #[serde(rename = "2")]
    Female,
    #[sqlx(rename = "3")]
    #[serde(rename = "3")]
    Other,
}

impl Gender {
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "1",
            Gender::Female => "2",
            Gender::Other => "3",
        }
    }
}

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub subscribe: Option<bool>,
    pub gender: Option<Gender>,
    pub dob: Option<DateTime<Utc>>,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub password_changed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
