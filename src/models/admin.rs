//! Admin account entity, its write DTOs and list parameters.

use crate::sql::{offset, SortDirection};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use std::str::FromStr;
use utoipa::ToSchema;

/// A row from the `admin` table. `admin_id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
pub struct Admin {
    pub admin_id: i32,
    pub role_id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub firstname: String,
    pub lastname: Option<String>,
    pub active: Option<bool>,
    pub lock_expires: Option<DateTime<Utc>>,
    pub password_changed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an admin, password still in plaintext.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdmin {
    pub role_id: i64,
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: Option<String>,
    pub active: Option<bool>,
    pub lock_expires: Option<DateTime<Utc>>,
}

/// Changes to an existing admin, keyed by email. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminChanges {
    pub email: String,
    pub role_id: Option<i64>,
    pub password: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub active: Option<bool>,
    pub lock_expires: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAdminParams {
    pub role_id: i64,
    pub email: String,
    pub hashed_password: String,
    pub firstname: String,
    pub lastname: Option<String>,
    pub active: Option<bool>,
    pub lock_expires: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAdminParams {
    pub email: String,
    pub role_id: Option<i64>,
    pub hashed_password: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub active: Option<bool>,
    pub lock_expires: Option<DateTime<Utc>>,
}

/// Optional list filters. Text fields match with ILIKE, `active` with equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminFilter {
    pub email: Option<String>,
    pub active: Option<bool>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

crate::filter_fields!(AdminFilter { email, active, firstname, lastname });

/// Columns a list may be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminOrderBy {
    #[default]
    AdminId,
    RoleId,
    Email,
    Firstname,
    Lastname,
    Active,
    LockExpires,
    PasswordChangedAt,
    CreatedAt,
}

impl AdminOrderBy {
    pub const ALL: [AdminOrderBy; 9] = [
        AdminOrderBy::AdminId,
        AdminOrderBy::RoleId,
        AdminOrderBy::Email,
        AdminOrderBy::Firstname,
        AdminOrderBy::Lastname,
        AdminOrderBy::Active,
        AdminOrderBy::LockExpires,
        AdminOrderBy::PasswordChangedAt,
        AdminOrderBy::CreatedAt,
    ];

    pub fn column(self) -> &'static str {
        match self {
            AdminOrderBy::AdminId => "admin_id",
            AdminOrderBy::RoleId => "role_id",
            AdminOrderBy::Email => "email",
            AdminOrderBy::Firstname => "firstname",
            AdminOrderBy::Lastname => "lastname",
            AdminOrderBy::Active => "active",
            AdminOrderBy::LockExpires => "lock_expires",
            AdminOrderBy::PasswordChangedAt => "password_changed_at",
            AdminOrderBy::CreatedAt => "created_at",
        }
    }
}

impl FromStr for AdminOrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        AdminOrderBy::ALL
            .into_iter()
            .find(|o| o.column() == wanted)
            .ok_or_else(|| {
                let allowed: Vec<&str> = AdminOrderBy::ALL.iter().map(|o| o.column()).collect();
                format!("order_by must be one of: {} (got '{}')", allowed.join(", "), s)
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListAdminParams {
    pub filter: AdminFilter,
    pub order_by: Option<AdminOrderBy>,
    pub order_direction: Option<SortDirection>,
    pub page_size: i32,
    pub current_page: i32,
}

impl ListAdminParams {
    pub fn offset(&self) -> i64 {
        offset(self.page_size, self.current_page)
    }
}

/// One page of admins plus the number of admins matching the filter overall.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ListAdminResponse {
    pub totals: i64,
    pub admins: Vec<Admin>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{build_filter_conditions, PgBindValue};

    #[test]
    fn admin_json_hides_password_hash() {
        let now = Utc::now();
        let admin = Admin {
            admin_id: 1,
            role_id: 1,
            email: "root@example.com".into(),
            hashed_password: "$argon2id$secret".into(),
            firstname: "Root".into(),
            lastname: None,
            active: Some(true),
            lock_expires: None,
            password_changed_at: now,
            created_at: now,
        };
        let json = serde_json::to_value(&admin).unwrap();
        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["email"], "root@example.com");
        assert_eq!(json["lastname"], serde_json::Value::Null);
    }

    #[test]
    fn filter_fields_follow_declaration_order() {
        let clause = build_filter_conditions(&AdminFilter {
            email: Some("%@example.com".into()),
            active: Some(true),
            firstname: None,
            lastname: Some("Smith".into()),
        });
        assert_eq!(clause.sql, " AND email ILIKE $1 AND active = $2 AND lastname ILIKE $3");
        assert_eq!(
            clause.args,
            vec![
                PgBindValue::from("%@example.com"),
                PgBindValue::Bool(true),
                PgBindValue::from("Smith"),
            ]
        );
    }

    #[test]
    fn order_by_accepts_only_known_columns() {
        assert_eq!("created_at".parse::<AdminOrderBy>(), Ok(AdminOrderBy::CreatedAt));
        assert_eq!("EMAIL".parse::<AdminOrderBy>(), Ok(AdminOrderBy::Email));
        assert!("hashed_password".parse::<AdminOrderBy>().is_err());
        assert!("admin_id; DROP TABLE admin".parse::<AdminOrderBy>().is_err());
        for o in AdminOrderBy::ALL {
            assert_eq!(o.column().parse::<AdminOrderBy>(), Ok(o));
        }
    }

    #[test]
    fn list_offset_uses_page_arithmetic() {
        let params = ListAdminParams {
            filter: AdminFilter::default(),
            order_by: None,
            order_direction: None,
            page_size: 15,
            current_page: 4,
        };
        assert_eq!(params.offset(), 45);
    }
}
