//! Builds the parameterized statements for the `admin` table.
//! Identifiers come from fixed allow-lists; values are always bound as parameters.

use crate::models::admin::AdminOrderBy;
use crate::sql::{FilterClause, PgBindValue};
use std::fmt;
use std::str::FromStr;

pub const ADMIN_TABLE: &str = "admin";

/// Column order matches the field order of [`crate::models::admin::Admin`].
pub const ADMIN_COLUMNS: &str = "admin_id, role_id, email, hashed_password, firstname, lastname, \
                                 active, lock_expires, password_changed_at, created_at";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("order_direction must be one of: asc, desc (got '{}')", other)),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn with_params(params: Vec<PgBindValue>) -> Self {
        QueryBuf {
            sql: String::new(),
            params,
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Rows skipped before the requested page. Not clamped: `current_page = 0` gives a negative offset.
pub fn offset(page_size: i32, current_page: i32) -> i64 {
    i64::from(page_size) * (i64::from(current_page) - 1)
}

/// SELECT one admin by email. `$1` = email.
pub fn select_by_email() -> String {
    format!("SELECT {} FROM {} WHERE email = $1", ADMIN_COLUMNS, ADMIN_TABLE)
}

/// INSERT returning the stored row.
/// `$1` role_id, `$2` email, `$3` hashed_password, `$4` firstname, `$5` lastname, `$6` active, `$7` lock_expires.
/// A NULL `active` falls back to TRUE; `admin_id`, `password_changed_at` and `created_at` come from the store.
pub fn insert() -> String {
    format!(
        "INSERT INTO {} (role_id, email, hashed_password, firstname, lastname, active, lock_expires) \
         VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), $7) \
         RETURNING {}",
        ADMIN_TABLE, ADMIN_COLUMNS
    )
}

/// Partial UPDATE keyed by email; a NULL parameter keeps the stored value.
/// `$1` email, `$2` role_id, `$3` hashed_password, `$4` firstname, `$5` lastname, `$6` active, `$7` lock_expires.
/// A new password also moves `password_changed_at` to now.
pub fn update() -> String {
    format!(
        "UPDATE {} SET \
         role_id = COALESCE($2, role_id), \
         hashed_password = COALESCE($3, hashed_password), \
         password_changed_at = CASE WHEN $3::text IS NULL THEN password_changed_at ELSE NOW() END, \
         firstname = COALESCE($4, firstname), \
         lastname = COALESCE($5, lastname), \
         active = COALESCE($6, active), \
         lock_expires = COALESCE($7, lock_expires) \
         WHERE email = $1 \
         RETURNING {}",
        ADMIN_TABLE, ADMIN_COLUMNS
    )
}

/// DELETE by email returning the removed row. `$1` = email.
pub fn delete() -> String {
    format!("DELETE FROM {} WHERE email = $1 RETURNING {}", ADMIN_TABLE, ADMIN_COLUMNS)
}

/// One page of admins. Filter arguments take `$1..$n`; LIMIT and OFFSET follow as `$n+1`, `$n+2`.
/// Non-key orderings fall back to `admin_id` so pages do not overlap.
pub fn select_list(
    filter: &FilterClause,
    order_by: AdminOrderBy,
    direction: SortDirection,
    limit: i64,
    offset: i64,
) -> QueryBuf {
    let mut q = QueryBuf::with_params(filter.args.clone());
    let mut order_clause = format!("{} {}", order_by.column(), direction.as_sql());
    if order_by != AdminOrderBy::AdminId {
        order_clause.push_str(&format!(", admin_id {}", direction.as_sql()));
    }
    let limit_ph = q.push_param(PgBindValue::I64(limit));
    let offset_ph = q.push_param(PgBindValue::I64(offset));
    q.sql = format!(
        "SELECT {} FROM {} WHERE TRUE{} ORDER BY {} LIMIT ${} OFFSET ${}",
        ADMIN_COLUMNS, ADMIN_TABLE, filter.sql, order_clause, limit_ph, offset_ph
    );
    q
}

/// Number of admins matching the same filter as [`select_list`], ignoring order and paging.
pub fn count(filter: &FilterClause) -> QueryBuf {
    let mut q = QueryBuf::with_params(filter.args.clone());
    q.sql = format!("SELECT COUNT(*) FROM {} WHERE TRUE{}", ADMIN_TABLE, filter.sql);
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::admin::AdminFilter;
    use crate::sql::build_filter_conditions;

    #[test]
    fn offset_formula() {
        assert_eq!(offset(10, 1), 0);
        assert_eq!(offset(10, 3), 20);
        assert_eq!(offset(25, 2), 25);
        assert_eq!(offset(0, 0), 0);
        assert_eq!(offset(5, 0), -5);
        assert_eq!(offset(i32::MAX, i32::MAX), i64::from(i32::MAX) * (i64::from(i32::MAX) - 1));
    }

    #[test]
    fn list_without_filter_binds_only_paging() {
        let q = select_list(&FilterClause::default(), AdminOrderBy::AdminId, SortDirection::Desc, 5, 10);
        assert_eq!(
            q.sql,
            format!("SELECT {} FROM admin WHERE TRUE ORDER BY admin_id DESC LIMIT $1 OFFSET $2", ADMIN_COLUMNS)
        );
        assert_eq!(q.params, vec![PgBindValue::I64(5), PgBindValue::I64(10)]);
    }

    #[test]
    fn list_paging_placeholders_follow_filter_args() {
        let filter = build_filter_conditions(&AdminFilter {
            email: Some("a@b.c".into()),
            lastname: Some("Doe".into()),
            ..Default::default()
        });
        let q = select_list(&filter, AdminOrderBy::Email, SortDirection::Asc, 20, 40);
        assert!(q.sql.ends_with(
            "WHERE TRUE AND email ILIKE $1 AND lastname ILIKE $2 ORDER BY email ASC, admin_id ASC LIMIT $3 OFFSET $4"
        ));
        assert_eq!(q.params.len(), 4);
        assert_eq!(q.params[2], PgBindValue::I64(20));
        assert_eq!(q.params[3], PgBindValue::I64(40));
    }

    #[test]
    fn count_shares_filter_and_ignores_paging() {
        let filter = build_filter_conditions(&AdminFilter {
            firstname: Some("Ann".into()),
            ..Default::default()
        });
        let list = select_list(&filter, AdminOrderBy::AdminId, SortDirection::Desc, 5, 0);
        let c = count(&filter);
        assert_eq!(c.sql, "SELECT COUNT(*) FROM admin WHERE TRUE AND firstname ILIKE $1");
        assert_eq!(c.params, filter.args);
        assert!(list.sql.contains(&filter.sql));
        assert!(!c.sql.contains("ORDER BY"));
        assert!(!c.sql.contains("LIMIT"));
    }

    #[test]
    fn single_row_statements_key_on_email() {
        assert!(select_by_email().ends_with("FROM admin WHERE email = $1"));
        assert!(delete().starts_with("DELETE FROM admin WHERE email = $1 RETURNING admin_id"));
        assert!(update().contains("WHERE email = $1"));
        assert!(update().contains("role_id = COALESCE($2, role_id)"));
        assert!(insert().contains("VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), $7)"));
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::default(), SortDirection::Desc);
    }
}
