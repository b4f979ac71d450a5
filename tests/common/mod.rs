//! Shared helpers for the HTTP tests: an in-memory admin store and request shortcuts.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use blog_admin::error::AppError;
use blog_admin::models::{Admin, AdminOrderBy, CreateAdminParams, ListAdminParams, UpdateAdminParams};
use blog_admin::sql::SortDirection;
use blog_admin::{build_router, AdminRepository, AppState};
use chrono::Utc;
use http_body_util::BodyExt;
use regex::RegexBuilder;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TEST_MAX_BODY_BYTES: usize = 64 * 1024;

/// Mirrors the PostgreSQL statements closely enough for HTTP-level tests:
/// unique email, coalesce updates, ILIKE filters, ordering with an `admin_id` tiebreaker.
#[derive(Default)]
pub struct MemoryAdminRepository {
    rows: Mutex<Vec<Admin>>,
    next_id: Mutex<i32>,
    pub unavailable: AtomicBool,
}

impl MemoryAdminRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn stored(&self, email: &str) -> Option<Admin> {
        self.rows.lock().unwrap().iter().find(|a| a.email == email).cloned()
    }
}

fn ilike(value: &str, pattern: &str) -> bool {
    let mut re = String::from("^");
    for c in pattern.chars() {
        match c {
            '%' => re.push_str(".*"),
            '_' => re.push('.'),
            other => re.push_str(&regex::escape(&other.to_string())),
        }
    }
    re.push('$');
    RegexBuilder::new(&re)
        .case_insensitive(true)
        .build()
        .map(|r| r.is_match(value))
        .unwrap_or(false)
}

fn matches(admin: &Admin, params: &ListAdminParams) -> bool {
    let f = &params.filter;
    let text = |pattern: &Option<String>, value: Option<&str>| match pattern.as_deref() {
        None | Some("") => true,
        Some(p) => value.map(|v| ilike(v, p)).unwrap_or(false),
    };
    text(&f.email, Some(&admin.email))
        && text(&f.firstname, Some(&admin.firstname))
        && text(&f.lastname, admin.lastname.as_deref())
        && f.active.map(|want| admin.active == Some(want)).unwrap_or(true)
}

/// PostgreSQL sorts NULL above every value: NULLS LAST for ASC, NULLS FIRST for DESC.
fn nulls_high<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.cmp(y),
    }
}

fn compare(a: &Admin, b: &Admin, order_by: AdminOrderBy) -> Ordering {
    match order_by {
        AdminOrderBy::AdminId => a.admin_id.cmp(&b.admin_id),
        AdminOrderBy::RoleId => a.role_id.cmp(&b.role_id),
        AdminOrderBy::Email => a.email.cmp(&b.email),
        AdminOrderBy::Firstname => a.firstname.cmp(&b.firstname),
        AdminOrderBy::Lastname => nulls_high(&a.lastname, &b.lastname),
        AdminOrderBy::Active => nulls_high(&a.active, &b.active),
        AdminOrderBy::LockExpires => nulls_high(&a.lock_expires, &b.lock_expires),
        AdminOrderBy::PasswordChangedAt => a.password_changed_at.cmp(&b.password_changed_at),
        AdminOrderBy::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

#[async_trait]
impl AdminRepository for MemoryAdminRepository {
    async fn get(&self, email: &str) -> Result<Admin, AppError> {
        self.stored(email)
            .ok_or_else(|| AppError::NotFound(format!("admin '{}'", email)))
    }

    async fn list(&self, params: &ListAdminParams) -> Result<(Vec<Admin>, i64), AppError> {
        let offset = params.offset();
        if params.page_size < 0 || offset < 0 {
            return Err(AppError::Validation("negative page".into()));
        }
        let order_by = params.order_by.unwrap_or_default();
        let direction = params.order_direction.unwrap_or_default();
        let mut hits: Vec<Admin> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| matches(a, params))
            .cloned()
            .collect();
        hits.sort_by(|a, b| {
            let ord = compare(a, b, order_by).then(a.admin_id.cmp(&b.admin_id));
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        let totals = hits.len() as i64;
        let page = hits
            .into_iter()
            .skip(offset as usize)
            .take(params.page_size as usize)
            .collect();
        Ok((page, totals))
    }

    async fn create(&self, params: &CreateAdminParams) -> Result<Admin, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.email == params.email) {
            return Err(AppError::Conflict(format!("admin '{}' already exists", params.email)));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let now = Utc::now();
        let admin = Admin {
            admin_id: *next_id,
            role_id: params.role_id,
            email: params.email.clone(),
            hashed_password: params.hashed_password.clone(),
            firstname: params.firstname.clone(),
            lastname: params.lastname.clone(),
            active: Some(params.active.unwrap_or(true)),
            lock_expires: params.lock_expires,
            password_changed_at: now,
            created_at: now,
        };
        rows.push(admin.clone());
        Ok(admin)
    }

    async fn update(&self, params: &UpdateAdminParams) -> Result<Admin, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let admin = rows
            .iter_mut()
            .find(|a| a.email == params.email)
            .ok_or_else(|| AppError::NotFound(format!("admin '{}'", params.email)))?;
        if let Some(role_id) = params.role_id {
            admin.role_id = role_id;
        }
        if let Some(hash) = &params.hashed_password {
            admin.hashed_password = hash.clone();
            admin.password_changed_at = Utc::now();
        }
        if let Some(firstname) = &params.firstname {
            admin.firstname = firstname.clone();
        }
        if params.lastname.is_some() {
            admin.lastname = params.lastname.clone();
        }
        if params.active.is_some() {
            admin.active = params.active;
        }
        if params.lock_expires.is_some() {
            admin.lock_expires = params.lock_expires;
        }
        Ok(admin.clone())
    }

    async fn delete(&self, email: &str) -> Result<Admin, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let idx = rows
            .iter()
            .position(|a| a.email == email)
            .ok_or_else(|| AppError::NotFound(format!("admin '{}'", email)))?;
        Ok(rows.remove(idx))
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

/// Router with the production middleware stack over a fresh in-memory store.
pub fn build_test_app() -> (Router, Arc<MemoryAdminRepository>) {
    let repo = Arc::new(MemoryAdminRepository::default());
    let state = AppState::new(repo.clone());
    (build_router(state, TEST_MAX_BODY_BYTES), repo)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn admin_body(email: &str, firstname: &str) -> serde_json::Value {
    serde_json::json!({
        "role_id": 1,
        "email": email,
        "password": "s3cret-pass",
        "firstname": firstname,
    })
}
