//! Admin HTTP handlers: bind and validate input, call [`AdminService`](crate::service::AdminService),
//! return the stored record as JSON.

use crate::error::{AppError, ErrorBody};
use crate::models::{Admin, AdminChanges, AdminFilter, AdminOrderBy, ListAdminParams, ListAdminResponse, NewAdmin};
use crate::response::ok;
use crate::service::validation::{
    email, max_length, parse_optional, positive, require_non_blank, required, EMAIL_MAX_LEN, NAME_MAX_LEN,
};
use crate::sql::SortDirection;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query string for `GET /admin`. Values arrive as text so an empty `key=` reads as unset.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAdminQuery {
    /// Case-insensitive pattern (`%` wildcards allowed).
    pub email: Option<String>,
    pub active: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// Column to sort by; defaults to `admin_id`.
    pub order_by: Option<String>,
    /// `asc` or `desc`; defaults to `desc`.
    pub order_direction: Option<String>,
    pub page_size: Option<String>,
    pub current_page: Option<String>,
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Blank body strings count as unset, same as a missing key.
fn present(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

impl ListAdminQuery {
    pub fn to_list_params(&self) -> Result<ListAdminParams, AppError> {
        let email_filter = non_empty(&self.email);
        let firstname = non_empty(&self.firstname);
        let lastname = non_empty(&self.lastname);
        max_length("email", email_filter, EMAIL_MAX_LEN)?;
        max_length("firstname", firstname, NAME_MAX_LEN)?;
        max_length("lastname", lastname, NAME_MAX_LEN)?;

        let order_by = non_empty(&self.order_by)
            .map(|s| s.parse::<AdminOrderBy>().map_err(AppError::Validation))
            .transpose()?;
        let order_direction = non_empty(&self.order_direction)
            .map(|s| s.parse::<SortDirection>().map_err(AppError::Validation))
            .transpose()?;

        let page_size = required("page_size", parse_optional::<i32>("page_size", non_empty(&self.page_size))?)?;
        let current_page =
            required("current_page", parse_optional::<i32>("current_page", non_empty(&self.current_page))?)?;

        Ok(ListAdminParams {
            filter: AdminFilter {
                email: email_filter.map(str::to_string),
                active: parse_optional("active", non_empty(&self.active))?,
                firstname: firstname.map(str::to_string),
                lastname: lastname.map(str::to_string),
            },
            order_by,
            order_direction,
            page_size: positive("page_size", page_size)?,
            current_page: positive("current_page", current_page)?,
        })
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAdminRequest {
    pub role_id: Option<i64>,
    pub email: Option<String>,
    /// Plaintext; stored as an Argon2id hash.
    pub password: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    /// Defaults to `true`.
    pub active: Option<bool>,
    pub lock_expires: Option<DateTime<Utc>>,
}

impl CreateAdminRequest {
    pub fn into_new_admin(self) -> Result<NewAdmin, AppError> {
        let role_id = positive("role_id", required("role_id", self.role_id)?)?;
        let address = require_non_blank("email", self.email)?;
        email("email", &address)?;
        let password = require_non_blank("password", self.password)?;
        let firstname = require_non_blank("firstname", self.firstname)?;
        let lastname = present(self.lastname);
        max_length("firstname", Some(firstname.as_str()), NAME_MAX_LEN)?;
        max_length("lastname", lastname.as_deref(), NAME_MAX_LEN)?;
        Ok(NewAdmin {
            role_id,
            email: address,
            password,
            firstname,
            lastname,
            active: self.active,
            lock_expires: self.lock_expires,
        })
    }
}

/// Fields left out or blank keep their stored value. `email` selects the admin and cannot be changed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAdminRequest {
    pub email: Option<String>,
    pub role_id: Option<i64>,
    pub password: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub active: Option<bool>,
    pub lock_expires: Option<DateTime<Utc>>,
}

impl UpdateAdminRequest {
    pub fn into_changes(self) -> Result<AdminChanges, AppError> {
        let address = require_non_blank("email", self.email)?;
        email("email", &address)?;
        let role_id = self.role_id.map(|r| positive("role_id", r)).transpose()?;
        let firstname = present(self.firstname);
        let lastname = present(self.lastname);
        max_length("firstname", firstname.as_deref(), NAME_MAX_LEN)?;
        max_length("lastname", lastname.as_deref(), NAME_MAX_LEN)?;
        Ok(AdminChanges {
            email: address,
            role_id,
            password: present(self.password),
            firstname,
            lastname,
            active: self.active,
            lock_expires: self.lock_expires,
        })
    }
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|e| AppError::BadRequest(e.body_text()))
}

fn path_email(email: String) -> Result<String, AppError> {
    require_non_blank("email", Some(email))
}

#[utoipa::path(
    get,
    path = "/admin/{email}",
    tag = "admin",
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, body = Admin),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn get_admin(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<(StatusCode, Json<Admin>), AppError> {
    let email = path_email(email)?;
    Ok(ok(state.admins.get_admin(&email).await?))
}

#[utoipa::path(
    get,
    path = "/admin",
    tag = "admin",
    params(ListAdminQuery),
    responses(
        (status = 200, body = ListAdminResponse),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn list_admins(
    State(state): State<AppState>,
    query: Result<Query<ListAdminQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<ListAdminResponse>), AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let params = query.to_list_params()?;
    Ok(ok(state.admins.list_admins(&params).await?))
}

#[utoipa::path(
    post,
    path = "/admin",
    tag = "admin",
    request_body = CreateAdminRequest,
    responses(
        (status = 200, body = Admin),
        (status = 400, body = ErrorBody),
        (status = 409, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn create_admin(
    State(state): State<AppState>,
    payload: Result<Json<CreateAdminRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Admin>), AppError> {
    let input = json_body(payload)?.into_new_admin()?;
    Ok(ok(state.admins.create_admin(input).await?))
}

/// First-run bootstrap; same contract as `POST /admin`.
#[utoipa::path(
    post,
    path = "/default_admin",
    tag = "admin",
    request_body = CreateAdminRequest,
    responses(
        (status = 200, body = Admin),
        (status = 400, body = ErrorBody),
        (status = 409, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn create_default_admin(
    state: State<AppState>,
    payload: Result<Json<CreateAdminRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Admin>), AppError> {
    create_admin(state, payload).await
}

#[utoipa::path(
    put,
    path = "/admin",
    tag = "admin",
    request_body = UpdateAdminRequest,
    responses(
        (status = 200, body = Admin),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 409, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn update_admin(
    State(state): State<AppState>,
    payload: Result<Json<UpdateAdminRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Admin>), AppError> {
    let changes = json_body(payload)?.into_changes()?;
    Ok(ok(state.admins.update_admin(changes).await?))
}

#[utoipa::path(
    delete,
    path = "/admin/{email}",
    tag = "admin",
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, body = Admin),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody),
    )
)]
pub async fn delete_admin(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<(StatusCode, Json<Admin>), AppError> {
    let email = path_email(email)?;
    Ok(ok(state.admins.delete_admin(&email).await?))
}
