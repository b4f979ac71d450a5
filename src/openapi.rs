//! OpenAPI document for the admin endpoints, served at `GET /openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::admin::{self, CreateAdminRequest, UpdateAdminRequest};
use crate::models::{Admin, ListAdminResponse};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "blog-admin", description = "Admin account management for the blog backend"),
    paths(
        admin::get_admin,
        admin::list_admins,
        admin::create_admin,
        admin::create_default_admin,
        admin::update_admin,
        admin::delete_admin,
    ),
    components(schemas(
        Admin,
        ListAdminResponse,
        CreateAdminRequest,
        UpdateAdminRequest,
        ErrorBody,
        ErrorDetail,
    )),
    tags((name = "admin", description = "Admin accounts"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
