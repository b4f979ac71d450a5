//! Admin CRUD routes plus the first-run bootstrap endpoints.

use crate::handlers::admin::{create_admin, create_default_admin, delete_admin, get_admin, list_admins, update_admin};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/", post(create_default_admin))
        .route("/default_admin", post(create_default_admin))
        .route("/admin", get(list_admins).post(create_admin).put(update_admin))
        .route("/admin/", get(list_admins).post(create_admin).put(update_admin))
        .route("/admin/:email", get(get_admin).delete(delete_admin))
        .with_state(state)
}
