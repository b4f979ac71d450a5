//! Blog admin backend: admin account CRUD over HTTP, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{load_from_env, AppConfig};
pub use error::{AppError, ConfigError};
pub use repository::{AdminRepository, PgAdminRepository};
pub use server::{build_router, run};
pub use service::AdminService;
pub use state::AppState;
