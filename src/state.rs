//! Shared application state for all routes.

use crate::repository::AdminRepository;
use crate::service::AdminService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub admins: Arc<AdminService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn AdminRepository>) -> Self {
        AppState {
            admins: Arc::new(AdminService::new(repo)),
        }
    }
}
