//! Domain entities. Only `admin` is served over HTTP; the rest describe the blog schema.

pub mod admin;
pub mod category;
pub mod comment;
pub mod links;
pub mod post;
pub mod role;
pub mod url_rewrite;
pub mod user;

pub use admin::{
    Admin, AdminChanges, AdminFilter, AdminOrderBy, CreateAdminParams, ListAdminParams, ListAdminResponse,
    NewAdmin, UpdateAdminParams,
};
