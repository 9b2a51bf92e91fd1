//! HTTP API handlers for tegh-site

pub mod audio;
pub mod baani;
pub mod biography;
pub mod buildinfo;
pub mod error;
pub mod gurdwaras;
pub mod health;
pub mod raags;
pub mod resources;
pub mod shabads;
pub mod ui;

pub use buildinfo::get_build_info;
pub use error::{api_not_found, handle_panic, ApiError, ApiResult};
pub use health::health_routes;
pub use ui::{serve_app_css, serve_app_js, serve_index};
