//! tegh-site library
//!
//! Read-only JSON API and embedded browser client for the Sri Guru Tegh
//! Bahadur Ji site. All content lives in an in-memory [`store::ContentStore`]
//! built once at startup.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, Method};
use axum::Router;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod store;

use store::ContentStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded content (read-only)
    pub store: Arc<ContentStore>,
    /// Directory served for paths no route claims
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(store: ContentStore, public_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(store),
            public_dir,
        }
    }
}

/// Build the served application
///
/// A trailing slash is trimmed before routing, so `/api/shabads/` is
/// answered like `/api/shabads`.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

/// Build application router with its middleware
pub fn build_router(state: AppState) -> Router {
    with_middleware(routes(state))
}

/// Application routes without middleware
///
/// `/api/*` paths that match no route get a JSON 404; every other unmatched
/// path is looked up in the public directory.
pub fn routes(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/biography/timeline", get(api::biography::get_timeline))
        .route("/biography/sections", get(api::biography::get_sections))
        .route("/shabads", get(api::shabads::list_shabads))
        .route("/shabads/:id", get(api::shabads::get_shabad))
        .route("/raags", get(api::raags::list_raags))
        .route("/raags/:id", get(api::raags::get_raag))
        .route("/raags/:id/shabads", get(api::raags::get_raag_shabads))
        .route("/gurdwaras", get(api::gurdwaras::list_gurdwaras))
        .route("/gurdwaras/:id", get(api::gurdwaras::get_gurdwara))
        .route("/resources", get(api::resources::list_resources))
        .route("/audio", get(api::audio::list_audio))
        .route("/baani/text", get(api::baani::get_text))
        .route("/baani/pages", get(api::baani::list_pages))
        .route("/baani/pages/:id", get(api::baani::get_page))
        .route("/baani/pages/number/:n", get(api::baani::get_page_by_number))
        .route("/baani/raags", get(api::baani::get_raags_text))
        .route("/baani/raags/:id", get(api::baani::get_raag))
        .route("/buildinfo", get(api::get_build_info))
        .fallback(api::api_not_found);

    let public = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/app.css", get(api::serve_app_css))
        .merge(api::health_routes());

    let static_files = ServeDir::new(&state.public_dir);

    Router::new()
        .nest("/api", api)
        .merge(public)
        .fallback_service(static_files)
        .with_state(state)
}

/// Wrap routes in panic recovery, request tracing and CORS
pub fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    router
        .layer(CatchPanicLayer::custom(api::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
