use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::mood::MoodResolver;
use crate::tmdb::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn Catalog>,
    pub resolver: Arc<MoodResolver>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<dyn Catalog>, resolver: Arc<MoodResolver>) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            resolver,
        }
    }
}

pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/", get(crate::api::root))
        .route("/health", get(crate::api::health))
        .route("/recommend", post(crate::api::recommend))
        .route("/recommend-ai", post(crate::api::recommend))
        .route("/analyze-mood", post(crate::api::analyze_mood))
        .route("/genres", get(crate::api::genres))
        .route("/movie/:id", get(crate::api::movie_details))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(allowed_origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
