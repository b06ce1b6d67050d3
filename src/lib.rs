pub mod api;
pub mod config;
pub mod middleware;
pub mod mood;
pub mod server;
pub mod tmdb;

use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use mood::{GroqAnalyzer, MoodAnalyzer, MoodResolver};
use tmdb::TmdbClient;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Server error: {0}")]
    Server(String),
}

pub async fn run(config_path: Option<&str>) -> Result<(), ServerError> {
    let config = config::Config::load(config_path)?;

    if let Some(path) = config_path {
        info!("Using config file: {}", path);
    }
    info!("Allowed origin: {}", config.allowed_origin);

    let catalog = TmdbClient::new(config.tmdb_api_key.clone(), config.tmdb_base_url.clone())
        .map_err(|e| ServerError::Server(format!("Failed to create TMDB client: {}", e)))?;

    let analyzer: Option<Arc<dyn MoodAnalyzer>> = match &config.groq_api_key {
        Some(key) => {
            let analyzer = GroqAnalyzer::new(key.clone(), config.groq_base_url.clone())
                .map_err(|e| ServerError::Server(format!("Failed to create Groq client: {}", e)))?;
            info!("Groq client initialized, AI mood analysis enabled");
            Some(Arc::new(analyzer))
        }
        None => {
            warn!("GROQ_API_KEY not set, AI mood analysis disabled (fallback only)");
            None
        }
    };

    let resolver = Arc::new(MoodResolver::new(analyzer));

    let allowed_origin: HeaderValue = config
        .allowed_origin
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid allowed origin: {}", e)))?;

    let address = config.listen.address.as_deref().unwrap_or("[::]");
    let port = &config.listen.port;
    let addr: SocketAddr = format!("{}:{}", address, port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let state = server::AppState::new(config, Arc::new(catalog), resolver);
    let app = server::build_router(state, allowed_origin);

    info!("Serving HTTP on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
