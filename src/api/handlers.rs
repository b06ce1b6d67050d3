use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::server::AppState;

use super::error::ApiError;
use super::types::{
    HealthResponse, MoodAnalysisResponse, RecommendationRequest, RecommendationResponse,
};

/// At most this many movies per response, regardless of what the catalog
/// page contains.
const MAX_RESULTS: usize = 10;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Movie Recommender API is running with AI!" }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let ai_status = if state.resolver.llm_configured() {
        "available"
    } else {
        "unavailable"
    };
    Json(HealthResponse {
        status: "healthy",
        ai_status,
        features: vec!["mood_analysis", "tmdb_integration"],
    })
}

/// Mood-based movie recommendations: resolve the mood to catalog query
/// parameters, run one discover search, keep the top of the page.
/// `/recommend-ai` is routed here as well.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    if request.mood.trim().is_empty() {
        return Err(ApiError::BadRequest("mood must not be empty".to_string()));
    }

    info!(mood = %request.mood, "analyzing mood");
    let (query, analysis) = state.resolver.resolve(&request).await;

    let mut movies = state.catalog.discover(&query).await?;
    movies.truncate(MAX_RESULTS);

    Ok(Json(RecommendationResponse {
        mood: request.mood,
        total_results: movies.len(),
        movies,
        ai_analysis: analysis,
    }))
}

/// Mood-analysis step only, for inspecting what the resolver would do.
pub async fn analyze_mood(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<MoodAnalysisResponse>, ApiError> {
    if request.mood.trim().is_empty() {
        return Err(ApiError::BadRequest("mood must not be empty".to_string()));
    }

    let (analysis, ai_used) = state.resolver.analyze(&request.mood).await;

    Ok(Json(MoodAnalysisResponse {
        mood: request.mood,
        analysis,
        ai_used,
    }))
}

pub async fn genres(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let genres = state.catalog.genre_list().await?;
    Ok(Json(genres))
}

pub async fn movie_details(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let details = state.catalog.movie_details(movie_id).await?;
    Ok(Json(details))
}
