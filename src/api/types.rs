use serde::{Deserialize, Serialize};

use crate::mood::MoodAnalysis;
use crate::tmdb::CatalogMovie;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendationRequest {
    pub mood: String,
    #[serde(default)]
    pub filters: Option<RequestFilters>,
}

/// Explicit filters supplied by the caller; these always override the
/// analysis-derived values of the same field.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestFilters {
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub mood: String,
    pub movies: Vec<CatalogMovie>,
    pub total_results: usize,
    pub ai_analysis: MoodAnalysis,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ai_status: &'static str,
    pub features: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct MoodAnalysisResponse {
    pub mood: String,
    pub analysis: MoodAnalysis,
    pub ai_used: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_filters() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"mood": "cozy"}"#).unwrap();
        assert_eq!(request.mood, "cozy");
        assert!(request.filters.is_none());
    }

    #[test]
    fn test_request_with_filters() {
        let request: RecommendationRequest = serde_json::from_str(
            r#"{"mood": "tense", "filters": {"min_rating": 7.0, "year": 1999}}"#,
        )
        .unwrap();
        let filters = request.filters.unwrap();
        assert_eq!(filters.min_rating, Some(7.0));
        assert_eq!(filters.year, Some(1999));
    }

    #[test]
    fn test_request_with_partial_filters() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"mood": "tense", "filters": {"year": 2010}}"#).unwrap();
        let filters = request.filters.unwrap();
        assert!(filters.min_rating.is_none());
        assert_eq!(filters.year, Some(2010));
    }
}
