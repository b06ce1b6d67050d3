use std::sync::Arc;
use tracing::info;

use crate::api::types::RecommendationRequest;
use crate::tmdb::DiscoverQuery;

use super::fallback::{fallback_analysis, mood_genre_table, DEFAULT_GENRES};
use super::{MoodAnalysis, MoodAnalyzer};

/// Turns one recommendation request into catalog query parameters, plus
/// the analysis used (echoed back to the caller). The language-model
/// analyzer is an optional injected collaborator; when it is absent or
/// yields nothing usable, the deterministic fallback takes over, so this
/// layer never fails.
pub struct MoodResolver {
    analyzer: Option<Arc<dyn MoodAnalyzer>>,
}

impl MoodResolver {
    pub fn new(analyzer: Option<Arc<dyn MoodAnalyzer>>) -> Self {
        Self { analyzer }
    }

    pub fn llm_configured(&self) -> bool {
        self.analyzer.is_some()
    }

    /// Analyze a mood string. The bool reports whether the language model
    /// produced the analysis (false on fallback).
    pub async fn analyze(&self, mood: &str) -> (MoodAnalysis, bool) {
        if let Some(analyzer) = &self.analyzer {
            if let Some(analysis) = analyzer.analyze(mood).await {
                return (analysis, true);
            }
            info!(mood = %mood, "AI analysis unusable, using fallback");
        }
        (fallback_analysis(mood), false)
    }

    pub async fn resolve(&self, request: &RecommendationRequest) -> (DiscoverQuery, MoodAnalysis) {
        let (analysis, _) = self.analyze(&request.mood).await;

        // The analysis may carry an empty genre list (the model is free to
        // return one); fall back to the static table and then to the
        // default pair so the query never goes out genre-less.
        let genre_ids = if !analysis.genres.is_empty() {
            analysis.genres.clone()
        } else {
            mood_genre_table()
                .get(request.mood.to_lowercase().as_str())
                .cloned()
                .unwrap_or_else(|| DEFAULT_GENRES.to_vec())
        };

        let mut min_rating = analysis.min_rating;
        let mut release_year = None;

        // Explicit request filters always win over analysis-derived values.
        if let Some(filters) = &request.filters {
            if filters.min_rating.is_some() {
                min_rating = filters.min_rating;
            }
            release_year = filters.year;
        }

        let query = DiscoverQuery {
            genre_ids,
            min_rating,
            release_year,
        };

        (query, analysis)
    }
}
