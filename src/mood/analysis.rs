use serde::{Deserialize, Serialize};

/// Movie-search parameters derived from a mood description, either by the
/// language model or by the deterministic fallback classifier. Built once
/// per request and echoed back to the caller unchanged.
///
/// Every field defaults so that a partial JSON object from the model still
/// decodes; an analysis with no genres gets a default pair substituted by
/// the resolver.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MoodAnalysis {
    #[serde(default)]
    pub genres: Vec<i32>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub decade: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub avoid_genres: Vec<i32>,
    #[serde(default)]
    pub reasoning: String,
}

impl MoodAnalysis {
    pub fn new(genres: Vec<i32>, min_rating: f64, reasoning: &str) -> Self {
        Self {
            genres,
            min_rating: Some(min_rating),
            decade: None,
            keywords: Vec::new(),
            avoid_genres: Vec::new(),
            reasoning: reasoning.to_string(),
        }
    }
}
