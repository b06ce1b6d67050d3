use serde::{Deserialize, Serialize};

/// One movie record as returned by TMDB's discover endpoint. Mirrors the
/// upstream shape; no local identity or storage.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

#[derive(Debug, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub results: Vec<CatalogMovie>,
}

/// Parameters for one discover call. Paging and sorting are fixed policy:
/// best-rated first, at least 100 votes, first page only.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverQuery {
    pub genre_ids: Vec<i32>,
    pub min_rating: Option<f64>,
    pub release_year: Option<i32>,
}

impl DiscoverQuery {
    /// Serialize to TMDB query parameters (without the API key, which the
    /// client appends).
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let genre_string = self
            .genre_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut params = vec![
            ("with_genres", genre_string),
            ("sort_by", "vote_average.desc".to_string()),
            ("vote_count.gte", "100".to_string()),
            ("page", "1".to_string()),
        ];

        if let Some(min_rating) = self.min_rating {
            params.push(("vote_average.gte", min_rating.to_string()));
        }
        if let Some(year) = self.release_year {
            params.push(("primary_release_year", year.to_string()));
        }

        params
    }
}
