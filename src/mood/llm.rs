use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::MoodAnalysis;

const GROQ_MODEL: &str = "llama-3.1-8b-instant";
const SYSTEM_PROMPT: &str = "You are a movie recommendation expert. \
    Analyze moods and return JSON parameters for finding perfect movies.";

/// A mood analyzer that may fail. `None` means "unusable" and the caller
/// must substitute the deterministic fallback; no error ever propagates.
#[async_trait]
pub trait MoodAnalyzer: Send + Sync {
    async fn analyze(&self, mood: &str) -> Option<MoodAnalysis>;
}

/// Mood analyzer backed by Groq's OpenAI-compatible chat completions API.
pub struct GroqAnalyzer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl GroqAnalyzer {
    pub fn new(api_key: String, base_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    fn build_prompt(mood: &str) -> String {
        format!(
            r#"Analyze this mood/feeling: "{mood}"

Based on this mood, recommend movie parameters. Consider:
- What genres would match this mood?
- What rating range would be appropriate?
- What decade/era might fit?
- Should we avoid certain themes?

Return ONLY a JSON object with this exact structure:
{{
    "genres": [list of TMDB genre IDs],
    "min_rating": 6.0,
    "decade": "2010s or 2000s or 1990s or any",
    "keywords": ["keyword1", "keyword2"],
    "avoid_genres": [genre IDs to avoid],
    "reasoning": "brief explanation of choices"
}}

Genre IDs reference:
- Comedy: 35, Drama: 18, Action: 28, Thriller: 53, Horror: 27
- Romance: 10749, Sci-Fi: 878, Fantasy: 14, Animation: 16
- Family: 10751, Adventure: 12, Crime: 80, Mystery: 9648
- History: 36, Music: 10402, Documentary: 99"#
        )
    }

    async fn completion(&self, prompt: &str) -> Option<String> {
        let body = ChatRequest {
            model: GROQ_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.3,
            max_tokens: 500,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| warn!("Groq API call failed: {}", e))
            .ok()?;

        if !response.status().is_success() {
            warn!("Groq API returned status {}", response.status());
            return None;
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| warn!("Groq response body unreadable: {}", e))
            .ok()?;

        let choice = parsed.choices.into_iter().next()?;
        Some(choice.message.content.trim().to_string())
    }
}

#[async_trait]
impl MoodAnalyzer for GroqAnalyzer {
    async fn analyze(&self, mood: &str) -> Option<MoodAnalysis> {
        let prompt = Self::build_prompt(mood);
        debug!(mood = %mood, prompt = %prompt, "sending mood analysis prompt");

        let reply = self.completion(&prompt).await?;
        debug!(reply = %reply, "raw model reply");

        match parse_analysis(&reply) {
            Some(analysis) => {
                debug!(?analysis, "parsed AI analysis");
                Some(analysis)
            }
            None => {
                warn!("no usable JSON object in model reply");
                None
            }
        }
    }
}

/// Extract the first balanced-looking `{...}` slice from free text: the
/// first `{` through the last `}`. Returns `None` when either delimiter
/// is missing.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Strict decode of the extracted slice; any decode failure means the
/// whole reply is unusable. No partial recovery.
fn parse_analysis(reply: &str) -> Option<MoodAnalysis> {
    let slice = extract_json(reply)?;
    serde_json::from_str(slice).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_embedded() {
        let text = "Sure! Here you go:\n{\"genres\": [35]}\nEnjoy.";
        assert_eq!(extract_json(text), Some("{\"genres\": [35]}"));
    }

    #[test]
    fn test_extract_json_no_braces() {
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("only open {"), None);
        assert_eq!(extract_json("} reversed {"), None);
    }

    #[test]
    fn test_parse_analysis_valid() {
        let reply = "Analysis below.\n{\"genres\": [18, 36], \"min_rating\": 7.5, \
                     \"reasoning\": \"history fits\"}";
        let analysis = parse_analysis(reply).unwrap();
        assert_eq!(analysis.genres, vec![18, 36]);
        assert_eq!(analysis.min_rating, Some(7.5));
        assert_eq!(analysis.reasoning, "history fits");
    }

    #[test]
    fn test_parse_analysis_malformed_json() {
        assert!(parse_analysis("{\"genres\": [35,}").is_none());
        assert!(parse_analysis("I cannot answer that.").is_none());
    }

    #[test]
    fn test_parse_analysis_nested_braces() {
        // rfind takes the last brace, so trailing prose after the object
        // still parses as long as it has no closing brace of its own.
        let reply = "{\"genres\": [878], \"reasoning\": \"works\"} done";
        let analysis = parse_analysis(reply).unwrap();
        assert_eq!(analysis.genres, vec![878]);
    }

    #[test]
    fn test_prompt_embeds_mood() {
        let prompt = GroqAnalyzer::build_prompt("wistful");
        assert!(prompt.contains("\"wistful\""));
        assert!(prompt.contains("Comedy: 35"));
    }
}
