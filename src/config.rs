use serde::{Deserialize, Serialize};

const TMDB_API_KEY_VAR: &str = "TMDB_API_KEY";
const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
    #[serde(default = "default_tmdb_base_url")]
    pub tmdb_base_url: String,
    #[serde(default = "default_groq_base_url")]
    pub groq_base_url: String,
    #[serde(skip)]
    pub tmdb_api_key: String,
    #[serde(skip)]
    pub groq_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: ListenConfig::default(),
            allowed_origin: default_allowed_origin(),
            tmdb_base_url: default_tmdb_base_url(),
            groq_base_url: default_groq_base_url(),
            tmdb_api_key: String::new(),
            groq_api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
        }
    }
}

fn default_port() -> String {
    "8000".to_string()
}

fn default_allowed_origin() -> String {
    "https://watchthis-black.vercel.app".to_string()
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_groq_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

impl Config {
    /// Load configuration. The YAML file is optional and only carries the
    /// listen address, CORS origin and upstream base URLs; API keys always
    /// come from the environment. A missing GROQ_API_KEY disables the AI
    /// path and is not an error.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };

        config.tmdb_api_key = std::env::var(TMDB_API_KEY_VAR)
            .map_err(|_| ConfigError::MissingEnv(TMDB_API_KEY_VAR))?;
        config.groq_api_key = std::env::var(GROQ_API_KEY_VAR)
            .ok()
            .filter(|k| !k.is_empty());

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Missing required environment variable {0}")]
    MissingEnv(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen.port, "8000");
        assert_eq!(config.allowed_origin, "https://watchthis-black.vercel.app");
        assert_eq!(config.tmdb_base_url, "https://api.themoviedb.org/3");
        assert!(config.groq_api_key.is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "listen:\n  port: \"9000\"\nallowed_origin: \"http://localhost:3000\"\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.listen.port, "9000");
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert_eq!(config.tmdb_base_url, "https://api.themoviedb.org/3");
    }
}
