use crate::error::BeonyeokError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Header naming scheme for the glossary CSV.
///
/// The upstream deployments disagreed on column names, so the pair is a
/// per-deployment option instead of separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnScheme {
    /// "영어" / "한글"
    Korean,
    /// "English" / "Korean"
    English,
}

impl ColumnScheme {
    /// Column header for source-language terms
    pub fn source_header(&self) -> &'static str {
        match self {
            Self::Korean => "영어",
            Self::English => "English",
        }
    }

    /// Column header for target-language terms
    pub fn target_header(&self) -> &'static str {
        match self {
            Self::Korean => "한글",
            Self::English => "Korean",
        }
    }

    fn parse(s: &str) -> Result<Self, BeonyeokError> {
        match s.to_lowercase().as_str() {
            "korean" => Ok(Self::Korean),
            "english" => Ok(Self::English),
            other => Err(BeonyeokError::config(format!(
                "GLOSSARY_COLUMNS must be 'korean' or 'english', got '{}'",
                other
            ))),
        }
    }
}

/// Beonyeok application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data base path (glossary, style guide, notepad)
    pub data_dir: PathBuf,

    /// Glossary CSV path
    pub glossary_path: PathBuf,

    /// Style guide text file path
    pub style_guide_path: PathBuf,

    /// Shared notepad text file path
    pub notepad_path: PathBuf,

    /// Whether the shared notepad is exposed at all
    pub notepad_enabled: bool,

    /// Glossary CSV column naming scheme
    pub glossary_columns: ColumnScheme,

    /// OpenAI-compatible API key
    pub openai_api_key: String,

    /// OpenAI-compatible API base URL
    pub openai_base_url: String,

    /// Translation model identifier
    pub model: String,

    /// Sampling temperature (kept low for near-deterministic output)
    pub temperature: f32,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from("./data");
        Self {
            glossary_path: data_dir.join("glossary.csv"),
            style_guide_path: data_dir.join("style_guide.txt"),
            notepad_path: data_dir.join("notepad.txt"),
            data_dir,
            notepad_enabled: false,
            glossary_columns: ColumnScheme::Korean,
            openai_api_key: String::new(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4.1-mini".to_string(),
            temperature: 0.1,
            server_host: "127.0.0.1".to_string(),
            server_port: 8600,
            log_dir: PathBuf::from("./data/log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, BeonyeokError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let data_dir = Self::get_env_path("DATA_DIR").unwrap_or_else(|| PathBuf::from("./data"));

        let config = Self {
            glossary_path: Self::get_env_path("GLOSSARY_PATH")
                .unwrap_or_else(|| data_dir.join("glossary.csv")),
            style_guide_path: Self::get_env_path("STYLE_GUIDE_PATH")
                .unwrap_or_else(|| data_dir.join("style_guide.txt")),
            notepad_path: Self::get_env_path("NOTEPAD_PATH")
                .unwrap_or_else(|| data_dir.join("notepad.txt")),
            notepad_enabled: std::env::var("NOTEPAD_ENABLED")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            glossary_columns: match std::env::var("GLOSSARY_COLUMNS") {
                Ok(v) => ColumnScheme::parse(&v)?,
                Err(_) => ColumnScheme::Korean,
            },
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: std::env::var("TRANSLATION_MODEL")
                .unwrap_or_else(|_| "gpt-4.1-mini".to_string()),
            temperature: std::env::var("TRANSLATION_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.1),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8600),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or_else(|| data_dir.join("log")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            data_dir,
        };

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), BeonyeokError> {
        for dir in [&self.data_dir, &self.log_dir] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    BeonyeokError::config(format!(
                        "Failed to create directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    ///
    /// A missing API key is fatal: the service must not come up in a state
    /// where every translate action is doomed to fail.
    pub fn validate(&self) -> Result<(), BeonyeokError> {
        if self.openai_api_key.trim().is_empty() {
            return Err(BeonyeokError::config(
                "OPENAI_API_KEY is not set. Add it to the environment or a .env file.",
            ));
        }

        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://")
        {
            return Err(BeonyeokError::config(
                "OpenAI base URL must start with http:// or https://",
            ));
        }

        if self.server_port == 0 {
            return Err(BeonyeokError::config("Server port cannot be 0"));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(BeonyeokError::config(
                "TRANSLATION_TEMPERATURE must be between 0.0 and 2.0",
            ));
        }

        Ok(())
    }
}
