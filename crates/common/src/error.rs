/// Beonyeok error types
#[derive(Debug, thiserror::Error)]
pub enum BeonyeokError {
    /// Configuration error (missing credential, bad value)
    #[error("Configuration error: {0}")]
    Config(String),

    /// External translation call failed
    #[error("Translation error: {0}")]
    Translation(String),

    /// Uploaded glossary file failed validation
    #[error("Import validation error: {0}")]
    ImportValidation(String),

    /// Persisted store is malformed
    #[error("File parse error: {0}")]
    FileParse(String),

    /// File system error
    #[error("File system error: {0}")]
    FileSystem(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BeonyeokError {
    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create translation error
    pub fn translation<S: Into<String>>(msg: S) -> Self {
        Self::Translation(msg.into())
    }

    /// Create import validation error
    pub fn import_validation<S: Into<String>>(msg: S) -> Self {
        Self::ImportValidation(msg.into())
    }

    /// Create file parse error
    pub fn file_parse<S: Into<String>>(msg: S) -> Self {
        Self::FileParse(msg.into())
    }

    /// Create file system error
    pub fn file_system<S: Into<String>>(msg: S) -> Self {
        Self::FileSystem(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

// HTTP response conversion (for actix-web)
impl BeonyeokError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::ImportValidation(_) => 400,
            Self::Json(_) => 400,
            Self::Translation(_) => 502,
            Self::Network(_) => 503,
            Self::Config(_) => 500,
            Self::FileParse(_) => 500,
            Self::FileSystem(_) => 500,
            Self::Csv(_) => 500,
            Self::Io(_) => 500,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BeonyeokError::import_validation("x").status_code(), 400);
        assert_eq!(BeonyeokError::translation("x").status_code(), 502);
        assert_eq!(BeonyeokError::network("x").status_code(), 503);
        assert_eq!(BeonyeokError::file_parse("x").status_code(), 500);
    }

    #[test]
    fn test_display_includes_kind() {
        let e = BeonyeokError::config("OPENAI_API_KEY is not set");
        assert!(e.to_string().contains("Configuration error"));
        assert!(e.to_string().contains("OPENAI_API_KEY"));
    }
}
