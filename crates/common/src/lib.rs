pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, ColumnScheme};
pub use error::BeonyeokError;
pub type Result<T> = std::result::Result<T, BeonyeokError>;
