use thiserror::Error;

/// Shiplog error types
#[derive(Error, Debug)]
pub enum ShiplogError {
    #[error("Missing required argument: --{0}")]
    MissingArgument(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid slug '{0}': expected lowercase letters/digits separated by single hyphens")]
    InvalidSlugFormat(String),

    #[error("Duplicate slug '{0}': an entry with this slug already exists")]
    DuplicateSlug(String),

    #[error("Malformed index: {0}")]
    MalformedIndex(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Audit failed: {0}")]
    Audit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for Shiplog operations
pub type Result<T> = std::result::Result<T, ShiplogError>;
