use thiserror::Error;

#[derive(Error, Debug)]
pub enum MynaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfig { field: String },

    #[error("Unknown template filter: {name}")]
    UnknownFilter { name: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    GlobError { pattern: String, reason: String },
}

impl MynaError {
    /// User-facing message without internal field paths or raw values.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MynaError::IoError(e) => format!("File operation failed: {}", e),
            MynaError::SerializationError(e) => format!("Could not serialize output: {}", e),
            MynaError::ConfigError { message } => format!("Configuration problem: {}", message),
            MynaError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            MynaError::MissingConfig { field } => {
                format!("Configuration field '{}' is required", field)
            }
            MynaError::UnknownFilter { name } => {
                format!("No template filter named '{}' is registered", name)
            }
            MynaError::GlobError { pattern, reason } => format!(
                "Content-scan pattern '{}' is not a valid glob: {}",
                pattern, reason
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, MynaError>;
