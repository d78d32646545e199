use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonecatError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Expected a JSON array of items, found {found}")]
    UnexpectedBody { found: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PhonecatError {
    /// Whether the error came from the remote resource rather than local setup.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::ApiError(_) | Self::HttpStatus { .. } | Self::UnexpectedBody { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_connect() => {
                "Could not reach the phone catalogue server".to_string()
            }
            Self::ApiError(_) => "The phone catalogue request failed".to_string(),
            Self::HttpStatus { status, .. } => {
                format!("The phone catalogue server answered with {}", status)
            }
            Self::UnexpectedBody { .. } => {
                "The phone catalogue server returned something other than a list".to_string()
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::TomlError(_) => "The configuration file is not valid TOML".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) | Self::HttpStatus { .. } => {
                "Check that the server is running and --base-url points at it"
            }
            Self::UnexpectedBody { .. } => "Make sure /phonecat/phones serves a JSON array",
            Self::IoError(_) => "Check the file path and its permissions",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => "Fix the configuration and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, PhonecatError>;
