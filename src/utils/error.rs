use crate::core::selection::SelectionError;
use thiserror::Error;

/// Message shown for every failure of the regulation service.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch driving regulations. Please try again.";

#[derive(Error, Debug)]
pub enum GlobalDriveError {
    #[error("{}", FETCH_FAILED_MESSAGE)]
    FetchFailed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{0}")]
    Selection(#[from] SelectionError),

    #[error("Unknown country: {name}")]
    UnknownCountry { name: String },

    #[error("'{name}' matches several countries: {candidates}")]
    AmbiguousCountry { name: String, candidates: String },

    #[error("Both origin and destination must be selected")]
    IncompleteSelection,

    #[error("The disclaimer has not been accepted")]
    TermsNotAccepted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    UserInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GlobalDriveError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FetchFailed => ErrorCategory::Network,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. }
            | Self::Selection(_)
            | Self::UnknownCountry { .. }
            | Self::AmbiguousCountry { .. }
            | Self::IncompleteSelection
            | Self::TermsNotAccepted => ErrorCategory::UserInput,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::UserInput => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FetchFailed => FETCH_FAILED_MESSAGE.to_string(),
            Self::IoError(_) | Self::SerializationError(_) => {
                "Could not read or write local preferences".to_string()
            }
            Self::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FetchFailed => "Check your network connection and API key, then retry",
            Self::IoError(_) | Self::SerializationError(_) => {
                "Check that the preferences path is writable, or delete a corrupted preferences file"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
            Self::MissingConfigError { .. } => {
                "Set GEMINI_API_KEY or add api_key to the [service] section"
            }
            Self::ValidationError { .. } => "Check the supplied values",
            Self::Selection(_) => "Pick a different country for one of the two roles",
            Self::UnknownCountry { .. } => "Run `globaldrive countries` to list valid names",
            Self::AmbiguousCountry { .. } => "Use the full country name or its two-letter code",
            Self::IncompleteSelection => "Provide both --origin and --destination",
            Self::TermsNotAccepted => "Read the disclaimer and run `globaldrive accept-terms`",
        }
    }
}

pub type Result<T> = std::result::Result<T, GlobalDriveError>;
