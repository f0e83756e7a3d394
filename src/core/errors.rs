//! Shared error types for the application

use thiserror::Error;

/// Main error type for creditx operations
#[derive(Debug, Error)]
pub enum Error {
    /// Loan type tag not in the supported set
    #[error("invalid loan type '{provided}' (supported: personal, business, home, car, education)")]
    InvalidLoanType { provided: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Weight profile validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an invalid loan type error from the offending tag
    pub fn invalid_loan_type(provided: impl Into<String>) -> Self {
        Self::InvalidLoanType {
            provided: provided.into(),
        }
    }

    /// Whether the user can fix this error (bad arguments, bad config)
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::InvalidLoanType { .. } | Self::Configuration(_) | Self::Validation(_)
        )
    }

    /// Suggested process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidLoanType { .. } => 2,
            Self::Configuration(_) => 3,
            Self::Validation(_) => 4,
            Self::Io(_) | Self::Json(_) | Self::Toml(_) => 1,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
