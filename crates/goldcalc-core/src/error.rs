//! Shared error type across goldcalc crates.

use thiserror::Error;

/// Message shown to users when a numeric field cannot be parsed.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter valid numbers.";
/// Message shown to users for every other failure.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Check logs.";

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// A submitted value is not a usable number.
    InvalidInput,
    /// Anything else. Details stay in the logs.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidInput => "INVALID_INPUT",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// Plain-language message safe to show to the user.
    pub fn message(self) -> &'static str {
        match self {
            ClientCode::InvalidInput => INVALID_INPUT_MESSAGE,
            ClientCode::Internal => GENERIC_ERROR_MESSAGE,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GoldCalcError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum GoldCalcError {
    #[error("invalid input: {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("missing config: {0}")]
    MissingConfig(String),
    #[error("config: {0}")]
    Config(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GoldCalcError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GoldCalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            GoldCalcError::InvalidInput { .. } => ClientCode::InvalidInput,
            GoldCalcError::MissingConfig(_)
            | GoldCalcError::Config(_)
            | GoldCalcError::Render(_)
            | GoldCalcError::Internal(_) => ClientCode::Internal,
        }
    }
}
