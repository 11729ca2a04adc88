//! Unified error types for the EIP-191 textual adapter
//!
//! Signing-path errors live in `signing::SignModeError`. This module holds the
//! boundary error used by the FFI layer and the CLI, with a stable code that
//! callers can match on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::signing::SignModeError;

/// Boundary error for FFI and CLI callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Eip191Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl Eip191Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for Eip191Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for Eip191Error {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidInput,
    InvalidConfig,

    // Sign mode errors
    UnsupportedSignMode,
    DecodeError,
    UpstreamError,
    MissingSignDoc,

    // Parse errors
    ParseError,
    JsonError,
    HexError,

    // Internal
    Internal,
}

/// Result type alias for boundary operations
pub type Eip191Result<T> = Result<T, Eip191Error>;

// Conversions from common error types

impl From<SignModeError> for Eip191Error {
    fn from(e: SignModeError) -> Self {
        let code = match &e {
            SignModeError::UnsupportedMode(_) => ErrorCode::UnsupportedSignMode,
            SignModeError::Decode(_) => ErrorCode::DecodeError,
            SignModeError::Upstream(_) => ErrorCode::UpstreamError,
            SignModeError::MissingSignDoc => ErrorCode::MissingSignDoc,
            SignModeError::Encode(_) => ErrorCode::Internal,
            SignModeError::DuplicateHandler(_) | SignModeError::InvalidLimits(_) => {
                ErrorCode::InvalidConfig
            }
        };
        Eip191Error::new(code, e.to_string())
    }
}

impl From<serde_json::Error> for Eip191Error {
    fn from(e: serde_json::Error) -> Self {
        Eip191Error::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<hex::FromHexError> for Eip191Error {
    fn from(e: hex::FromHexError) -> Self {
        Eip191Error::new(ErrorCode::HexError, e.to_string())
    }
}

impl From<std::io::Error> for Eip191Error {
    fn from(e: std::io::Error) -> Self {
        Eip191Error::new(ErrorCode::Internal, e.to_string())
    }
}
