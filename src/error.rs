//! Error types for token signing and verification.
//!
//! Verification has exactly one failure kind, [`AuthFailure`], which carries
//! no cause. Everything else (configuration, encoding) lives in
//! [`TokenError`].

use thiserror::Error;

/// Code for any rejected token.
pub const AUTH_TOKEN_INVALID: &str = "AUTH_TOKEN_INVALID";
/// Code for misconfiguration.
pub const TOKEN_CONFIG_ERROR: &str = "TOKEN_CONFIG_ERROR";
/// Code for signing failures.
pub const TOKEN_ENCODING_ERROR: &str = "TOKEN_ENCODING_ERROR";

/// Token was rejected: bad signature, malformed, expired, or otherwise invalid.
///
/// The reason is erased on purpose and cannot be recovered from this value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid or expired token")]
pub struct AuthFailure;

impl AuthFailure {
    /// Error code for API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        AUTH_TOKEN_INVALID
    }
}

/// Non-exhaustive error enum for codec construction and signing.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TokenError {
    /// Token verification failed
    #[error(transparent)]
    Auth(#[from] AuthFailure),

    /// Codec or environment misconfiguration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JWT encoding failed
    #[error("JWT encoding error: {0}")]
    Encoding(String),
}

impl TokenError {
    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Auth(_) => AUTH_TOKEN_INVALID,
            Self::Config(_) => TOKEN_CONFIG_ERROR,
            Self::Encoding(_) => TOKEN_ENCODING_ERROR,
        }
    }

    /// Nothing in this crate performs I/O, so no error is worth retrying.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        false
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        TokenError::Encoding(err.to_string())
    }
}
