//! Token codec library.
//!
//! Signs `{userId, email}` identity claims into short-lived HS256 JWTs and
//! verifies them back, collapsing every verification failure into a single
//! [`AuthFailure`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod jwt;
pub mod telemetry;

// Re-exports for convenience
pub use config::CodecConfig;
pub use error::{AuthFailure, TokenError};
pub use jwt::{Claim, TokenCodec};
