//! Codec configuration.
//!
//! Loaded once from environment variables at startup and never reloaded.

use crate::error::TokenError;
use crate::jwt::DEFAULT_EXPIRY;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;

/// Token codec configuration.
///
/// The secret is used as raw UTF-8 bytes for the HMAC key; no base64
/// decoding is applied.
#[derive(Debug)]
pub struct CodecConfig {
    /// Symmetric signing secret (redacted in `Debug`)
    pub secret: SecretString,
    /// Lifetime of every signed token
    pub expiry: Duration,
}

impl CodecConfig {
    /// Create a configuration from explicit values.
    pub fn new(secret: impl Into<String>, expiry: Duration) -> Self {
        Self {
            secret: SecretString::from(secret.into()),
            expiry,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `JWT_SECRET` (required) and `JWT_EXPIRY_SECONDS` (default 900).
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is missing or empty, or the expiry is
    /// not a whole number of seconds.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();

        let secret = env::var("JWT_SECRET")
            .map_err(|_| TokenError::config("JWT_SECRET is required"))?;
        if secret.is_empty() {
            return Err(TokenError::config("JWT_SECRET must not be empty"));
        }

        let expiry = Duration::from_secs(parse_env("JWT_EXPIRY_SECONDS", DEFAULT_EXPIRY.as_secs())?);

        Ok(Self::new(secret, expiry))
    }

    /// Secret bytes used as the HMAC key.
    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// Parse environment variable with default value.
pub(crate) fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, TokenError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

/// Serializes tests that mutate process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for (name, value) in vars {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
        let result = f();
        for (name, _) in vars {
            env::remove_var(name);
        }
        result
    }

    #[test]
    fn test_from_env_requires_secret() {
        let result = with_env(
            &[("JWT_SECRET", None), ("JWT_EXPIRY_SECONDS", None)],
            CodecConfig::from_env,
        );
        assert!(matches!(result, Err(TokenError::Config(_))));
    }

    #[test]
    fn test_from_env_rejects_empty_secret() {
        let result = with_env(
            &[("JWT_SECRET", Some("")), ("JWT_EXPIRY_SECONDS", None)],
            CodecConfig::from_env,
        );
        assert!(matches!(result, Err(TokenError::Config(_))));
    }

    #[test]
    fn test_from_env_rejects_non_numeric_expiry() {
        let result = with_env(
            &[("JWT_SECRET", Some("s3cr3t")), ("JWT_EXPIRY_SECONDS", Some("15m"))],
            CodecConfig::from_env,
        );
        assert!(matches!(result, Err(TokenError::Config(_))));
    }

    #[test]
    fn test_from_env_default_expiry() {
        let config = with_env(
            &[("JWT_SECRET", Some("s3cr3t")), ("JWT_EXPIRY_SECONDS", None)],
            CodecConfig::from_env,
        )
        .unwrap();

        assert_eq!(config.expiry, Duration::from_secs(900));
        assert_eq!(config.secret_bytes(), b"s3cr3t");
    }

    #[test]
    fn test_from_env_explicit_expiry() {
        let config = with_env(
            &[("JWT_SECRET", Some("s3cr3t")), ("JWT_EXPIRY_SECONDS", Some("60"))],
            CodecConfig::from_env,
        )
        .unwrap();

        assert_eq!(config.expiry, Duration::from_secs(60));
    }

    #[test]
    fn test_new_config() {
        let config = CodecConfig::new("s3cr3t", Duration::from_secs(60));

        assert_eq!(config.secret_bytes(), b"s3cr3t");
        assert_eq!(config.expiry, Duration::from_secs(60));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = CodecConfig::new("do-not-print-me", DEFAULT_EXPIRY);
        let debug = format!("{config:?}");

        assert!(!debug.contains("do-not-print-me"));
    }

    #[test]
    fn test_parse_env_default_and_invalid() {
        assert_eq!(parse_env("TOKEN_CODEC_TEST_UNSET_VAR", 900u64).unwrap(), 900);

        env::set_var("TOKEN_CODEC_TEST_BAD_EXPIRY", "fifteen");
        let result = parse_env("TOKEN_CODEC_TEST_BAD_EXPIRY", 900u64);
        env::remove_var("TOKEN_CODEC_TEST_BAD_EXPIRY");

        assert!(matches!(result, Err(TokenError::Config(_))));
    }
}
