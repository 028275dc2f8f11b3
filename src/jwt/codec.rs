//! HS256 token codec.
//!
//! Signs a [`Claim`] with an issued-at and expiry, and verifies tokens back
//! into a [`Claim`]. Every verification failure is reported as the same
//! [`AuthFailure`]; the underlying cause only reaches `debug` logs.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use tracing::debug;

use crate::config::CodecConfig;
use crate::error::{AuthFailure, TokenError};
use crate::jwt::claims::{Claim, IssuedClaims};
use crate::jwt::clock::{Clock, SystemClock};

/// Signing algorithm. Pinned; tokens with any other `alg` are rejected.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Token lifetime when none is configured (15 minutes).
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(900);

/// Fields read back from a verified payload. Anything else is discarded.
#[derive(Deserialize)]
struct VerifiedPayload {
    #[serde(flatten)]
    claim: Claim,
    exp: i64,
}

impl VerifiedPayload {
    /// Expired once the clock reaches `exp`; there is no leeway.
    fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Signs and verifies identity tokens with a shared secret.
///
/// Immutable after construction, so a single instance can be shared across
/// threads (e.g. behind an `Arc`) without locking.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry: Duration,
    ttl_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a codec using the wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if `secret` is empty or `expiry` does
    /// not fit in a unix timestamp.
    pub fn new(secret: &[u8], expiry: Duration) -> Result<Self, TokenError> {
        Self::with_clock(secret, expiry, Arc::new(SystemClock))
    }

    /// Create a codec with an explicit time source.
    ///
    /// # Errors
    ///
    /// Same as [`TokenCodec::new`].
    pub fn with_clock(
        secret: &[u8],
        expiry: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::config("signing secret must not be empty"));
        }

        let ttl_seconds = i64::try_from(expiry.as_secs())
            .map_err(|_| TokenError::config(format!("expiry out of range: {expiry:?}")))?;

        // Expiry is checked against our own clock with zero leeway.
        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            expiry,
            ttl_seconds,
            clock,
        })
    }

    /// Create a codec from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`TokenCodec::new`].
    pub fn from_config(config: &CodecConfig) -> Result<Self, TokenError> {
        Self::new(config.secret_bytes(), config.expiry)
    }

    /// Lifetime given to every token signed by this codec.
    #[must_use]
    pub const fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Sign `claim` into a token valid for [`TokenCodec::expiry`] from now.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Encoding`] if the payload cannot be encoded,
    /// which does not happen with HMAC keys.
    pub fn sign(&self, claim: &Claim) -> Result<String, TokenError> {
        let issued = IssuedClaims::new(claim.clone(), self.clock.now(), self.ttl_seconds);
        Ok(encode(&Header::new(ALGORITHM), &issued, &self.encoding_key)?)
    }

    /// Verify `token` and return the `userId`/`email` it carries.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFailure`] for a bad signature, a malformed token, a
    /// different algorithm, a missing or non-string `userId`/`email`, or an
    /// expired token. The failures are indistinguishable to the caller.
    pub fn verify(&self, token: &str) -> Result<Claim, AuthFailure> {
        let data = decode::<VerifiedPayload>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "token rejected");
                AuthFailure
            })?;

        let now = self.clock.now();
        if data.claims.is_expired_at(now) {
            debug!(exp = data.claims.exp, now, "token rejected: expired");
            return Err(AuthFailure);
        }

        Ok(data.claims.claim)
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &ALGORITHM)
            .field("expiry", &self.expiry)
            .finish_non_exhaustive()
    }
}
