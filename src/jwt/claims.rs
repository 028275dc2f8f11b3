//! Identity claim and the signed payload that carries it.

use serde::{Deserialize, Serialize};

/// Identity carried inside a token.
///
/// Deserializing into this type drops every key other than `userId` and
/// `email`, so callers never see extra claims a token may carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Opaque user identifier
    pub user_id: String,
    /// User email
    pub email: String,
}

impl Claim {
    /// Build a claim from a user id and email.
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Claim {
            user_id: user_id.into(),
            email: email.into(),
        }
    }
}

/// Payload written by `sign`: the claim plus issued-at and expiry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IssuedClaims {
    /// Identity written as top-level `userId`/`email` keys
    #[serde(flatten)]
    pub claim: Claim,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl IssuedClaims {
    /// Stamp `claim` as issued at `now`, expiring `ttl_seconds` later.
    pub fn new(claim: Claim, now: i64, ttl_seconds: i64) -> Self {
        IssuedClaims {
            claim,
            iat: now,
            exp: now.saturating_add(ttl_seconds),
        }
    }
}
