//! Session token codec.
//!
//! Wire format (bit-exact): `<user_id>-<expires_at>-<signature_hex>`.
//!
//! [`decode`] only checks the shape of a token. Verifying the signature needs
//! the user's current credential hash, which the caller looks up and passes
//! to [`TokenCodec::verify`].

use std::fmt;

use awesome_config::SessionConfig;

use crate::password::sha1_hex;

pub const SEPARATOR: char = '-';

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("expected 3 `-` separated fields, found {0}")]
    FieldCount(usize),
    #[error("expiry `{0}` is not an integer")]
    InvalidExpiry(String),
}

/// A decoded, not yet verified, session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub user_id: String,
    pub expires_at: i64,
    pub signature: String,
}

impl SessionToken {
    /// Strict expiry: a token is still valid in the second it expires.
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at < now
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.user_id, self.expires_at, self.signature
        )
    }
}

/// Ordered input to the signature: `user_id-credential_hash-expires_at-secret`.
pub fn signing_material(
    user_id: &str,
    credential_hash: &str,
    expires_at: i64,
    secret: &str,
) -> String {
    format!("{user_id}{SEPARATOR}{credential_hash}{SEPARATOR}{expires_at}{SEPARATOR}{secret}")
}

pub fn sign(user_id: &str, credential_hash: &str, expires_at: i64, secret: &str) -> String {
    sha1_hex(&signing_material(user_id, credential_hash, expires_at, secret))
}

pub fn encode(
    user_id: &str,
    credential_hash: &str,
    ttl_seconds: i64,
    secret: &str,
    now: i64,
) -> String {
    let expires_at = now.saturating_add(ttl_seconds);

    SessionToken {
        user_id: user_id.to_string(),
        expires_at,
        signature: sign(user_id, credential_hash, expires_at, secret),
    }
    .to_string()
}

pub fn decode(token: &str) -> Result<SessionToken, TokenError> {
    let parts: Vec<&str> = token.split(SEPARATOR).collect();
    let [user_id, expires_at, signature] = parts.as_slice() else {
        return Err(TokenError::FieldCount(parts.len()));
    };

    let expires_at = expires_at
        .parse::<i64>()
        .map_err(|_| TokenError::InvalidExpiry((*expires_at).to_string()))?;

    Ok(SessionToken {
        user_id: (*user_id).to_string(),
        expires_at,
        signature: (*signature).to_string(),
    })
}

/// Issues and verifies tokens with a fixed secret and lifetime.
#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
    ttl_seconds: i64,
}

impl TokenCodec {
    pub fn new(secret: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.secret.clone(), config.ttl_seconds)
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    pub fn issue(&self, user_id: &str, credential_hash: &str, now: i64) -> String {
        encode(user_id, credential_hash, self.ttl_seconds, &self.secret, now)
    }

    /// Recomputes the signature from the current credential hash and compares.
    pub fn verify(&self, token: &SessionToken, credential_hash: &str) -> bool {
        sign(&token.user_id, credential_hash, token.expires_at, &self.secret) == token.signature
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}
