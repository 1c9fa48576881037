//! # Awesome Auth
//!
//! Stateless session tokens and credential digests.
//!
//! - [`token`]: Encoding, decoding and signing of the session cookie value
//! - [`password`]: SHA1 digests used to store and check credentials
//!
//! A session token is the string `<user_id>-<expires_at>-<signature>`, where
//! the signature is `hex(SHA1(user_id-credential_hash-expires_at-secret))`.
//! Nothing is stored server side: a token is verified by recomputing the
//! signature from the user's current credential hash, so changing the
//! password invalidates every outstanding token.
//!
//! # Example
//!
//! ```ignore
//! use awesome_auth::{TokenCodec, decode};
//! use awesome_config::SessionConfig;
//!
//! let codec = TokenCodec::from_config(&SessionConfig::from_env());
//! let cookie = codec.issue(&user.id, &user.passwd, now);
//!
//! let token = decode(&cookie)?;
//! assert!(codec.verify(&token, &user.passwd));
//! ```

pub mod password;
pub mod token;

// Re-export commonly used types at crate root
pub use password::{client_digest, credential_hash, is_sha1_hex, sha1_hex, verify_credential};
pub use token::{SessionToken, TokenCodec, TokenError, decode, encode, sign, signing_material};
