//! Credential digests.
//!
//! The browser never sends a plain password. It sends
//! `SHA1(email ":" password)`, and the server stores
//! `SHA1(user_id ":" client_digest)`.

use sha1::{Digest, Sha1};

/// Lowercase hex SHA1 of `input`.
pub fn sha1_hex(input: &str) -> String {
    hex::encode(Sha1::digest(input.as_bytes()))
}

/// The digest a browser submits in place of the password.
pub fn client_digest(email: &str, password: &str) -> String {
    sha1_hex(&format!("{email}:{password}"))
}

/// The value persisted in `users.passwd`.
pub fn credential_hash(user_id: &str, client_digest: &str) -> String {
    sha1_hex(&format!("{user_id}:{client_digest}"))
}

pub fn verify_credential(user_id: &str, client_digest: &str, stored_hash: &str) -> bool {
    credential_hash(user_id, client_digest) == stored_hash
}

/// True for exactly 40 lowercase hex characters.
pub fn is_sha1_hex(value: &str) -> bool {
    value.len() == 40 && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
