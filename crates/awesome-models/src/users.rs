//! User records and the authentication payloads.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Placeholder written over `passwd` before a user leaves the process.
pub const REDACTED_PASSWD: &str = "********";

/// A registered user.
///
/// `passwd` holds the stored credential hash. Any `User` returned by the
/// session middleware or serialized into a response has been passed through
/// [`User::redacted`].
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Credential hash, or `********` once redacted
    pub passwd: String,
    /// Grants blog management
    pub admin: bool,
    pub name: String,
    /// Avatar URL
    pub image: String,
    /// Seconds since the Unix epoch
    pub created_at: f64,
}

impl User {
    pub fn redacted(mut self) -> Self {
        self.passwd = REDACTED_PASSWD.to_string();
        self
    }

    pub fn is_redacted(&self) -> bool {
        self.passwd == REDACTED_PASSWD
    }
}

/// Login form. Missing fields arrive as empty strings so they fail the
/// per-field checks instead of the body decoder.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(default)]
pub struct AuthenticateRequest {
    pub email: String,
    /// `SHA1(email ":" password)` computed by the client
    pub passwd: String,
}

/// Registration form.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(default)]
pub struct RegisterUserRequest {
    pub email: String,
    pub name: String,
    /// `SHA1(email ":" password)` computed by the client, 40 lowercase hex characters
    pub passwd: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "0017000000000001".to_string(),
            email: "a@b.com".to_string(),
            passwd: "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8".to_string(),
            admin: false,
            name: "Ann".to_string(),
            image: "about:blank".to_string(),
            created_at: 1_700_000_000.0,
        }
    }

    #[test]
    fn test_redacted_replaces_hash() {
        let user = sample_user().redacted();
        assert_eq!(user.passwd, "********");
        assert!(user.is_redacted());
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_redacted_serialization_never_leaks_hash() {
        let json = serde_json::to_string(&sample_user().redacted()).unwrap();
        assert!(!json.contains("5baa61e4"));
        assert!(json.contains(r#""passwd":"********""#));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: RegisterUserRequest = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert_eq!(request.email, "a@b.com");
        assert!(request.name.is_empty());
        assert!(request.passwd.is_empty());
    }
}
