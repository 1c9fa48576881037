use std::sync::LazyLock;

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use awesome_core::ApiError;
use regex::Regex;
use serde::de::DeserializeOwned;

pub const REQUEST_INVALID: &str = "request:invalid";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9.\-_]+@[a-z0-9\-_]+(\.[a-z0-9\-_]+){1,4}$")
        .unwrap_or_else(|err| panic!("email pattern does not compile: {err}"))
});

fn invalid_body(message: impl Into<String>) -> ApiError {
    ApiError::new(REQUEST_INVALID, "body", message)
}

/// Request body accepted as either JSON or a urlencoded form.
///
/// Field-level rules are left to the handlers, so DTOs default missing
/// fields to empty strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase);

        let Some(content_type) = content_type else {
            return Err(invalid_body("Missing Content-Type."));
        };

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| invalid_body(rejection.body_text()))?;
            return Ok(Payload(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| invalid_body(rejection.body_text()))?;
            return Ok(Payload(value));
        }

        Err(invalid_body(format!("Unsupported Content-Type: {content_type}")))
    }
}

/// Returns the trimmed value, or Invalid-value for `field` when it is blank.
pub fn require_non_blank<'a>(
    field: &str,
    value: &'a str,
    message: &str,
) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid_value(field, message));
    }
    Ok(trimmed)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("ann@example.com"));
        assert!(is_valid_email("a.b-c_d@mail.example.co.uk"));
        assert!(!is_valid_email("Ann@example.com"));
        assert!(!is_valid_email("ann@localhost"));
        assert!(!is_valid_email("ann example.com"));
        assert!(!is_valid_email("a@b.c.d.e.f.g"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_require_non_blank_trims() {
        assert_eq!(require_non_blank("name", "  Ann ", "").unwrap(), "Ann");
    }

    #[test]
    fn test_require_non_blank_rejects_whitespace() {
        let err = require_non_blank("summary", " \t\n", "summary cannot be empty.").unwrap_err();
        assert_eq!(err.error_code(), "value:invalid");
        assert_eq!(err.field(), "summary");
        assert_eq!(err.message(), "summary cannot be empty.");
    }
}
