//! API error taxonomy.
//!
//! Every failure a handler reports to a client is an [`ApiError`]. The error
//! carries a machine-readable code, the name of the offending field or
//! resource, and an optional human message. [`ApiError`] implements
//! [`IntoResponse`], which makes it the single place where failures become
//! HTTP status codes and JSON bodies:
//!
//! ```json
//! { "error": "value:invalid", "data": "email", "message": "Invalid email." }
//! ```
//!
//! | Kind | `error` | `data` | Status |
//! |------|---------|--------|--------|
//! | [`ApiError::Api`] | caller supplied | caller supplied | 400 |
//! | [`ApiError::InvalidValue`] | `value:invalid` | input field | 400 |
//! | [`ApiError::NotFound`] | `value:notfound` | resource name | 404 |
//! | [`ApiError::PermissionDenied`] | `permission:forbidden` | `permission` | 403 |
//! | [`ApiError::Internal`] | `internal:error` | empty | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

pub const VALUE_INVALID: &str = "value:invalid";
pub const VALUE_NOT_FOUND: &str = "value:notfound";
pub const PERMISSION_FORBIDDEN: &str = "permission:forbidden";
pub const PERMISSION_FIELD: &str = "permission";
pub const INTERNAL_ERROR: &str = "internal:error";

const INTERNAL_MESSAGE: &str = "Internal server error.";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Application-specific failure with a caller-chosen code.
    #[error("{error} ({data}): {message}")]
    Api {
        error: String,
        data: String,
        message: String,
    },

    /// An input value failed validation. `field` names the form field.
    #[error("invalid value for `{field}`: {message}")]
    InvalidValue { field: String, message: String },

    /// A lookup by id or key found nothing. `field` names the resource.
    #[error("`{field}` not found: {message}")]
    NotFound { field: String, message: String },

    /// The current identity may not perform the operation.
    #[error("permission denied: {message}")]
    PermissionDenied { message: String },

    /// Persistence or infrastructure failure. Never serialized to clients.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn new(
        error: impl Into<String>,
        data: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Api {
            error: error.into(),
            data: data.into(),
            message: message.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    /// Machine-readable code clients branch on.
    pub fn error_code(&self) -> &str {
        match self {
            Self::Api { error, .. } => error,
            Self::InvalidValue { .. } => VALUE_INVALID,
            Self::NotFound { .. } => VALUE_NOT_FOUND,
            Self::PermissionDenied { .. } => PERMISSION_FORBIDDEN,
            Self::Internal(_) => INTERNAL_ERROR,
        }
    }

    /// Offending field or resource name.
    pub fn field(&self) -> &str {
        match self {
            Self::Api { data, .. } => data,
            Self::InvalidValue { field, .. } | Self::NotFound { field, .. } => field,
            Self::PermissionDenied { .. } => PERMISSION_FIELD,
            Self::Internal(_) => "",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Api { message, .. }
            | Self::InvalidValue { message, .. }
            | Self::NotFound { message, .. }
            | Self::PermissionDenied { message } => message,
            Self::Internal(_) => INTERNAL_MESSAGE,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Api { .. } | Self::InvalidValue { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::PermissionDenied { .. } => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.error_code().to_string(),
            data: self.field().to_string(),
            message: self.message().to_string(),
        }
    }
}

/// JSON error body returned for every failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code, e.g. `value:invalid`
    pub error: String,
    /// Offending field or resource name
    pub data: String,
    /// Human readable message (may be empty)
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(ref err) = self {
            tracing::error!(error = ?err, "Internal error while handling request");
        }

        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_code_and_field() {
        let err = ApiError::invalid_value("email", "Invalid email.");
        assert_eq!(err.error_code(), "value:invalid");
        assert_eq!(err.field(), "email");
        assert_eq!(err.message(), "Invalid email.");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_code_and_field() {
        let err = ApiError::not_found("blog", "Blog not found.");
        assert_eq!(err.error_code(), "value:notfound");
        assert_eq!(err.field(), "blog");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_permission_denied_fixed_field() {
        let err = ApiError::permission_denied("");
        assert_eq!(err.error_code(), "permission:forbidden");
        assert_eq!(err.field(), "permission");
        assert_eq!(err.message(), "");
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_generic_api_error_keeps_caller_values() {
        let err = ApiError::new("register:failed", "email", "Email is already in use.");
        assert_eq!(err.error_code(), "register:failed");
        assert_eq!(err.field(), "email");
        assert_eq!(err.message(), "Email is already in use.");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_hides_cause() {
        let err = ApiError::internal(anyhow::anyhow!("connection refused on 10.0.0.3"));
        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(body["error"], "internal:error");
        assert_eq!(body["data"], "");
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.3"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_anyhow_converts_with_question_mark() {
        fn fails() -> ApiResult<()> {
            let lookup: anyhow::Result<()> = Err(anyhow::anyhow!("boom"));
            lookup?;
            Ok(())
        }
        assert!(matches!(fails(), Err(ApiError::Internal(_))));
    }

    #[test]
    fn test_body_shape() {
        let body = serde_json::to_value(ApiError::invalid_value("passwd", "Invalid password.").body())
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "error": "value:invalid",
                "data": "passwd",
                "message": "Invalid password."
            })
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::permission_denied("").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
