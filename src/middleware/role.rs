//! Admin access checks.
//!
//! Handlers that mutate privileged resources call [`require_admin`] before
//! looking at their input:
//!
//! ```rust,ignore
//! pub async fn create_blog(CurrentUser(principal): CurrentUser, ...) -> Result<Json<Blog>, ApiError> {
//!     let admin = require_admin(&principal)?;
//!     // Handler logic
//! }
//! ```

use awesome_core::ApiError;
use awesome_models::User;

use crate::middleware::session::Principal;

/// Fails with `permission:forbidden` unless the principal is an admin user.
pub fn require_admin(principal: &Principal) -> Result<&User, ApiError> {
    match principal {
        Principal::Authenticated(user) if user.admin => Ok(user),
        _ => Err(ApiError::permission_denied("")),
    }
}
