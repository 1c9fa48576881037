//! Middleware modules for request processing.
//!
//! - [`session`]: Cookie session resolution and the [`CurrentUser`](session::CurrentUser) extractor
//! - [`role`]: Admin permission check
//!
//! # Authentication Flow
//!
//! 1. Client sends the `awesession` cookie issued at login or registration
//! 2. `session_middleware` decodes and verifies it, attaching a `Principal`
//! 3. Handlers read the principal through `CurrentUser`
//! 4. Privileged handlers call `require_admin` before doing any work
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::require_admin;
//! use crate::middleware::session::CurrentUser;
//!
//! async fn create_blog(CurrentUser(principal): CurrentUser) -> Result<impl IntoResponse, ApiError> {
//!     let admin = require_admin(&principal)?;
//!     // Proceed with admin operation
//! }
//! ```

pub mod role;
pub mod session;
