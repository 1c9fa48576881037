//! # Awesome Core
//!
//! Core types, errors, and utilities shared by every awesome crate.
//!
//! - [`errors`]: The client-facing [`ApiError`] taxonomy and its HTTP translation
//! - [`clock`]: Wall-clock abstraction used for token expiry and timestamps
//! - [`pagination`]: Page-number parsing and pagination metadata
//!
//! # Example
//!
//! ```ignore
//! use awesome_core::errors::ApiError;
//! use awesome_core::pagination::page_index;
//!
//! // Reject an empty form field
//! let error = ApiError::invalid_value("email", "Invalid email.");
//! assert_eq!(error.error_code(), "value:invalid");
//!
//! // Parse a page number from a query string
//! assert_eq!(page_index(Some("abc")), 1);
//! ```

pub mod clock;
pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{ApiError, ApiResult, ErrorBody};
pub use pagination::{PageQuery, PaginationMeta, page_index};
