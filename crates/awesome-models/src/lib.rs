//! # Awesome Models
//!
//! Records persisted by the store and the request/response DTOs the JSON API
//! exchanges.
//!
//! - [`ids`]: Time-ordered record identifiers
//! - [`users`]: Users, login and registration payloads
//! - [`blogs`]: Blogs, comments and blog payloads

pub mod blogs;
pub mod ids;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use blogs::{Blog, BlogDetail, BlogPage, Comment, CreateBlogRequest};
pub use ids::next_id;
pub use users::{AuthenticateRequest, REDACTED_PASSWD, RegisterUserRequest, User};
