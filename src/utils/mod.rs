//! Shared helpers for request handlers.
//!
//! - [`cookie`]: Session cookie construction and clearing
//! - [`gravatar`]: Default avatar URLs for new users

pub mod cookie;
pub mod gravatar;
