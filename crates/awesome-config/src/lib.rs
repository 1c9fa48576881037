//! # Awesome Config
//!
//! Configuration structures loaded once from environment variables at
//! startup and then shared read-only through the application state:
//!
//! - [`session`]: Session cookie secret, lifetime and name
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address
//!
//! # Example
//!
//! ```ignore
//! use awesome_config::{CorsConfig, ServerConfig, SessionConfig};
//!
//! let session_config = SessionConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod server;
pub mod session;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;

/// Reads an integer variable, warning and falling back on garbage.
pub(crate) fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %value, default = %default, "Ignoring unparsable setting");
            default
        }),
        None => default,
    }
}
