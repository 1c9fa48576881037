//! # Awesome DB
//!
//! Persistence for users, blogs and comments.
//!
//! Handlers never talk to SQL directly: they go through the
//! [`UserRepository`] and [`BlogRepository`] traits, implemented by
//! [`PgStore`] for PostgreSQL and, with the `memory` feature, by
//! `InMemoryStore` for tests.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use awesome_db::{PgStore, UserRepository, init_db_pool};
//!
//! let pool = init_db_pool(&database_url).await?;
//! let store = Arc::new(PgStore::new(pool));
//! let users = store.find_by_email("a@b.com").await?;
//! ```

#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod postgres;
pub mod repository;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

#[cfg(any(test, feature = "memory"))]
pub use memory::InMemoryStore;
pub use postgres::PgStore;
pub use repository::{BlogRepository, DuplicateEmail, UserRepository};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

const MAX_CONNECTIONS: u32 = 10;

/// Connects a PostgreSQL pool.
///
/// Call once at startup. The pool is cheaply cloneable and is shared by
/// every repository.
pub async fn init_db_pool(database_url: &str) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}
