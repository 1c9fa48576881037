//! Persistence collaborator interfaces.

use async_trait::async_trait;
use awesome_models::{Blog, Comment, User};

/// Error returned by [`UserRepository::save`] when another user already
/// holds the email. Callers find it with `anyhow::Error::is`.
#[derive(Debug, thiserror::Error)]
#[error("email `{0}` is already registered")]
pub struct DuplicateEmail(pub String);

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;

    /// All users with this email. Registration keeps the list to at most one.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Vec<User>>;

    /// Fails with [`DuplicateEmail`] if the email is taken, including when a
    /// concurrent insert wins the race.
    async fn save(&self, user: &User) -> anyhow::Result<()>;
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn find_blog(&self, id: &str) -> anyhow::Result<Option<Blog>>;

    async fn count_blogs(&self) -> anyhow::Result<i64>;

    /// Newest first.
    async fn list_blogs(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Blog>>;

    async fn save_blog(&self, blog: &Blog) -> anyhow::Result<()>;

    /// Comments on a blog, newest first.
    async fn find_comments(&self, blog_id: &str) -> anyhow::Result<Vec<Comment>>;
}
