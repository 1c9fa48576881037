//! PostgreSQL repositories backed by `sqlx`.

use anyhow::Context;
use async_trait::async_trait;
use awesome_models::{Blog, Comment, User};
use sqlx::PgPool;
use tracing::instrument;

use crate::repository::{BlogRepository, DuplicateEmail, UserRepository};

/// Unique constraint Postgres names for `users.email`.
const USERS_EMAIL_KEY: &str = "users_email_key";

const USER_COLUMNS: &str = "id, email, passwd, admin, name, image, created_at";
const BLOG_COLUMNS: &str = "id, user_id, user_name, user_image, name, summary, content, created_at";
const COMMENT_COLUMNS: &str = "id, blog_id, user_id, user_name, user_image, content, created_at";

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for PgStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to load user by id")
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Vec<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load users by email")
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO users (id, email, passwd, admin, name, image, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.passwd)
        .bind(user.admin)
        .bind(&user.name)
        .bind(&user.image)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db)
                if db.is_unique_violation() && db.constraint() == Some(USERS_EMAIL_KEY) =>
            {
                anyhow::Error::new(DuplicateEmail(user.email.clone()))
            }
            other => anyhow::Error::new(other).context("Failed to insert user"),
        })?;

        Ok(())
    }
}

#[async_trait]
impl BlogRepository for PgStore {
    #[instrument(skip(self))]
    async fn find_blog(&self, id: &str) -> anyhow::Result<Option<Blog>> {
        sqlx::query_as::<_, Blog>(&format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to load blog")
    }

    #[instrument(skip(self))]
    async fn count_blogs(&self) -> anyhow::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count blogs")
    }

    #[instrument(skip(self))]
    async fn list_blogs(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Blog>> {
        sqlx::query_as::<_, Blog>(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list blogs")
    }

    #[instrument(skip(self, blog), fields(blog_id = %blog.id))]
    async fn save_blog(&self, blog: &Blog) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO blogs (id, user_id, user_name, user_image, name, summary, content, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&blog.id)
        .bind(&blog.user_id)
        .bind(&blog.user_name)
        .bind(&blog.user_image)
        .bind(&blog.name)
        .bind(&blog.summary)
        .bind(&blog.content)
        .bind(blog.created_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert blog")?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_comments(&self, blog_id: &str) -> anyhow::Result<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE blog_id = $1 ORDER BY created_at DESC"
        ))
        .bind(blog_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to load comments")
    }
}
