//! In-memory repositories.
//!
//! Mirrors the PostgreSQL semantics the handlers rely on: inserts reject a
//! duplicate primary key and listings come back newest first.

use anyhow::bail;
use async_trait::async_trait;
use awesome_models::{Blog, Comment, User};
use tokio::sync::RwLock;

use crate::repository::{BlogRepository, DuplicateEmail, UserRepository};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    blogs: RwLock<Vec<Blog>>,
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user.
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// Snapshot of every stored blog.
    pub async fn blogs(&self) -> Vec<Blog> {
        self.blogs.read().await.clone()
    }

    /// Replaces a stored user wholesale, e.g. to simulate a password change.
    pub async fn replace_user(&self, user: User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => bail!("no user with id {}", user.id),
        }
    }

    pub async fn insert_comment(&self, comment: Comment) -> anyhow::Result<()> {
        let mut comments = self.comments.write().await;
        if comments.iter().any(|c| c.id == comment.id) {
            bail!("duplicate comment id {}", comment.id);
        }
        comments.push(comment);
        Ok(())
    }
}

fn newest_first(a: f64, b: f64) -> std::cmp::Ordering {
    b.total_cmp(&a)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Vec<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|u| u.email == email)
            .cloned()
            .collect())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id == user.id) {
            bail!("duplicate user id {}", user.id);
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(DuplicateEmail(user.email.clone()).into());
        }
        users.push(user.clone());
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryStore {
    async fn find_blog(&self, id: &str) -> anyhow::Result<Option<Blog>> {
        Ok(self.blogs.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn count_blogs(&self) -> anyhow::Result<i64> {
        Ok(self.blogs.read().await.len() as i64)
    }

    async fn list_blogs(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Blog>> {
        let mut blogs = self.blogs.read().await.clone();
        blogs.sort_by(|a, b| newest_first(a.created_at, b.created_at));
        Ok(blogs
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn save_blog(&self, blog: &Blog) -> anyhow::Result<()> {
        let mut blogs = self.blogs.write().await;
        if blogs.iter().any(|b| b.id == blog.id) {
            bail!("duplicate blog id {}", blog.id);
        }
        blogs.push(blog.clone());
        Ok(())
    }

    async fn find_comments(&self, blog_id: &str) -> anyhow::Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .iter()
            .filter(|c| c.blog_id == blog_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| newest_first(a.created_at, b.created_at));
        Ok(comments)
    }
}
