//! Blog and comment records.

use awesome_core::PaginationMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A published blog post, denormalised with its author's name and avatar.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Blog {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_image: String,
    pub name: String,
    pub summary: String,
    pub content: String,
    pub created_at: f64,
}

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Comment {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_image: String,
    pub content: String,
    pub created_at: f64,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(default)]
pub struct CreateBlogRequest {
    pub name: String,
    pub summary: String,
    pub content: String,
}

/// A blog with its comments, newest comment first.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct BlogDetail {
    pub blog: Blog,
    pub comments: Vec<Comment>,
}

/// One page of blogs, newest first.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct BlogPage {
    pub page: PaginationMeta,
    pub blogs: Vec<Blog>,
}
