use awesome_core::{ApiError, Clock, PaginationMeta, pagination::DEFAULT_PAGE_SIZE};
use awesome_models::{Blog, BlogDetail, BlogPage, CreateBlogRequest, User, ids::next_id_at};
use tracing::{info, instrument};

use crate::metrics::track_blog_created;
use crate::state::AppState;
use crate::validator::require_non_blank;

pub struct BlogService;

impl BlogService {
    #[instrument(skip(state))]
    pub async fn list_blogs(state: &AppState, page: i64) -> Result<BlogPage, ApiError> {
        let total = state.blogs.count_blogs().await?;
        let meta = PaginationMeta::new(total, page, DEFAULT_PAGE_SIZE);

        let blogs = if meta.is_empty() {
            Vec::new()
        } else {
            state.blogs.list_blogs(meta.limit, meta.offset).await?
        };

        Ok(BlogPage { page: meta, blogs })
    }

    #[instrument(skip(state))]
    pub async fn get_blog(state: &AppState, id: &str) -> Result<BlogDetail, ApiError> {
        let blog = state
            .blogs
            .find_blog(id)
            .await?
            .ok_or_else(|| ApiError::not_found("blog", "Blog not found."))?;
        let comments = state.blogs.find_comments(&blog.id).await?;

        Ok(BlogDetail { blog, comments })
    }

    /// `author` must already have passed the admin check.
    #[instrument(skip_all, fields(user_id = %author.id))]
    pub async fn create_blog(
        state: &AppState,
        author: &User,
        dto: CreateBlogRequest,
    ) -> Result<Blog, ApiError> {
        let name = require_non_blank("name", &dto.name, "name cannot be empty.")?;
        let summary = require_non_blank("summary", &dto.summary, "summary cannot be empty.")?;
        let content = require_non_blank("content", &dto.content, "content cannot be empty.")?;

        let blog = Blog {
            id: next_id_at(state.clock.now_millis()),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_image: author.image.clone(),
            name: name.to_string(),
            summary: summary.to_string(),
            content: content.to_string(),
            created_at: state.clock.timestamp(),
        };

        state.blogs.save_blog(&blog).await?;

        track_blog_created();
        info!(blog_id = %blog.id, "Blog created");

        Ok(blog)
    }
}
