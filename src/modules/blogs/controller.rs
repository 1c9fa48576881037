use awesome_core::{ApiError, ErrorBody, PageQuery};
use awesome_models::{Blog, BlogDetail, BlogPage, CreateBlogRequest};
use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;

use super::service::BlogService;
use crate::middleware::role::require_admin;
use crate::middleware::session::CurrentUser;
use crate::state::AppState;
use crate::validator::Payload;

/// List blogs, newest first, ten per page
#[utoipa::path(
    get,
    path = "/api/blogs",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of blogs", body = BlogPage),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Blogs"
)]
#[instrument(skip_all, fields(page = ?query.page))]
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<BlogPage>, ApiError> {
    let page = BlogService::list_blogs(&state, query.index()).await?;
    Ok(Json(page))
}

/// Get a blog with its comments
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(
        ("id" = String, Path, description = "Blog id")
    ),
    responses(
        (status = 200, description = "Blog and comments", body = BlogDetail),
        (status = 404, description = "Blog not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Blogs"
)]
#[instrument(skip_all, fields(blog_id = %id))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogDetail>, ApiError> {
    let detail = BlogService::get_blog(&state, &id).await?;
    Ok(Json(detail))
}

/// Publish a blog (admin only)
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 200, description = "Blog created", body = Blog),
        (status = 400, description = "Blank name, summary or content", body = ErrorBody),
        (status = 403, description = "Not signed in as an admin", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    security(("session_cookie" = [])),
    tag = "Blogs"
)]
#[instrument(skip_all)]
pub async fn create_blog(
    State(state): State<AppState>,
    CurrentUser(principal): CurrentUser,
    payload: Result<Payload<CreateBlogRequest>, ApiError>,
) -> Result<Json<Blog>, ApiError> {
    let admin = require_admin(&principal)?;
    let Payload(dto) = payload?;
    let blog = BlogService::create_blog(&state, admin, dto).await?;
    Ok(Json(blog))
}
