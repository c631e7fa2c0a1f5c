//! Post API endpoints (admin).

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Post, PostInput, PostSummary};
use crate::text;
use crate::AppState;

/// GET /api/admin/posts - List all posts, newest first.
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Vec<PostSummary>> {
    let posts = state.repo.list_posts().await?;
    success(posts.iter().map(PostSummary::from_post).collect())
}

/// GET /api/admin/posts/:id - Get a full post (content included) for the
/// edit form.
pub async fn get_post(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Post> {
    let post = state
        .repo
        .get_post(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;
    success(post)
}

/// POST /api/admin/posts - Create a new post.
///
/// Rejects effectively-empty content and duplicate slugs before anything is
/// written; both timestamps are set to the current server time on success.
pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<PostInput>,
) -> ApiResult<Post> {
    validate_post_input(&input)?;
    let slug = resolve_slug(&input);
    let post = state.repo.create_post(&input, &slug).await?;
    success(post)
}

/// PUT /api/admin/posts/:id - Overwrite a post.
///
/// `created_at` is preserved; `updated_at` is refreshed. Slug uniqueness is
/// not re-checked on edit.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PostInput>,
) -> ApiResult<Post> {
    validate_post_input(&input)?;
    let slug = resolve_slug(&input);
    let post = state.repo.update_post(&id, &input, &slug).await?;
    success(post)
}

/// DELETE /api/admin/posts/:id - Permanently delete a post.
pub async fn delete_post(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_post(&id).await?;
    success(())
}

fn validate_post_input(input: &PostInput) -> Result<(), AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::Validation("Post title is required".to_string()));
    }
    if text::is_content_empty(&input.content) {
        return Err(AppError::Validation(
            "Post content cannot be empty.".to_string(),
        ));
    }
    Ok(())
}

/// An explicit non-empty slug is taken verbatim; derivation from the title is
/// only the fallback for a blank field at submit time.
fn resolve_slug(input: &PostInput) -> String {
    let submitted = input.slug.trim();
    if submitted.is_empty() {
        text::derive_slug(&input.title)
    } else {
        submitted.to_string()
    }
}
