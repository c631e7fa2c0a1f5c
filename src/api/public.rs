//! Public, unauthenticated endpoints: the global-link lookup and the rendered
//! HTML fragments the site pages inject into their named containers.
//!
//! Fragment endpoints never fail outward: store errors degrade to an inline
//! "could not load" notice so every container always receives markup.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::models::{GlobalSettings, Post};
use crate::render;
use crate::text;
use crate::AppState;

/// The home carousel shows at most this many posts.
const CAROUSEL_POSTS: usize = 4;

/// GET /public/global-link - The global contact link for dynamic-link
/// targets. Missing or empty settings log a diagnostic and return null; the
/// pages render without the link wired.
pub async fn global_link(State(state): State<AppState>) -> ApiResult<GlobalSettings> {
    let settings = state.repo.get_settings().await?;
    let contact_link = settings.contact_link.filter(|link| !link.is_empty());

    if contact_link.is_none() {
        tracing::error!(
            "Global contact link is not set. Go to the admin panel and set a URL."
        );
    }

    success(GlobalSettings { contact_link })
}

/// GET /public/fragments/merchants - The merchant directory fragment.
///
/// Merchants come back server-ordered by name; enabled-only filtering happens
/// here, so disabled merchants never reach the public markup.
pub async fn merchants_fragment(State(state): State<AppState>) -> Html<String> {
    match state.repo.list_merchants().await {
        Ok(merchants) => {
            let enabled: Vec<_> = merchants.into_iter().filter(|m| m.is_enabled).collect();
            Html(render::merchant_list(&enabled))
        }
        Err(err) => {
            tracing::error!("Error fetching merchants: {}", err);
            Html(render::MERCHANTS_LOAD_ERROR.to_string())
        }
    }
}

/// GET /public/fragments/blog - The blog list fragment, newest first.
pub async fn blog_fragment(State(state): State<AppState>) -> Html<String> {
    match state.repo.list_published_posts().await {
        Ok(mut posts) => {
            sort_newest_first(&mut posts);
            Html(render::blog_list(&posts))
        }
        Err(err) => {
            tracing::error!("Error fetching blog posts: {}", err);
            Html(render::POSTS_LOAD_ERROR.to_string())
        }
    }
}

/// GET /public/fragments/home-carousel - The homepage carousel fragment:
/// the four most recent published posts.
pub async fn home_carousel_fragment(State(state): State<AppState>) -> Html<String> {
    match state.repo.list_published_posts().await {
        Ok(mut posts) => {
            sort_newest_first(&mut posts);
            posts.truncate(CAROUSEL_POSTS);
            Html(render::home_carousel(&posts))
        }
        Err(err) => {
            tracing::error!("Error fetching home carousel posts: {}", err);
            Html(render::CAROUSEL_LOAD_ERROR.to_string())
        }
    }
}

/// Query parameters for the single-post fragment.
#[derive(Debug, Deserialize)]
pub struct PostFragmentQuery {
    pub slug: Option<String>,
}

/// GET /public/fragments/post?slug=... - The single-post article fragment.
///
/// Only published posts are served; a draft's slug renders the not-found
/// notice. On success the `x-page-title` header carries the document title
/// for the page to apply.
pub async fn post_fragment(
    State(state): State<AppState>,
    Query(query): Query<PostFragmentQuery>,
) -> Response {
    let Some(slug) = query.slug.filter(|s| !s.is_empty()) else {
        return Html(render::POST_MISSING_SLUG.to_string()).into_response();
    };

    match state.repo.find_published_by_slug(&slug).await {
        Ok(Some(post)) => {
            let mut headers = HeaderMap::new();
            let title = format!("{} - {}", post.title, state.config.site_name);
            if let Ok(value) = HeaderValue::from_str(&title) {
                headers.insert("x-page-title", value);
            }
            (headers, Html(render::single_post(&post))).into_response()
        }
        Ok(None) => Html(render::POST_NOT_FOUND.to_string()).into_response(),
        Err(err) => {
            tracing::error!("Error fetching single post: {}", err);
            Html(render::POST_LOAD_ERROR.to_string()).into_response()
        }
    }
}

/// Sort posts by creation date descending, in application code, whatever
/// order the store returned them in. Unparseable timestamps sort oldest.
fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        text::timestamp_or_epoch(&b.created_at).cmp(&text::timestamp_or_epoch(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostStatus;

    fn post(id: &str, created_at: &str) -> Post {
        Post {
            id: id.to_string(),
            title: id.to_string(),
            slug: id.to_string(),
            content: "<p>x</p>".to_string(),
            author: String::new(),
            image_url: String::new(),
            status: PostStatus::Published,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_sort_newest_first_regardless_of_fetch_order() {
        let mut posts = vec![
            post("middle", "2026-02-01T00:00:00+00:00"),
            post("newest", "2026-03-01T00:00:00+00:00"),
            post("oldest", "2026-01-01T00:00:00+00:00"),
        ];
        sort_newest_first(&mut posts);
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_sort_unparseable_timestamps_sink() {
        let mut posts = vec![
            post("broken", "not-a-date"),
            post("ok", "2026-01-01T00:00:00+00:00"),
        ];
        sort_newest_first(&mut posts);
        assert_eq!(posts[0].id, "ok");
        assert_eq!(posts[1].id, "broken");
    }
}
