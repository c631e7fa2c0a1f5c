//! Blog post model matching the site frontend contract.

use serde::{Deserialize, Serialize};

use crate::text;

/// Publication status of a post. Only published posts are served publicly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(PostStatus::Draft),
            "published" => Some(PostStatus::Published),
            _ => None,
        }
    }
}

/// A blog post. `content` is rich HTML produced by the admin editor and is
/// trusted as-is; `created_at` is assigned once at creation and never changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub image_url: String,
    pub status: PostStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating or overwriting a post.
///
/// A blank slug is replaced by a derivation from the title at submit time; a
/// non-empty slug is taken verbatim. Timestamps are server-assigned and never
/// part of the request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub image_url: String,
    pub status: PostStatus,
}

/// Row shape for the admin post list: no content payload, plus a display date
/// that falls back to "N/A" when the timestamp is missing or unparseable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub created_at: String,
    pub created_at_display: String,
    pub status: PostStatus,
}

impl PostSummary {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            created_at: post.created_at.clone(),
            created_at_display: text::format_date_numeric(&post.created_at)
                .unwrap_or_else(|| "N/A".to_string()),
            status: post.status,
        }
    }
}
