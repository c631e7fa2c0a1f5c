//! Database repository for CRUD operations.
//!
//! Uses prepared statements, and a transaction where the slug-uniqueness
//! check must be atomic with the insert.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{GlobalSettings, Merchant, MerchantInput, Post, PostInput, PostStatus};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== MERCHANT OPERATIONS ====================

    /// List all merchants ordered by name. Disabled merchants are included;
    /// public visibility filtering happens at the rendering layer.
    pub async fn list_merchants(&self) -> Result<Vec<Merchant>, AppError> {
        let rows =
            sqlx::query("SELECT id, name, contact_link, is_enabled FROM merchants ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.iter().map(merchant_from_row).collect())
    }

    /// Get a merchant by ID.
    pub async fn get_merchant(&self, id: &str) -> Result<Option<Merchant>, AppError> {
        let row = sqlx::query("SELECT id, name, contact_link, is_enabled FROM merchants WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(merchant_from_row))
    }

    /// Create a new merchant.
    pub async fn create_merchant(&self, input: &MerchantInput) -> Result<Merchant, AppError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO merchants (id, name, contact_link, is_enabled) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&input.name)
            .bind(&input.contact_link)
            .bind(input.is_enabled as i32)
            .execute(&self.pool)
            .await?;

        Ok(Merchant {
            id,
            name: input.name.clone(),
            contact_link: input.contact_link.clone(),
            is_enabled: input.is_enabled,
        })
    }

    /// Overwrite a merchant. All fields are always written; last write wins.
    pub async fn update_merchant(
        &self,
        id: &str,
        input: &MerchantInput,
    ) -> Result<Merchant, AppError> {
        let result =
            sqlx::query("UPDATE merchants SET name = ?, contact_link = ?, is_enabled = ? WHERE id = ?")
                .bind(&input.name)
                .bind(&input.contact_link)
                .bind(input.is_enabled as i32)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Merchant {} not found", id)));
        }

        Ok(Merchant {
            id: id.to_string(),
            name: input.name.clone(),
            contact_link: input.contact_link.clone(),
            is_enabled: input.is_enabled,
        })
    }

    /// Delete a merchant. Permanent, no recovery.
    pub async fn delete_merchant(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM merchants WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Merchant {} not found", id)));
        }

        Ok(())
    }

    // ==================== POST OPERATIONS ====================

    /// List all posts, newest first. Used by the admin list view.
    pub async fn list_posts(&self) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, slug, content, author, image_url, status, created_at, updated_at
             FROM posts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(post_from_row).collect())
    }

    /// List published posts in unspecified order; the public renderer sorts
    /// them by creation date itself.
    pub async fn list_published_posts(&self) -> Result<Vec<Post>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, slug, content, author, image_url, status, created_at, updated_at
             FROM posts WHERE status = 'published'",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(post_from_row).collect())
    }

    /// Get a post by ID.
    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, slug, content, author, image_url, status, created_at, updated_at
             FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(post_from_row))
    }

    /// Find the published post with the given slug, if any. Drafts are never
    /// returned here.
    pub async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, slug, content, author, image_url, status, created_at, updated_at
             FROM posts WHERE slug = ? AND status = 'published' LIMIT 1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(post_from_row))
    }

    /// Create a new post. The slug-uniqueness check and the insert run in one
    /// transaction, so concurrent creations with the same slug cannot both
    /// succeed. On rejection nothing is written.
    pub async fn create_post(&self, input: &PostInput, slug: &str) -> Result<Post, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query("SELECT id FROM posts WHERE slug = ? LIMIT 1")
            .bind(slug)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            // Dropping the transaction rolls it back
            return Err(AppError::Validation(
                "This slug already exists. Please choose a unique one.".to_string(),
            ));
        }

        sqlx::query(
            "INSERT INTO posts (id, title, slug, content, author, image_url, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&input.title)
        .bind(slug)
        .bind(&input.content)
        .bind(&input.author)
        .bind(&input.image_url)
        .bind(input.status.as_str())
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Post {
            id,
            title: input.title.clone(),
            slug: slug.to_string(),
            content: input.content.clone(),
            author: input.author.clone(),
            image_url: input.image_url.clone(),
            status: input.status,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Overwrite a post. `created_at` is preserved from the stored row;
    /// `updated_at` is set to the current server time. No slug-uniqueness
    /// re-check happens on update.
    pub async fn update_post(&self, id: &str, input: &PostInput, slug: &str) -> Result<Post, AppError> {
        let existing = self
            .get_post(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE posts SET title = ?, slug = ?, content = ?, author = ?, image_url = ?, status = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&input.title)
        .bind(slug)
        .bind(&input.content)
        .bind(&input.author)
        .bind(&input.image_url)
        .bind(input.status.as_str())
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Post {
            id: id.to_string(),
            title: input.title.clone(),
            slug: slug.to_string(),
            content: input.content.clone(),
            author: input.author.clone(),
            image_url: input.image_url.clone(),
            status: input.status,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a post. Permanent, no recovery.
    pub async fn delete_post(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Post {} not found", id)));
        }

        Ok(())
    }

    // ==================== SETTINGS OPERATIONS ====================

    /// Get the settings singleton. `contact_link` is None until first saved.
    pub async fn get_settings(&self) -> Result<GlobalSettings, AppError> {
        let row = sqlx::query("SELECT contact_link FROM settings WHERE id = 'global'")
            .fetch_optional(&self.pool)
            .await?;

        Ok(GlobalSettings {
            contact_link: row.and_then(|r| r.get("contact_link")),
        })
    }

    /// Overwrite the settings singleton unconditionally (last write wins).
    pub async fn set_settings(&self, contact_link: &str) -> Result<GlobalSettings, AppError> {
        sqlx::query(
            "INSERT INTO settings (id, contact_link) VALUES ('global', ?)
             ON CONFLICT(id) DO UPDATE SET contact_link = excluded.contact_link",
        )
        .bind(contact_link)
        .execute(&self.pool)
        .await?;

        Ok(GlobalSettings {
            contact_link: Some(contact_link.to_string()),
        })
    }
}

// Helper functions for row conversion

fn merchant_from_row(row: &sqlx::sqlite::SqliteRow) -> Merchant {
    let is_enabled: i32 = row.get("is_enabled");
    Merchant {
        id: row.get("id"),
        name: row.get("name"),
        contact_link: row.get("contact_link"),
        is_enabled: is_enabled != 0,
    }
}

fn post_from_row(row: &sqlx::sqlite::SqliteRow) -> Post {
    let status: String = row.get("status");
    Post {
        id: row.get("id"),
        title: row.get("title"),
        slug: row.get("slug"),
        content: row.get("content"),
        author: row.get("author"),
        image_url: row.get("image_url"),
        // Rows with an unknown status are treated as drafts and stay private
        status: PostStatus::from_str(&status).unwrap_or(PostStatus::Draft),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
