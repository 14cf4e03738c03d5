//! Repository for the `files` table.

use sqlx::PgPool;

use acadex_core::types::DbId;

use crate::models::file::{CreateFileLink, FileLink};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, file_url, file_type, parent_type, parent_id, \
                        uploaded_by, created_at";

/// Provides CRUD operations for file links.
pub struct FileRepo;

impl FileRepo {
    /// Insert a new file link, returning the created row.
    pub async fn create(
        pool: &PgPool,
        uploaded_by: DbId,
        input: &CreateFileLink,
    ) -> Result<FileLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO files (title, file_url, file_type, parent_type, parent_id, uploaded_by) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FileLink>(&query)
            .bind(&input.title)
            .bind(&input.file_url)
            .bind(&input.file_type)
            .bind(&input.parent_type)
            .bind(input.parent_id)
            .bind(uploaded_by)
            .fetch_one(pool)
            .await
    }

    /// List the links attached to a parent entity, newest first.
    pub async fn list_for_parent(
        pool: &PgPool,
        parent_type: &str,
        parent_id: DbId,
    ) -> Result<Vec<FileLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM files \
             WHERE parent_type = $1 AND parent_id = $2 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, FileLink>(&query)
            .bind(parent_type)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a file link. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
