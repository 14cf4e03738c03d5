//! Repository for the `subjects` and `chapters` tables.

use sqlx::PgPool;

use acadex_core::types::DbId;

use crate::models::subject::{Chapter, CreateChapter, CreateSubject, Subject};

/// Column list for `subjects` queries.
const SUBJECT_COLUMNS: &str = "id, class_id, name, created_at";

/// Column list for `chapters` queries.
const CHAPTER_COLUMNS: &str = "id, subject_id, title, created_at";

/// Provides CRUD operations for subjects and their chapters.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a new subject under a class, returning the created row.
    pub async fn create(
        pool: &PgPool,
        class_id: DbId,
        input: &CreateSubject,
    ) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects (class_id, name) \
             VALUES ($1, $2) \
             RETURNING {SUBJECT_COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(class_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a subject by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {SUBJECT_COLUMNS} FROM subjects WHERE id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the subjects taught in a class, newest first.
    pub async fn list_by_class(pool: &PgPool, class_id: DbId) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!(
            "SELECT {SUBJECT_COLUMNS} FROM subjects \
             WHERE class_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// Count the subjects taught in a class.
    pub async fn count_by_class(pool: &PgPool, class_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM subjects WHERE class_id = $1")
            .bind(class_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a subject (and, via FK cascade, its chapters).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert a new chapter under a subject, returning the created row.
    pub async fn create_chapter(
        pool: &PgPool,
        subject_id: DbId,
        input: &CreateChapter,
    ) -> Result<Chapter, sqlx::Error> {
        let query = format!(
            "INSERT INTO chapters (subject_id, title) \
             VALUES ($1, $2) \
             RETURNING {CHAPTER_COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(subject_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// List a subject's chapters, oldest first.
    pub async fn list_chapters(pool: &PgPool, subject_id: DbId) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {CHAPTER_COLUMNS} FROM chapters \
             WHERE subject_id = $1 \
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(subject_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a chapter. Returns `true` if a row was removed.
    pub async fn delete_chapter(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chapters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
