//! Repository for the `exams` table.

use sqlx::PgPool;

use acadex_core::types::DbId;

use crate::models::exam::{CreateExam, Exam};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, class_id, name, date, created_by, created_at";

/// Provides CRUD operations for exams.
pub struct ExamRepo;

impl ExamRepo {
    /// Insert a new exam under a class, returning the created row.
    pub async fn create(
        pool: &PgPool,
        class_id: DbId,
        created_by: DbId,
        input: &CreateExam,
    ) -> Result<Exam, sqlx::Error> {
        let query = format!(
            "INSERT INTO exams (class_id, name, date, created_by) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exam>(&query)
            .bind(class_id)
            .bind(&input.name)
            .bind(input.date)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find an exam by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exam>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exams WHERE id = $1");
        sqlx::query_as::<_, Exam>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a class's exams, most recent date first.
    pub async fn list_by_class(pool: &PgPool, class_id: DbId) -> Result<Vec<Exam>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exams \
             WHERE class_id = $1 \
             ORDER BY date DESC"
        );
        sqlx::query_as::<_, Exam>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// The exam with the most recent date for a class, if any.
    pub async fn latest_for_class(
        pool: &PgPool,
        class_id: DbId,
    ) -> Result<Option<Exam>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exams \
             WHERE class_id = $1 \
             ORDER BY date DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, Exam>(&query)
            .bind(class_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an exam (and, via FK cascade, its marks).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
