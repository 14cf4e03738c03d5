//! Repository for the `classes` table.

use sqlx::PgPool;

use acadex_core::types::DbId;

use crate::models::class::{Class, CreateClass, UpdateClass};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, academic_year, teacher_id, created_at";

/// Provides CRUD operations for classes.
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClass) -> Result<Class, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (title, academic_year, teacher_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(&input.title)
            .bind(&input.academic_year)
            .bind(input.teacher_id)
            .fetch_one(pool)
            .await
    }

    /// Find a class by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = $1");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all classes, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes ORDER BY created_at DESC");
        sqlx::query_as::<_, Class>(&query).fetch_all(pool).await
    }

    /// Update a class. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClass,
    ) -> Result<Option<Class>, sqlx::Error> {
        let query = format!(
            "UPDATE classes SET \
                title = COALESCE($2, title), \
                academic_year = COALESCE($3, academic_year), \
                teacher_id = COALESCE($4, teacher_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.academic_year)
            .bind(input.teacher_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a class. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
