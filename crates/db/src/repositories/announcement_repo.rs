//! Repository for the `announcements` table.

use sqlx::PgPool;

use acadex_core::types::DbId;

use crate::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};

/// Joined column list: announcements always carry their class title.
const COLUMNS: &str = "a.id, a.class_id, a.title, a.content, a.link, a.created_by, \
                        c.title AS class_title, a.created_at, a.updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Insert a new announcement, returning the created row.
    pub async fn create(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "WITH inserted AS ( \
                INSERT INTO announcements (class_id, title, content, link, created_by) \
                VALUES ($1, $2, $3, $4, $5) \
                RETURNING * \
             ) \
             SELECT {COLUMNS} FROM inserted a \
             JOIN classes c ON c.id = a.class_id"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(input.class_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.link)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List all announcements, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM announcements a \
             JOIN classes c ON c.id = a.class_id \
             ORDER BY a.created_at DESC"
        );
        sqlx::query_as::<_, Announcement>(&query).fetch_all(pool).await
    }

    /// List a class's announcements, newest first.
    pub async fn list_by_class(
        pool: &PgPool,
        class_id: DbId,
    ) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM announcements a \
             JOIN classes c ON c.id = a.class_id \
             WHERE a.class_id = $1 \
             ORDER BY a.created_at DESC"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// Update an announcement. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAnnouncement,
    ) -> Result<Option<Announcement>, sqlx::Error> {
        let query = format!(
            "WITH updated AS ( \
                UPDATE announcements SET \
                    title = COALESCE($2, title), \
                    content = COALESCE($3, content), \
                    link = COALESCE($4, link), \
                    updated_at = NOW() \
                WHERE id = $1 \
                RETURNING * \
             ) \
             SELECT {COLUMNS} FROM updated a \
             JOIN classes c ON c.id = a.class_id"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.link)
            .fetch_optional(pool)
            .await
    }

    /// Delete an announcement. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
