//! Repository for the `profiles` table.

use sqlx::PgPool;

use acadex_core::types::DbId;

use crate::models::profile::{Profile, ProfileWithClass, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, full_name, roll_no, class_id, profile_image, created_at";

/// Joined column list for profile + class title queries.
const JOINED_COLUMNS: &str = "p.id, p.user_id, p.full_name, p.roll_no, p.class_id, \
                               p.profile_image, c.title AS class_title, p.created_at";

/// Provides CRUD operations for student profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert an empty profile for a newly registered user.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        full_name: Option<&str>,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id, full_name) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(full_name)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by the owning user's ID.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile with its class title by the owning user's ID.
    pub async fn find_with_class(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<ProfileWithClass>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM profiles p \
             LEFT JOIN classes c ON c.id = p.class_id \
             WHERE p.user_id = $1"
        );
        sqlx::query_as::<_, ProfileWithClass>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List every student profile with its class title, newest first.
    pub async fn list_with_class(pool: &PgPool) -> Result<Vec<ProfileWithClass>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM profiles p \
             LEFT JOIN classes c ON c.id = p.class_id \
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, ProfileWithClass>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the profiles assigned to a class, ordered by display name.
    pub async fn list_by_class(pool: &PgPool, class_id: DbId) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles \
             WHERE class_id = $1 \
             ORDER BY full_name ASC"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(class_id)
            .fetch_all(pool)
            .await
    }

    /// Update a profile by user ID. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET \
                full_name = COALESCE($2, full_name), \
                roll_no = COALESCE($3, roll_no), \
                class_id = COALESCE($4, class_id), \
                profile_image = COALESCE($5, profile_image) \
             WHERE user_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.full_name)
            .bind(&input.roll_no)
            .bind(input.class_id)
            .bind(&input.profile_image)
            .fetch_optional(pool)
            .await
    }
}
