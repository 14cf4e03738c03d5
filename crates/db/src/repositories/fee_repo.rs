//! Repository for the `fee_structures` and `fee_payments` tables and the
//! `student_fee_summary` view.

use sqlx::PgPool;

use acadex_core::types::DbId;

use crate::models::fee::{
    CreateFeePayment, CreateFeeStructure, FeePayment, FeeStructure, StudentFeeSummary,
};

/// Joined column list for fee structures.
const STRUCTURE_COLUMNS: &str = "f.id, f.class_id, f.academic_year, f.amount, f.description, \
                                  f.created_by, c.title AS class_title, f.created_at, f.updated_at";

/// Joined column list for fee payments.
const PAYMENT_COLUMNS: &str = "f.id, f.student_id, f.class_id, f.academic_year, f.amount, \
                                f.payment_date, f.payment_method, f.transaction_reference, \
                                f.remarks, f.recorded_by, p.full_name AS student_name, \
                                c.title AS class_title, f.created_at";

/// Column list for the `student_fee_summary` view.
const SUMMARY_COLUMNS: &str = "student_id, student_name, class_id, class_name, academic_year, \
                                total_fees, paid_amount, pending_amount";

/// Provides operations for fee structures, payments, and summaries.
pub struct FeeRepo;

impl FeeRepo {
    /// Insert a new fee structure, returning the created row.
    pub async fn create_structure(
        pool: &PgPool,
        created_by: DbId,
        input: &CreateFeeStructure,
    ) -> Result<FeeStructure, sqlx::Error> {
        let query = format!(
            "WITH inserted AS ( \
                INSERT INTO fee_structures (class_id, academic_year, amount, description, created_by) \
                VALUES ($1, $2, $3, $4, $5) \
                RETURNING * \
             ) \
             SELECT {STRUCTURE_COLUMNS} FROM inserted f \
             JOIN classes c ON c.id = f.class_id"
        );
        sqlx::query_as::<_, FeeStructure>(&query)
            .bind(input.class_id)
            .bind(&input.academic_year)
            .bind(input.amount)
            .bind(&input.description)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List all fee structures, most recent academic year first.
    pub async fn list_structures(pool: &PgPool) -> Result<Vec<FeeStructure>, sqlx::Error> {
        let query = format!(
            "SELECT {STRUCTURE_COLUMNS} FROM fee_structures f \
             JOIN classes c ON c.id = f.class_id \
             ORDER BY f.academic_year DESC"
        );
        sqlx::query_as::<_, FeeStructure>(&query).fetch_all(pool).await
    }

    /// Delete a fee structure. Returns `true` if a row was removed.
    pub async fn delete_structure(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fee_structures WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a fee payment, returning the created row.
    pub async fn create_payment(
        pool: &PgPool,
        recorded_by: DbId,
        input: &CreateFeePayment,
    ) -> Result<FeePayment, sqlx::Error> {
        let query = format!(
            "WITH inserted AS ( \
                INSERT INTO fee_payments \
                    (student_id, class_id, academic_year, amount, payment_date, \
                     payment_method, transaction_reference, remarks, recorded_by) \
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
                RETURNING * \
             ) \
             SELECT {PAYMENT_COLUMNS} FROM inserted f \
             JOIN classes c ON c.id = f.class_id \
             LEFT JOIN profiles p ON p.user_id = f.student_id"
        );
        sqlx::query_as::<_, FeePayment>(&query)
            .bind(input.student_id)
            .bind(input.class_id)
            .bind(&input.academic_year)
            .bind(input.amount)
            .bind(input.payment_date)
            .bind(&input.payment_method)
            .bind(&input.transaction_reference)
            .bind(&input.remarks)
            .bind(recorded_by)
            .fetch_one(pool)
            .await
    }

    /// List all payments, most recent payment date first.
    pub async fn list_payments(pool: &PgPool) -> Result<Vec<FeePayment>, sqlx::Error> {
        let query = format!(
            "SELECT {PAYMENT_COLUMNS} FROM fee_payments f \
             JOIN classes c ON c.id = f.class_id \
             LEFT JOIN profiles p ON p.user_id = f.student_id \
             ORDER BY f.payment_date DESC"
        );
        sqlx::query_as::<_, FeePayment>(&query).fetch_all(pool).await
    }

    /// List one student's payments, most recent payment date first.
    pub async fn list_payments_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<FeePayment>, sqlx::Error> {
        let query = format!(
            "SELECT {PAYMENT_COLUMNS} FROM fee_payments f \
             JOIN classes c ON c.id = f.class_id \
             LEFT JOIN profiles p ON p.user_id = f.student_id \
             WHERE f.student_id = $1 \
             ORDER BY f.payment_date DESC"
        );
        sqlx::query_as::<_, FeePayment>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Read the whole fee summary view, ordered by student name.
    pub async fn list_summary(pool: &PgPool) -> Result<Vec<StudentFeeSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM student_fee_summary ORDER BY student_name"
        );
        sqlx::query_as::<_, StudentFeeSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// One student's fee summary row, if they have a class and a structure.
    pub async fn summary_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Option<StudentFeeSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM student_fee_summary \
             WHERE student_id = $1 \
             ORDER BY academic_year DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, StudentFeeSummary>(&query)
            .bind(student_id)
            .fetch_optional(pool)
            .await
    }
}
