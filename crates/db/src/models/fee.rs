//! Fee structure, fee payment, and fee summary models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use acadex_core::types::{DbId, Timestamp};

/// A row from the `fee_structures` table, joined with its class title.
///
/// One structure per (class, academic year); the unique constraint
/// `uq_fee_structures_class_year` enforces it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeeStructure {
    pub id: DbId,
    pub class_id: DbId,
    pub academic_year: String,
    pub amount: f64,
    pub description: Option<String>,
    pub created_by: Option<DbId>,
    pub class_title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `fee_payments` table, joined with student and class names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FeePayment {
    pub id: DbId,
    pub student_id: DbId,
    pub class_id: DbId,
    pub academic_year: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    pub transaction_reference: Option<String>,
    pub remarks: Option<String>,
    pub recorded_by: Option<DbId>,
    pub student_name: Option<String>,
    pub class_title: String,
    pub created_at: Timestamp,
}

/// A row from the `student_fee_summary` view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentFeeSummary {
    pub student_id: DbId,
    pub student_name: String,
    pub class_id: DbId,
    pub class_name: String,
    pub academic_year: String,
    pub total_fees: f64,
    pub paid_amount: f64,
    pub pending_amount: f64,
}

/// DTO for creating a fee structure.
#[derive(Debug, Deserialize)]
pub struct CreateFeeStructure {
    pub class_id: DbId,
    pub academic_year: String,
    pub amount: f64,
    pub description: Option<String>,
}

/// DTO for recording a fee payment.
#[derive(Debug, Deserialize)]
pub struct CreateFeePayment {
    pub student_id: DbId,
    pub class_id: DbId,
    pub academic_year: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    pub transaction_reference: Option<String>,
    pub remarks: Option<String>,
}
