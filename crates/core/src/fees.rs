//! Fee position arithmetic.

use serde::Serialize;

/// A student's computed fee position for one academic year.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeeStatus {
    pub total_fees: f64,
    pub paid_amount: f64,
    pub pending_amount: f64,
    /// Whole-percent share of the total that has been paid, clamped to 0-100.
    pub payment_percentage: u32,
}

/// Compute the fee position from the structure total and the paid sum.
///
/// With no fee structure (total <= 0) everything reads as zero paid-percent
/// and the pending amount mirrors the (possibly zero) total.
pub fn fee_status(total_fees: f64, paid_amount: f64) -> FeeStatus {
    let pending_amount = total_fees - paid_amount;
    let payment_percentage = if total_fees <= 0.0 {
        0
    } else {
        (paid_amount / total_fees * 100.0).round().clamp(0.0, 100.0) as u32
    };

    FeeStatus {
        total_fees,
        paid_amount,
        pending_amount,
        payment_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payment() {
        let status = fee_status(12000.0, 9000.0);
        assert_eq!(status.pending_amount, 3000.0);
        assert_eq!(status.payment_percentage, 75);
    }

    #[test]
    fn no_structure_means_zero_percent() {
        let status = fee_status(0.0, 0.0);
        assert_eq!(status.payment_percentage, 0);
        assert_eq!(status.pending_amount, 0.0);
    }

    #[test]
    fn overpayment_clamps_to_hundred() {
        let status = fee_status(1000.0, 1200.0);
        assert_eq!(status.payment_percentage, 100);
        assert_eq!(status.pending_amount, -200.0);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        // 1/3 paid -> 33%
        assert_eq!(fee_status(3000.0, 1000.0).payment_percentage, 33);
        // 2/3 paid -> 67%
        assert_eq!(fee_status(3000.0, 2000.0).payment_percentage, 67);
    }
}
