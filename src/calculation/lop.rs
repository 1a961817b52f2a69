//! Loss-of-pay (LOP) calculation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// The result of a loss-of-pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LopResult {
    /// Days of pay lost. Negative when `present_days` exceeds the month
    /// length, which only happens on upstream data errors; the value is
    /// passed through unclamped.
    pub lop_days: i64,
    /// The deduction amount, rounded to 2 decimal places.
    pub lop_amount: Decimal,
}

/// Rounds a monetary amount to 2 decimal places, half away from zero.
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates loss-of-pay days and amount for a month.
///
/// `lop_days = total_days_in_month - present_days` and
/// `lop_amount = round2(basic_salary / total_days_in_month * lop_days)`.
///
/// `present_days` greater than `total_days_in_month` is not clamped; the
/// resulting negative LOP surfaces the upstream data error instead of
/// hiding it.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonthLength`] when `total_days_in_month`
/// is zero; the division is aborted rather than producing a nonsense
/// amount.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use payroll_engine::calculation::compute_lop;
///
/// let result = compute_lop(30, 20, Decimal::from(30000)).unwrap();
/// assert_eq!(result.lop_days, 10);
/// assert_eq!(result.lop_amount, Decimal::from(10000));
/// ```
pub fn compute_lop(
    total_days_in_month: u32,
    present_days: u32,
    basic_salary: Decimal,
) -> EngineResult<LopResult> {
    if total_days_in_month == 0 {
        return Err(EngineError::InvalidMonthLength {
            total_days: total_days_in_month,
        });
    }

    let lop_days = i64::from(total_days_in_month) - i64::from(present_days);
    let per_day = basic_salary / Decimal::from(total_days_in_month);
    let lop_amount = round2(per_day * Decimal::from(lop_days));

    Ok(LopResult { lop_days, lop_amount })
}
