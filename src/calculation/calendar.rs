//! Calendar helpers for monthly derivations.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Returns the number of calendar days in the given month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when `(year, month)` does not name
/// a valid calendar month.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2026, 4).unwrap(), 30);
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29); // leap year
/// assert!(days_in_month(2026, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    Ok((next - first).num_days() as u32)
}

/// Returns every calendar date of the given month, day 1 first.
///
/// The result always has exactly [`days_in_month`] entries.
pub fn month_days(year: i32, month: u32) -> EngineResult<Vec<NaiveDate>> {
    let count = days_in_month(year, month)?;
    let days = (1..=count)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect();
    Ok(days)
}

fn first_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { year, month })
}
