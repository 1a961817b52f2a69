//! Monthly attendance rollup.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceDay, DayCode, HolidaySet, MonthlyAttendanceRow, date_key};

use super::calendar::month_days;
use super::day_status::resolve_day_status;

/// Builds one employee's attendance row for a calendar month.
///
/// Every calendar day of `(year, month)` is resolved through
/// [`resolve_day_status`], producing exactly `days_in_month(year, month)`
/// codes in ascending date order regardless of how sparse `attendance` is.
/// `total_present` counts the `P` codes.
///
/// `attendance` is the employee's stored day records keyed by `DD-MM-YYYY`
/// date keys, exactly as the attendance store holds them.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`](crate::error::EngineError::InvalidMonth)
/// when `(year, month)` does not name a valid calendar month.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::build_monthly_row;
/// use payroll_engine::models::HolidaySet;
///
/// let today = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
/// let row = build_monthly_row(
///     "emp_001",
///     2026,
///     4,
///     &BTreeMap::new(),
///     &HolidaySet::new(),
///     today,
/// )
/// .unwrap();
///
/// assert_eq!(row.daily_statuses.len(), 30);
/// assert_eq!(row.total_present, 0);
/// ```
pub fn build_monthly_row(
    employee_id: &str,
    year: i32,
    month: u32,
    attendance: &BTreeMap<String, AttendanceDay>,
    holidays: &HolidaySet,
    today: NaiveDate,
) -> EngineResult<MonthlyAttendanceRow> {
    let daily_statuses: Vec<DayCode> = month_days(year, month)?
        .into_iter()
        .map(|date| {
            let record = attendance.get(&date_key(date));
            resolve_day_status(date, record, holidays, today)
        })
        .collect();

    let total_present = daily_statuses
        .iter()
        .filter(|code| **code == DayCode::Present)
        .count() as u32;

    Ok(MonthlyAttendanceRow {
        employee_id: employee_id.to_string(),
        year,
        month,
        daily_statuses,
        total_present,
    })
}
