//! Derived monthly attendance row.
//!
//! A [`MonthlyAttendanceRow`] is computed on demand from the attendance and
//! holiday stores and is never persisted.

use serde::{Deserialize, Serialize};

use super::attendance::DayCode;

/// One employee's derived attendance for one calendar month.
///
/// `daily_statuses` always holds exactly one code per calendar day of the
/// month, in ascending date order, however sparse the underlying attendance
/// data is. `total_present` is the count of [`DayCode::Present`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAttendanceRow {
    /// The employee this row was derived for.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// One status code per calendar day, day 1 first.
    pub daily_statuses: Vec<DayCode>,
    /// Count of `P` codes in `daily_statuses`.
    pub total_present: u32,
}

impl MonthlyAttendanceRow {
    /// Returns the status codes joined into a display string.
    ///
    /// Future (blank) days render as a space so positions stay aligned with
    /// calendar days.
    pub fn statuses_display(&self) -> String {
        self.daily_statuses
            .iter()
            .map(|code| match code {
                DayCode::Blank => " ",
                other => other.as_str(),
            })
            .collect()
    }
}
