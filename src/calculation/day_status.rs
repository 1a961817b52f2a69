//! Per-day attendance status resolution.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{AttendanceDay, DayCode, HolidaySet, RawStatus};

/// Resolves a single calendar date to a one-letter attendance status code.
///
/// The rules apply in order, first match wins:
///
/// 1. `date` after `today` → [`DayCode::Blank`] (future dates are never marked)
/// 2. `date` in `holidays` → [`DayCode::Festival`]
/// 3. record status is `Present` → [`DayCode::Present`]
/// 4. `date` is a Sunday → [`DayCode::WeeklyOff`]
/// 5. otherwise → [`DayCode::Absent`]
///
/// The holiday check deliberately precedes the present check: a declared
/// holiday overrides a logged `Present` to `F`. That matches the behaviour
/// of the production system this engine replaces and must not be reordered
/// without product confirmation.
///
/// All inputs are optional or defaultable; there are no error conditions.
/// Taking [`NaiveDate`] for `date` and `today` means both are already
/// normalized to midnight.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::resolve_day_status;
/// use payroll_engine::models::{DayCode, HolidaySet};
///
/// let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
/// let holidays = HolidaySet::new();
///
/// // A past weekday with no record is absent
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// assert_eq!(resolve_day_status(monday, None, &holidays, today), DayCode::Absent);
///
/// // A past Sunday with no record is the weekly off
/// let sunday = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
/// assert_eq!(resolve_day_status(sunday, None, &holidays, today), DayCode::WeeklyOff);
///
/// // The future is never marked
/// let next_month = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
/// assert_eq!(resolve_day_status(next_month, None, &holidays, today), DayCode::Blank);
/// ```
pub fn resolve_day_status(
    date: NaiveDate,
    record: Option<&AttendanceDay>,
    holidays: &HolidaySet,
    today: NaiveDate,
) -> DayCode {
    if date > today {
        return DayCode::Blank;
    }
    if holidays.contains(date) {
        return DayCode::Festival;
    }
    if record.is_some_and(|r| r.status == RawStatus::Present) {
        return DayCode::Present;
    }
    if date.weekday() == Weekday::Sun {
        return DayCode::WeeklyOff;
    }
    DayCode::Absent
}
