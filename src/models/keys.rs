//! Date and month key formatting for the document-store boundary.
//!
//! All date keys exchanged with the attendance and holiday collaborators use
//! zero-padded `DD-MM-YYYY`; payslip month keys use `YYYY-MM`. Existing
//! stored data is keyed in these exact formats, so they must not change.

use chrono::NaiveDate;

/// The date key format used by the attendance and holiday stores.
const DATE_KEY_FORMAT: &str = "%d-%m-%Y";

/// Formats a date as a zero-padded `DD-MM-YYYY` store key.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::models::date_key;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
/// assert_eq!(date_key(date), "05-03-2026");
/// ```
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a `DD-MM-YYYY` store key back into a date.
///
/// Returns `None` for keys that are not in `DD-MM-YYYY` order or that do
/// not name a real calendar date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::models::parse_date_key;
///
/// assert_eq!(
///     parse_date_key("05-03-2026"),
///     Some(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap())
/// );
/// assert_eq!(parse_date_key("2026-03-05"), None);
/// assert_eq!(parse_date_key("31-02-2026"), None);
/// ```
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Formats a `YYYY-MM` payslip month key.
///
/// # Example
///
/// ```
/// use payroll_engine::models::month_key;
///
/// assert_eq!(month_key(2026, 3), "2026-03");
/// ```
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}
