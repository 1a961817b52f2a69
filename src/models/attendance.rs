//! Attendance record model and status codes.
//!
//! This module defines the raw per-day attendance record as it is stored,
//! together with the derived single-letter status codes used by monthly
//! attendance views.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The status stored on a raw attendance record.
///
/// `Present` is only set at check-out time; a record with a check-in but no
/// check-out stays at `NotAvailable` and does not count as present in the
/// monthly rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RawStatus {
    /// Both check-in and check-out have been recorded.
    Present,
    /// The day was explicitly marked absent.
    Absent,
    /// No completed attendance has been recorded.
    #[default]
    #[serde(rename = "N/A")]
    NotAvailable,
}

/// A raw attendance record for one employee on one calendar date.
///
/// Records are stored keyed by `DD-MM-YYYY` date keys (see
/// [`date_key`](crate::models::date_key)). Field names serialize in
/// camelCase to stay compatible with existing stored documents.
///
/// Invariant: `duration_millis` is present iff both `check_in` and
/// `check_out` are present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDay {
    /// The check-in timestamp, if recorded.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// The check-out timestamp, if recorded.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Free-text location captured at check-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_location: Option<String>,
    /// Free-text location captured at check-out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_location: Option<String>,
    /// Worked duration in milliseconds, set at check-out.
    #[serde(default)]
    pub duration_millis: Option<i64>,
    /// The stored status for the day.
    #[serde(default)]
    pub status: RawStatus,
}

impl AttendanceDay {
    /// Returns true if both check-in and check-out have been recorded.
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }
}

/// A derived single-letter attendance status for one calendar day.
///
/// Serializes as the single-letter code used by monthly attendance views
/// (`"P"`, `"A"`, `"H"`, `"F"`), with future days as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCode {
    /// The date is in the future; no status is assigned.
    #[serde(rename = "")]
    Blank,
    /// Present: a completed check-in/check-out pair was recorded.
    #[serde(rename = "P")]
    Present,
    /// Absent: a working day with no completed attendance.
    #[serde(rename = "A")]
    Absent,
    /// Weekly holiday (Sunday).
    #[serde(rename = "H")]
    WeeklyOff,
    /// Declared festival holiday.
    #[serde(rename = "F")]
    Festival,
}

impl DayCode {
    /// Returns the single-letter code, or the empty string for [`DayCode::Blank`].
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::Blank => "",
            DayCode::Present => "P",
            DayCode::Absent => "A",
            DayCode::WeeklyOff => "H",
            DayCode::Festival => "F",
        }
    }
}
