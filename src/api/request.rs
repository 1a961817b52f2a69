//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the attendance,
//! holiday, and payslip endpoints.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /attendance/check-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// The employee checking in.
    pub employee_id: String,
    /// The check-in timestamp.
    pub timestamp: NaiveDateTime,
    /// Free-text location, if captured.
    #[serde(default)]
    pub location: Option<String>,
}

/// Request body for `POST /attendance/check-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    /// The employee checking out.
    pub employee_id: String,
    /// The check-out timestamp.
    pub timestamp: NaiveDateTime,
    /// Free-text location, if captured.
    #[serde(default)]
    pub location: Option<String>,
}

/// Request body for `POST /holidays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The holiday date as a `DD-MM-YYYY` key.
    pub date: String,
    /// The festival label.
    pub festival: String,
}

/// Request body for `POST /payslips`.
///
/// Present days are not part of the request: they are derived from the
/// attendance store for the requested month at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employee to issue a payslip for.
    pub employee_id: String,
    /// The payslip year.
    pub year: i32,
    /// The payslip month (1-12).
    pub month: u32,
    /// The employee's monthly basic salary.
    pub basic_salary: Decimal,
    /// Days of travel claimed in the month.
    #[serde(default)]
    pub travelling_days: u32,
    /// URL of an already-generated payslip document, if any.
    #[serde(default)]
    pub document_url: Option<String>,
}
