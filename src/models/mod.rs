//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod holiday;
mod keys;
mod monthly;
mod payslip;

pub use attendance::{AttendanceDay, DayCode, RawStatus};
pub use holiday::{Holiday, HolidaySet};
pub use keys::{date_key, month_key, parse_date_key};
pub use monthly::MonthlyAttendanceRow;
pub use payslip::{Payslip, PayslipComputation, PayslipInput};
