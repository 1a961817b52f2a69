//! Calculation logic for the payroll engine.
//!
//! This module contains the pure derivation functions: calendar math,
//! per-day attendance status resolution, the monthly present-day rollup,
//! loss-of-pay calculation, and the full payslip breakdown. Everything here
//! is synchronous, side-effect free, and operates on already-fetched
//! snapshots of store data.

mod calendar;
mod day_status;
mod lop;
mod monthly_rollup;
mod payslip;

pub use calendar::{days_in_month, month_days};
pub use day_status::resolve_day_status;
pub use lop::{LopResult, compute_lop, round2};
pub use monthly_rollup::build_monthly_row;
pub use payslip::compute_payslip;
