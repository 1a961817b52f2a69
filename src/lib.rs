//! Attendance and payroll derivation engine for HR records.
//!
//! This crate turns raw check-in/check-out records and a declared holiday
//! calendar into per-day attendance status codes and monthly present-day
//! rollups, and folds those rollups together with a basic salary into
//! loss-of-pay (LOP) deductions and frozen payslip snapshots.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
