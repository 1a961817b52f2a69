//! In-memory document-store collaborators.
//!
//! The derivation engine consumes read-only snapshots of three stores:
//! attendance records keyed by employee and date, declared holidays keyed by
//! date, and issued payslips keyed by employee and month. These in-memory
//! implementations mirror the get/set/query surface of the backing document
//! database; mutations happen only through the explicit operations defined
//! here (check-in, check-out, declare, create-if-absent), never from the
//! derivation functions themselves.

mod attendance;
mod holiday;
mod payslip;

pub use attendance::AttendanceStore;
pub use holiday::HolidayStore;
pub use payslip::PayslipStore;
