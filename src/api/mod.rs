//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for recording attendance,
//! declaring holidays, reading monthly attendance rows, and issuing
//! payslips.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CheckInRequest, CheckOutRequest, HolidayRequest, PayslipRequest};
pub use response::ApiError;
pub use state::{AppState, Stores};
