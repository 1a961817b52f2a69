//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance and payroll
//! derivation.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/statutory.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The year/month pair does not name a valid calendar month.
    #[error("Invalid calendar month: {year}-{month:02}")]
    InvalidMonth {
        /// The year component.
        year: i32,
        /// The month component (expected 1-12).
        month: u32,
    },

    /// The month length passed to the LOP calculator was not positive.
    ///
    /// Dividing a salary over a zero-day month is undefined; the calculator
    /// aborts instead of producing a nonsense amount.
    #[error("Invalid month length: {total_days} days")]
    InvalidMonthLength {
        /// The rejected month length.
        total_days: u32,
    },

    /// A payslip input field was invalid or inconsistent.
    #[error("Invalid payslip field '{field}': {message}")]
    InvalidPayslipInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance mutation was invalid for the record's current state.
    #[error("Invalid attendance for employee '{employee_id}' on {date}: {message}")]
    InvalidAttendance {
        /// The employee whose record was being mutated.
        employee_id: String,
        /// The date key of the record (`DD-MM-YYYY`).
        date: String,
        /// A description of what made the mutation invalid.
        message: String,
    },

    /// A payslip already exists for the employee and month.
    ///
    /// Issued payslips are frozen snapshots; regeneration is refused rather
    /// than silently overwriting.
    #[error("Payslip already exists for employee '{employee_id}' in month {month}")]
    DuplicatePayslip {
        /// The employee id.
        employee_id: String,
        /// The month key (`YYYY-MM`).
        month: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/statutory.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/statutory.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_month_zero_pads_month() {
        let error = EngineError::InvalidMonth { year: 2026, month: 3 };
        assert_eq!(error.to_string(), "Invalid calendar month: 2026-03");
    }

    #[test]
    fn test_invalid_month_length_displays_days() {
        let error = EngineError::InvalidMonthLength { total_days: 0 };
        assert_eq!(error.to_string(), "Invalid month length: 0 days");
    }

    #[test]
    fn test_invalid_payslip_input_displays_field_and_message() {
        let error = EngineError::InvalidPayslipInput {
            field: "basic_salary".to_string(),
            message: "cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payslip field 'basic_salary': cannot be negative"
        );
    }

    #[test]
    fn test_invalid_attendance_displays_employee_and_date() {
        let error = EngineError::InvalidAttendance {
            employee_id: "emp_001".to_string(),
            date: "05-03-2026".to_string(),
            message: "check-out recorded without a check-in".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid attendance for employee 'emp_001' on 05-03-2026: check-out recorded without a check-in"
        );
    }

    #[test]
    fn test_duplicate_payslip_displays_employee_and_month() {
        let error = EngineError::DuplicatePayslip {
            employee_id: "emp_001".to_string(),
            month: "2026-03".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payslip already exists for employee 'emp_001' in month 2026-03"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month_length() -> EngineResult<()> {
            Err(EngineError::InvalidMonthLength { total_days: 0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month_length()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
