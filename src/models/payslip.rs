//! Payslip input, computation, and frozen snapshot models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The inputs to a payslip computation.
///
/// `present_days` normally comes from a monthly attendance rollup. It is not
/// clamped against `total_days_in_month`; upstream data errors surface as a
/// negative LOP rather than being hidden here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipInput {
    /// The employee's monthly basic salary.
    pub basic_salary: Decimal,
    /// Days of travel claimed in the month.
    pub travelling_days: u32,
    /// Calendar days in the month (must be positive).
    pub total_days_in_month: u32,
    /// Days the employee was marked present.
    pub present_days: u32,
}

/// The full payslip breakdown derived from a [`PayslipInput`].
///
/// Identical inputs always produce an identical computation; the breakdown
/// is frozen inside a [`Payslip`] once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipComputation {
    /// The basic salary the computation started from.
    pub basic_salary: Decimal,
    /// Days of travel claimed.
    pub travelling_days: u32,
    /// Calendar days in the month.
    pub total_days_in_month: u32,
    /// Days marked present.
    pub present_days: u32,
    /// Travel allowance earned (`travelling_days` × per-day rate).
    pub travelling_allowance: Decimal,
    /// Fixed Employee Provident Fund deduction.
    pub epf: Decimal,
    /// Professional tax deduction (threshold-gated).
    pub professional_tax: Decimal,
    /// Loss-of-pay days (`total - present`; negative when present exceeds total).
    pub lop_days: i64,
    /// Loss-of-pay amount, rounded to 2 decimal places.
    pub lop_amount: Decimal,
    /// `basic_salary + travelling_allowance`.
    pub total_earnings: Decimal,
    /// `epf + professional_tax + lop_amount`.
    pub total_deductions: Decimal,
    /// `total_earnings - total_deductions`.
    pub net_salary: Decimal,
}

/// An issued payslip: a frozen computation plus issue metadata.
///
/// A payslip exists at most once per `(employee_id, month)` pair. There is
/// no amend or void transition; later attendance changes never alter an
/// issued payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for the payslip.
    pub id: Uuid,
    /// The employee the payslip was issued for.
    pub employee_id: String,
    /// The payslip month as a `YYYY-MM` key.
    pub month: String,
    /// The frozen breakdown.
    pub computation: PayslipComputation,
    /// When the payslip was issued.
    pub created_at: DateTime<Utc>,
    /// URL of the generated payslip document, if one was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

impl Payslip {
    /// Creates a new payslip snapshot issued now.
    pub fn issue(
        employee_id: impl Into<String>,
        month: impl Into<String>,
        computation: PayslipComputation,
        document_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            month: month.into(),
            computation,
            created_at: Utc::now(),
            document_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_computation() -> PayslipComputation {
        PayslipComputation {
            basic_salary: dec("25000"),
            travelling_days: 2,
            total_days_in_month: 30,
            present_days: 28,
            travelling_allowance: dec("1000"),
            epf: dec("1800"),
            professional_tax: dec("200"),
            lop_days: 2,
            lop_amount: dec("1666.67"),
            total_earnings: dec("26000"),
            total_deductions: dec("3666.67"),
            net_salary: dec("22333.33"),
        }
    }

    #[test]
    fn test_issue_stamps_metadata() {
        let slip = Payslip::issue("emp_001", "2026-03", sample_computation(), None);
        assert_eq!(slip.employee_id, "emp_001");
        assert_eq!(slip.month, "2026-03");
        assert!(slip.document_url.is_none());
    }

    #[test]
    fn test_issue_generates_distinct_ids() {
        let a = Payslip::issue("emp_001", "2026-03", sample_computation(), None);
        let b = Payslip::issue("emp_001", "2026-04", sample_computation(), None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_computation_round_trips_through_json() {
        let computation = sample_computation();
        let json = serde_json::to_string(&computation).unwrap();
        let back: PayslipComputation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, computation);
    }

    #[test]
    fn test_payslip_omits_absent_document_url() {
        let slip = Payslip::issue("emp_001", "2026-03", sample_computation(), None);
        let json = serde_json::to_string(&slip).unwrap();
        assert!(!json.contains("document_url"));

        let with_url = Payslip::issue(
            "emp_001",
            "2026-04",
            sample_computation(),
            Some("https://example.com/payslips/emp_001-2026-04.pdf".to_string()),
        );
        let json = serde_json::to_string(&with_url).unwrap();
        assert!(json.contains("\"document_url\""));
    }
}
