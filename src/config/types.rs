//! Configuration types for statutory payroll rates.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Professional tax parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfessionalTaxRates {
    /// Basic salary above which professional tax is charged.
    pub threshold: Decimal,
    /// The flat professional tax amount.
    pub amount: Decimal,
}

/// The statutory rates used by payslip computation.
///
/// `Default` yields the rates the production payroll uses: EPF 1800,
/// professional tax 200 above a 21000 basic, travel allowance 500 per day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatutoryRates {
    /// Fixed monthly Employee Provident Fund deduction.
    pub epf_amount: Decimal,
    /// Professional tax parameters.
    pub professional_tax: ProfessionalTaxRates,
    /// Travel allowance paid per travelling day.
    pub travelling_allowance_per_day: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            epf_amount: Decimal::from(1800),
            professional_tax: ProfessionalTaxRates {
                threshold: Decimal::from(21000),
                amount: Decimal::from(200),
            },
            travelling_allowance_per_day: Decimal::from(500),
        }
    }
}
