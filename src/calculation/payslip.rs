//! Full payslip breakdown computation.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayslipComputation, PayslipInput};

use super::lop::compute_lop;

/// Computes the full payslip breakdown for one employee-month.
///
/// Earnings are `basic_salary` plus a travel allowance of
/// `travelling_days` × the per-day rate. Deductions are the fixed EPF
/// amount, professional tax (charged only when `basic_salary` exceeds the
/// threshold), and the loss-of-pay amount from [`compute_lop`].
///
/// The function is pure and deterministic: identical inputs and rates
/// always produce an identical breakdown, which is what makes issued
/// payslips reproducible for audit.
///
/// # Errors
///
/// - [`EngineError::InvalidPayslipInput`] when `basic_salary` is negative
/// - [`EngineError::InvalidMonthLength`] when `total_days_in_month` is zero
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use payroll_engine::calculation::compute_payslip;
/// use payroll_engine::config::StatutoryRates;
/// use payroll_engine::models::PayslipInput;
///
/// let input = PayslipInput {
///     basic_salary: Decimal::from(25000),
///     travelling_days: 2,
///     total_days_in_month: 30,
///     present_days: 28,
/// };
///
/// let slip = compute_payslip(&input, &StatutoryRates::default()).unwrap();
/// assert_eq!(slip.travelling_allowance, Decimal::from(1000));
/// assert_eq!(slip.net_salary, Decimal::new(2233333, 2)); // 22333.33
/// ```
pub fn compute_payslip(
    input: &PayslipInput,
    rates: &StatutoryRates,
) -> EngineResult<PayslipComputation> {
    if input.basic_salary < Decimal::ZERO {
        return Err(EngineError::InvalidPayslipInput {
            field: "basic_salary".to_string(),
            message: "cannot be negative".to_string(),
        });
    }

    let travelling_allowance =
        rates.travelling_allowance_per_day * Decimal::from(input.travelling_days);
    let epf = rates.epf_amount;
    let professional_tax = if input.basic_salary > rates.professional_tax.threshold {
        rates.professional_tax.amount
    } else {
        Decimal::ZERO
    };

    let lop = compute_lop(
        input.total_days_in_month,
        input.present_days,
        input.basic_salary,
    )?;

    let total_earnings = input.basic_salary + travelling_allowance;
    let total_deductions = epf + professional_tax + lop.lop_amount;
    let net_salary = total_earnings - total_deductions;

    Ok(PayslipComputation {
        basic_salary: input.basic_salary,
        travelling_days: input.travelling_days,
        total_days_in_month: input.total_days_in_month,
        present_days: input.present_days,
        travelling_allowance,
        epf,
        professional_tax,
        lop_days: lop.lop_days,
        lop_amount: lop.lop_amount,
        total_earnings,
        total_deductions,
        net_salary,
    })
}
