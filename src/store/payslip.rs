//! Issued payslip store.

use std::collections::{BTreeMap, HashMap, btree_map::Entry};

use crate::error::{EngineError, EngineResult};
use crate::models::Payslip;

/// Issued payslips, keyed by employee id and `YYYY-MM` month key.
///
/// A payslip's lifecycle is `NotCreated → Created`; there is no amend or
/// void transition. Creation goes through
/// [`create_if_absent`](PayslipStore::create_if_absent), a single
/// conditional insert, so the existence check and the write cannot
/// interleave with another writer.
#[derive(Debug, Clone, Default)]
pub struct PayslipStore {
    slips: HashMap<String, BTreeMap<String, Payslip>>,
}

impl PayslipStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the payslip unless one already exists for its employee/month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicatePayslip`] when a payslip is already
    /// issued for the `(employee_id, month)` pair; the existing snapshot is
    /// left untouched.
    pub fn create_if_absent(&mut self, payslip: Payslip) -> EngineResult<()> {
        let months = self.slips.entry(payslip.employee_id.clone()).or_default();
        match months.entry(payslip.month.clone()) {
            Entry::Occupied(_) => Err(EngineError::DuplicatePayslip {
                employee_id: payslip.employee_id,
                month: payslip.month,
            }),
            Entry::Vacant(slot) => {
                slot.insert(payslip);
                Ok(())
            }
        }
    }

    /// Returns the issued payslip for an employee/month, if any.
    pub fn get(&self, employee_id: &str, month: &str) -> Option<&Payslip> {
        self.slips
            .get(employee_id)
            .and_then(|months| months.get(month))
    }

    /// Returns true if a payslip is already issued for the employee/month.
    pub fn exists(&self, employee_id: &str, month: &str) -> bool {
        self.get(employee_id, month).is_some()
    }

    /// Returns all payslips issued for an employee, in month order.
    pub fn for_employee(&self, employee_id: &str) -> Vec<&Payslip> {
        self.slips
            .get(employee_id)
            .map(|months| months.values().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_payslip;
    use crate::config::StatutoryRates;
    use crate::models::PayslipInput;
    use rust_decimal::Decimal;

    fn sample_payslip(employee_id: &str, month: &str) -> Payslip {
        let computation = compute_payslip(
            &PayslipInput {
                basic_salary: Decimal::from(25000),
                travelling_days: 2,
                total_days_in_month: 30,
                present_days: 28,
            },
            &StatutoryRates::default(),
        )
        .unwrap();
        Payslip::issue(employee_id, month, computation, None)
    }

    #[test]
    fn test_create_then_get() {
        let mut store = PayslipStore::new();
        let slip = sample_payslip("emp_001", "2026-03");
        let id = slip.id;
        store.create_if_absent(slip).unwrap();

        let stored = store.get("emp_001", "2026-03").unwrap();
        assert_eq!(stored.id, id);
        assert!(store.exists("emp_001", "2026-03"));
        assert!(!store.exists("emp_001", "2026-04"));
    }

    #[test]
    fn test_duplicate_create_is_refused() {
        let mut store = PayslipStore::new();
        let first = sample_payslip("emp_001", "2026-03");
        let first_id = first.id;
        store.create_if_absent(first).unwrap();

        let result = store.create_if_absent(sample_payslip("emp_001", "2026-03"));
        assert!(matches!(
            result,
            Err(EngineError::DuplicatePayslip { ref employee_id, ref month })
                if employee_id == "emp_001" && month == "2026-03"
        ));

        // The original snapshot is untouched
        assert_eq!(store.get("emp_001", "2026-03").unwrap().id, first_id);
    }

    #[test]
    fn test_same_month_different_employees_is_allowed() {
        let mut store = PayslipStore::new();
        store.create_if_absent(sample_payslip("emp_001", "2026-03")).unwrap();
        store.create_if_absent(sample_payslip("emp_002", "2026-03")).unwrap();

        assert!(store.exists("emp_001", "2026-03"));
        assert!(store.exists("emp_002", "2026-03"));
    }

    #[test]
    fn test_for_employee_orders_by_month() {
        let mut store = PayslipStore::new();
        store.create_if_absent(sample_payslip("emp_001", "2026-03")).unwrap();
        store.create_if_absent(sample_payslip("emp_001", "2026-01")).unwrap();
        store.create_if_absent(sample_payslip("emp_001", "2025-12")).unwrap();

        let months: Vec<_> = store
            .for_employee("emp_001")
            .iter()
            .map(|p| p.month.clone())
            .collect();
        assert_eq!(months, vec!["2025-12", "2026-01", "2026-03"]);
    }
}
