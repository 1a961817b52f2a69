//! Attendance record store.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceDay, RawStatus, date_key};

/// Per-employee attendance records, keyed by `DD-MM-YYYY` date keys.
///
/// Records are only mutated through [`check_in`](AttendanceStore::check_in)
/// and [`check_out`](AttendanceStore::check_out); everything else reads
/// snapshots.
#[derive(Debug, Clone, Default)]
pub struct AttendanceStore {
    days: HashMap<String, BTreeMap<String, AttendanceDay>>,
}

impl AttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a check-in for the employee on the timestamp's date.
    ///
    /// A later check-in before any check-out replaces the earlier one, as in
    /// the production system. The day's status stays `N/A` until check-out;
    /// a check-in alone never marks the day present.
    pub fn check_in(&mut self, employee_id: &str, at: NaiveDateTime, location: Option<String>) {
        let key = date_key(at.date());
        let record = self
            .days
            .entry(employee_id.to_string())
            .or_default()
            .entry(key)
            .or_default();
        record.check_in = Some(at);
        record.check_in_location = location;
    }

    /// Records a check-out, completing the day's attendance.
    ///
    /// Sets `duration_millis` to the elapsed time since check-in and flips
    /// the stored status to `Present`. Only this transition makes a day
    /// count in the monthly present rollup.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAttendance`] when no check-in exists
    /// for the date or when `at` precedes the recorded check-in.
    pub fn check_out(
        &mut self,
        employee_id: &str,
        at: NaiveDateTime,
        location: Option<String>,
    ) -> EngineResult<()> {
        let key = date_key(at.date());
        let record = self
            .days
            .get_mut(employee_id)
            .and_then(|days| days.get_mut(&key));

        let Some(record) = record else {
            return Err(EngineError::InvalidAttendance {
                employee_id: employee_id.to_string(),
                date: key,
                message: "check-out recorded without a check-in".to_string(),
            });
        };
        let Some(check_in) = record.check_in else {
            return Err(EngineError::InvalidAttendance {
                employee_id: employee_id.to_string(),
                date: key,
                message: "check-out recorded without a check-in".to_string(),
            });
        };
        if at < check_in {
            return Err(EngineError::InvalidAttendance {
                employee_id: employee_id.to_string(),
                date: key,
                message: "check-out precedes check-in".to_string(),
            });
        }

        record.check_out = Some(at);
        record.check_out_location = location;
        record.duration_millis = Some((at - check_in).num_milliseconds());
        record.status = RawStatus::Present;
        Ok(())
    }

    /// Returns the employee's stored day records, keyed by date key.
    ///
    /// Employees with no records yield an empty map; sparse data is normal.
    pub fn days_for(&self, employee_id: &str) -> BTreeMap<String, AttendanceDay> {
        self.days.get(employee_id).cloned().unwrap_or_default()
    }

    /// Returns one stored day record, if any.
    pub fn day(&self, employee_id: &str, key: &str) -> Option<&AttendanceDay> {
        self.days.get(employee_id).and_then(|days| days.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_check_in_creates_incomplete_record() {
        let mut store = AttendanceStore::new();
        store.check_in("emp_001", datetime("2026-03-05 09:00:00"), Some("HQ".into()));

        let record = store.day("emp_001", "05-03-2026").unwrap();
        assert_eq!(record.status, RawStatus::NotAvailable);
        assert!(record.check_out.is_none());
        assert!(record.duration_millis.is_none());
        assert_eq!(record.check_in_location.as_deref(), Some("HQ"));
    }

    #[test]
    fn test_check_out_completes_record() {
        let mut store = AttendanceStore::new();
        store.check_in("emp_001", datetime("2026-03-05 09:00:00"), None);
        store
            .check_out("emp_001", datetime("2026-03-05 17:30:00"), Some("HQ".into()))
            .unwrap();

        let record = store.day("emp_001", "05-03-2026").unwrap();
        assert_eq!(record.status, RawStatus::Present);
        assert!(record.is_complete());
        // 8.5 hours
        assert_eq!(record.duration_millis, Some(30_600_000));
    }

    #[test]
    fn test_check_out_without_check_in_is_rejected() {
        let mut store = AttendanceStore::new();
        let result = store.check_out("emp_001", datetime("2026-03-05 17:30:00"), None);
        assert!(matches!(
            result,
            Err(EngineError::InvalidAttendance { ref date, .. }) if date == "05-03-2026"
        ));
    }

    #[test]
    fn test_check_out_before_check_in_is_rejected() {
        let mut store = AttendanceStore::new();
        store.check_in("emp_001", datetime("2026-03-05 09:00:00"), None);
        let result = store.check_out("emp_001", datetime("2026-03-05 08:00:00"), None);
        assert!(matches!(result, Err(EngineError::InvalidAttendance { .. })));
    }

    #[test]
    fn test_repeated_check_in_replaces_earlier_one() {
        let mut store = AttendanceStore::new();
        store.check_in("emp_001", datetime("2026-03-05 08:00:00"), None);
        store.check_in("emp_001", datetime("2026-03-05 09:00:00"), None);
        store
            .check_out("emp_001", datetime("2026-03-05 17:00:00"), None)
            .unwrap();

        let record = store.day("emp_001", "05-03-2026").unwrap();
        // 8 hours from the later check-in
        assert_eq!(record.duration_millis, Some(28_800_000));
    }

    #[test]
    fn test_days_are_keyed_per_employee() {
        let mut store = AttendanceStore::new();
        store.check_in("emp_001", datetime("2026-03-05 09:00:00"), None);
        store.check_in("emp_002", datetime("2026-03-05 10:00:00"), None);

        assert_eq!(store.days_for("emp_001").len(), 1);
        assert_eq!(store.days_for("emp_002").len(), 1);
        assert!(store.days_for("emp_003").is_empty());
    }

    #[test]
    fn test_days_for_orders_by_key() {
        let mut store = AttendanceStore::new();
        store.check_in("emp_001", datetime("2026-03-10 09:00:00"), None);
        store.check_in("emp_001", datetime("2026-03-02 09:00:00"), None);

        let days = store.days_for("emp_001");
        let keys: Vec<_> = days.keys().cloned().collect();
        assert_eq!(keys, vec!["02-03-2026".to_string(), "10-03-2026".to_string()]);
    }
}
