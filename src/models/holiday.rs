//! Holiday model and holiday-set snapshot.
//!
//! This module contains the [`Holiday`] record as declared by administrators
//! and the [`HolidaySet`] membership snapshot consumed by the attendance
//! status resolver.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::keys::{date_key, parse_date_key};

/// A declared festival holiday.
///
/// The `date` field carries the store's `DD-MM-YYYY` key format; at most one
/// holiday exists per date (the holiday store enforces this by keying on the
/// date).
///
/// # Example
///
/// ```
/// use payroll_engine::models::Holiday;
///
/// let holiday = Holiday {
///     date: "14-03-2026".to_string(),
///     day: "Saturday".to_string(),
///     festival: "Holi".to_string(),
/// };
/// assert!(holiday.calendar_date().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The holiday date as a `DD-MM-YYYY` key.
    pub date: String,
    /// The weekday name (e.g., "Saturday").
    pub day: String,
    /// The festival label (e.g., "Holi").
    pub festival: String,
}

impl Holiday {
    /// Parses the stored date key into a calendar date.
    ///
    /// Returns `None` when the stored key is malformed.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_date_key(&self.date)
    }
}

/// A read-only snapshot of the declared holiday dates.
///
/// The resolver only needs membership, so the snapshot is a set of
/// `DD-MM-YYYY` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: HashSet<String>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a holiday set from declared holiday records.
    ///
    /// Records with malformed date keys are skipped; missing holiday data is
    /// treated as "no holidays", never as an error.
    pub fn from_holidays<'a, I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = &'a Holiday>,
    {
        let dates = holidays
            .into_iter()
            .filter(|h| h.calendar_date().is_some())
            .map(|h| h.date.clone())
            .collect();
        Self { dates }
    }

    /// Adds a date to the set.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date_key(date));
    }

    /// Returns true if the given date is a declared holiday.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_engine::models::HolidaySet;
    ///
    /// let mut set = HolidaySet::new();
    /// let holi = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    /// set.insert(holi);
    ///
    /// assert!(set.contains(holi));
    /// assert!(!set.contains(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()));
    /// ```
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date_key(date))
    }

    /// Returns the number of declared holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if no holidays are declared.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holi() -> Holiday {
        Holiday {
            date: "14-03-2026".to_string(),
            day: "Saturday".to_string(),
            festival: "Holi".to_string(),
        }
    }

    #[test]
    fn test_calendar_date_parses_store_key() {
        assert_eq!(
            holi().calendar_date(),
            Some(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
        );
    }

    #[test]
    fn test_calendar_date_rejects_malformed_key() {
        let holiday = Holiday {
            date: "2026-03-14".to_string(),
            day: "Saturday".to_string(),
            festival: "Holi".to_string(),
        };
        assert_eq!(holiday.calendar_date(), None);
    }

    #[test]
    fn test_from_holidays_collects_dates() {
        let diwali = Holiday {
            date: "08-11-2026".to_string(),
            day: "Sunday".to_string(),
            festival: "Diwali".to_string(),
        };
        let holidays = vec![holi(), diwali];

        let set = HolidaySet::from_holidays(&holidays);
        assert_eq!(set.len(), 2);
        assert!(set.contains(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()));
        assert!(set.contains(NaiveDate::from_ymd_opt(2026, 11, 8).unwrap()));
    }

    #[test]
    fn test_from_holidays_skips_malformed_dates() {
        let bad = Holiday {
            date: "not-a-date".to_string(),
            day: "Monday".to_string(),
            festival: "Unknown".to_string(),
        };
        let holidays = vec![holi(), bad];

        let set = HolidaySet::from_holidays(&holidays);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_set_contains_nothing() {
        let set = HolidaySet::new();
        assert!(set.is_empty());
        assert!(!set.contains(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
    }

    #[test]
    fn test_holiday_serialization_keeps_store_shape() {
        let json = serde_json::to_string(&holi()).unwrap();
        assert!(json.contains("\"date\":\"14-03-2026\""));
        assert!(json.contains("\"day\":\"Saturday\""));
        assert!(json.contains("\"festival\":\"Holi\""));
    }
}
