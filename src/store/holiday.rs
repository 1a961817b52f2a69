//! Declared holiday store.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Holiday, HolidaySet, date_key};

/// Declared festival holidays, keyed by `DD-MM-YYYY` date key.
///
/// Keying by date makes the at-most-one-holiday-per-date invariant
/// structural: redeclaring a date replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct HolidayStore {
    holidays: BTreeMap<String, Holiday>,
}

impl HolidayStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a festival holiday on the given date.
    ///
    /// The weekday name is derived from the date; a second declaration for
    /// the same date replaces the first.
    pub fn declare(&mut self, date: NaiveDate, festival: impl Into<String>) -> &Holiday {
        let key = date_key(date);
        let holiday = Holiday {
            date: key.clone(),
            day: weekday_name(date).to_string(),
            festival: festival.into(),
        };
        self.holidays.insert(key.clone(), holiday);
        &self.holidays[&key]
    }

    /// Returns all declared holidays in date-key order.
    pub fn all(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    /// Returns the number of declared holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if no holidays are declared.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Returns a membership snapshot for the attendance resolver.
    pub fn date_set(&self) -> HolidaySet {
        HolidaySet::from_holidays(self.holidays.values())
    }
}

fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_declare_stores_key_and_weekday() {
        let mut store = HolidayStore::new();
        let holiday = store.declare(date("2026-03-14"), "Holi");
        assert_eq!(holiday.date, "14-03-2026");
        assert_eq!(holiday.day, "Saturday");
        assert_eq!(holiday.festival, "Holi");
    }

    #[test]
    fn test_redeclaring_a_date_replaces_entry() {
        let mut store = HolidayStore::new();
        store.declare(date("2026-03-14"), "Holi");
        store.declare(date("2026-03-14"), "Office Holiday");

        assert_eq!(store.len(), 1);
        let festival = store.all().next().unwrap().festival.clone();
        assert_eq!(festival, "Office Holiday");
    }

    #[test]
    fn test_date_set_reflects_declarations() {
        let mut store = HolidayStore::new();
        store.declare(date("2026-03-14"), "Holi");
        store.declare(date("2026-11-08"), "Diwali");

        let set = store.date_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains(date("2026-03-14")));
        assert!(set.contains(date("2026-11-08")));
        assert!(!set.contains(date("2026-01-01")));
    }

    #[test]
    fn test_empty_store_yields_empty_set() {
        let store = HolidayStore::new();
        assert!(store.is_empty());
        assert!(store.date_set().is_empty());
    }
}
