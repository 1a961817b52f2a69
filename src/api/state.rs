//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::store::{AttendanceStore, HolidayStore, PayslipStore};

/// The mutable store set behind the API.
#[derive(Debug, Default)]
pub struct Stores {
    /// Attendance records per employee and date.
    pub attendance: AttendanceStore,
    /// Declared festival holidays.
    pub holidays: HolidayStore,
    /// Issued payslip snapshots.
    pub payslips: PayslipStore,
}

/// Shared application state.
///
/// Contains the loaded statutory rate configuration and the document
/// stores. Store access goes through one `RwLock`, so a payslip creation
/// holds the write guard across its existence check and insert.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    stores: Arc<RwLock<Stores>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader
    /// and empty stores.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            stores: Arc::new(RwLock::new(Stores::default())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared store set.
    pub fn stores(&self) -> &RwLock<Stores> {
        &self.stores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_stores() {
        let state = AppState::new(ConfigLoader::default());
        let clone = state.clone();

        state.stores().write().await.holidays.declare(
            chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            "Holi",
        );

        assert_eq!(clone.stores().read().await.holidays.len(), 1);
    }
}
