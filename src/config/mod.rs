//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load statutory payroll rates (EPF,
//! professional tax, travel allowance) from a YAML file. The defaults encode
//! the rates the production payroll uses; the file exists so they can be
//! revised without a code change.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("EPF deduction: {}", config.rates().epf_amount);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ProfessionalTaxRates, StatutoryRates};
