//! Configuration loading and management for the payroll engine.
//!
//! This module loads the shift type rate table from YAML, including the
//! multipliers, paid leave credit, rate derivation parameters and the
//! policies for unknown shift types and paid leave hours.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Loaded rate table: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    LeaveHoursPolicy, PayrollConfig, PayrollConfigFile, RateDerivation, RateTable,
    RateTableMetadata, UnknownShiftTypePolicy,
};
