//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML rate table, and the validated
//! [`PayrollConfig`] the engine runs with.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftType;

/// How paid leave entries are credited with hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveHoursPolicy {
    /// Paid Leave and Paid SL credit a flat day of hours regardless of the
    /// recorded clock times.
    #[default]
    FlatCredit,
    /// Paid leave is paid on the recorded clock times like any other entry.
    RecordedHours,
}

/// What to do with a shift type name that is not in the rate table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownShiftTypePolicy {
    /// Treat the entry as a Regular Shift (multiplier 1.00) and log a warning.
    #[default]
    RegularFallback,
    /// Refuse the entry with an `UnknownShiftType` error.
    Reject,
}

/// Metadata about the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTableMetadata {
    /// Human-readable name of the rate table.
    pub name: String,
    /// The version or effective date of the rate table.
    pub version: String,
}

impl Default for RateTableMetadata {
    fn default() -> Self {
        Self {
            name: "Standard shift rates".to_string(),
            version: "builtin".to_string(),
        }
    }
}

/// Parameters for deriving an hourly rate from a monthly rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDerivation {
    /// Paid working days in a year.
    pub working_days_per_year: Decimal,
    /// Working hours in a day.
    pub hours_per_day: Decimal,
}

impl Default for RateDerivation {
    fn default() -> Self {
        Self {
            working_days_per_year: Decimal::new(261, 0),
            hours_per_day: Decimal::new(8, 0),
        }
    }
}

/// Shift type multipliers and the paid leave day credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    multipliers: HashMap<ShiftType, Decimal>,
    paid_leave_credit_hours: Decimal,
}

impl RateTable {
    /// Returns the multiplier for a shift type.
    pub fn multiplier(&self, shift_type: ShiftType) -> Decimal {
        self.multipliers
            .get(&shift_type)
            .copied()
            .unwrap_or_else(|| shift_type.default_multiplier())
    }

    /// Hours credited for a paid leave day.
    pub fn paid_leave_credit_hours(&self) -> Decimal {
        self.paid_leave_credit_hours
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            multipliers: ShiftType::ALL
                .into_iter()
                .map(|shift| (shift, shift.default_multiplier()))
                .collect(),
            paid_leave_credit_hours: Decimal::new(8, 0),
        }
    }
}

fn default_paid_leave_credit_hours() -> Decimal {
    Decimal::new(8, 0)
}

/// Raw structure of `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfigFile {
    /// Rate table metadata.
    pub metadata: RateTableMetadata,
    /// Map of shift type display name to multiplier.
    pub multipliers: HashMap<String, Decimal>,
    /// Hours credited for a paid leave day.
    #[serde(default = "default_paid_leave_credit_hours")]
    pub paid_leave_credit_hours: Decimal,
    /// Monthly-to-hourly derivation parameters.
    #[serde(default)]
    pub rate_derivation: RateDerivation,
    /// Handling of unrecognised shift type names.
    #[serde(default)]
    pub unknown_shift_type: UnknownShiftTypePolicy,
    /// Crediting of paid leave hours.
    #[serde(default)]
    pub leave_hours_policy: LeaveHoursPolicy,
}

/// The validated configuration the engine computes with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollConfig {
    metadata: RateTableMetadata,
    rate_table: RateTable,
    rate_derivation: RateDerivation,
    unknown_shift_type: UnknownShiftTypePolicy,
    leave_hours_policy: LeaveHoursPolicy,
}

impl PayrollConfig {
    /// Returns the rate table metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        &self.metadata
    }

    /// Returns the shift type rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    /// Returns the monthly-to-hourly derivation parameters.
    pub fn rate_derivation(&self) -> &RateDerivation {
        &self.rate_derivation
    }

    /// Returns the policy for unrecognised shift type names.
    pub fn unknown_shift_type(&self) -> UnknownShiftTypePolicy {
        self.unknown_shift_type
    }

    /// Returns the paid leave crediting policy.
    pub fn leave_hours_policy(&self) -> LeaveHoursPolicy {
        self.leave_hours_policy
    }

    /// Returns a copy with a different paid leave crediting policy.
    pub fn with_leave_hours_policy(mut self, policy: LeaveHoursPolicy) -> Self {
        self.leave_hours_policy = policy;
        self
    }

    /// Returns a copy with a different unknown shift type policy.
    pub fn with_unknown_shift_type(mut self, policy: UnknownShiftTypePolicy) -> Self {
        self.unknown_shift_type = policy;
        self
    }

    /// Resolves a shift type name, applying the unknown shift type policy.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::{PayrollConfig, UnknownShiftTypePolicy};
    /// use payroll_engine::models::ShiftType;
    ///
    /// let lenient = PayrollConfig::default();
    /// assert_eq!(lenient.resolve_shift_type("Graveyard").unwrap(), ShiftType::RegularShift);
    ///
    /// let strict = PayrollConfig::default().with_unknown_shift_type(UnknownShiftTypePolicy::Reject);
    /// assert!(strict.resolve_shift_type("Graveyard").is_err());
    /// ```
    pub fn resolve_shift_type(&self, name: &str) -> EngineResult<ShiftType> {
        match name.parse::<ShiftType>() {
            Ok(shift) => Ok(shift),
            Err(err) => match self.unknown_shift_type {
                UnknownShiftTypePolicy::Reject => Err(err),
                UnknownShiftTypePolicy::RegularFallback => {
                    warn!(
                        shift_type = %name,
                        "Unknown shift type, falling back to Regular Shift"
                    );
                    Ok(ShiftType::RegularShift)
                }
            },
        }
    }
}

impl TryFrom<PayrollConfigFile> for PayrollConfig {
    type Error = EngineError;

    fn try_from(file: PayrollConfigFile) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidConfig { message };

        let mut multipliers = HashMap::new();
        for (name, multiplier) in file.multipliers {
            let shift: ShiftType = name.parse()?;
            if multiplier.is_sign_negative() {
                return Err(invalid(format!(
                    "multiplier for '{}' is negative: {}",
                    name, multiplier
                )));
            }
            multipliers.insert(shift, multiplier);
        }

        if let Some(missing) = ShiftType::ALL
            .into_iter()
            .find(|shift| !multipliers.contains_key(shift))
        {
            return Err(invalid(format!("no multiplier for '{}'", missing)));
        }

        if file.paid_leave_credit_hours <= Decimal::ZERO {
            return Err(invalid(
                "paid_leave_credit_hours must be positive".to_string(),
            ));
        }

        let derivation = &file.rate_derivation;
        if derivation.working_days_per_year <= Decimal::ZERO
            || derivation.hours_per_day <= Decimal::ZERO
        {
            return Err(invalid(
                "rate_derivation values must be positive".to_string(),
            ));
        }

        Ok(Self {
            metadata: file.metadata,
            rate_table: RateTable {
                multipliers,
                paid_leave_credit_hours: file.paid_leave_credit_hours,
            },
            rate_derivation: file.rate_derivation,
            unknown_shift_type: file.unknown_shift_type,
            leave_hours_policy: file.leave_hours_policy,
        })
    }
}
