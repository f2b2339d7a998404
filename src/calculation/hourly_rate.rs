//! Hourly rate lookup functionality.
//!
//! This module determines a team member's effective hourly rate, either from
//! an independently-set hourly rate or derived from the monthly rate.

use rust_decimal::Decimal;

use crate::config::{PayrollConfig, RateDerivation};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, TeamMember};

/// The result of an hourly rate lookup, including the rate and audit step.
#[derive(Debug, Clone)]
pub struct HourlyRateLookup {
    /// The determined hourly rate.
    pub rate: Decimal,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Derives an hourly rate from a monthly rate, rounded to cents.
///
/// `monthly x 12 / working_days_per_year / hours_per_day`
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::derive_hourly_rate;
/// use payroll_engine::config::RateDerivation;
/// use rust_decimal::Decimal;
///
/// let rate = derive_hourly_rate(Decimal::new(26100, 0), &RateDerivation::default());
/// assert_eq!(rate, Decimal::new(150, 0));
/// ```
pub fn derive_hourly_rate(monthly_rate: Decimal, derivation: &RateDerivation) -> Decimal {
    (monthly_rate * Decimal::from(12)
        / derivation.working_days_per_year
        / derivation.hours_per_day)
        .round_dp(2)
}

/// Determines a team member's effective hourly rate.
///
/// Priority:
/// 1. If `member.hourly_rate` is `Some`, use that value
/// 2. Otherwise derive it from `member.monthly_rate`
///
/// Returns `InvalidTeamMember` if the chosen source is negative, or if no
/// override is set and the monthly rate is not positive.
pub fn get_hourly_rate(
    member: &TeamMember,
    config: &PayrollConfig,
    step_number: u32,
) -> EngineResult<HourlyRateLookup> {
    if let Some(override_rate) = member.hourly_rate {
        if override_rate.is_sign_negative() {
            return Err(EngineError::InvalidTeamMember {
                name: member.name.clone(),
                message: format!("hourly rate is negative: {}", override_rate),
            });
        }

        let audit_step = AuditStep {
            step_number,
            rule_id: "hourly_rate_lookup".to_string(),
            rule_name: "Hourly Rate Lookup".to_string(),
            input: serde_json::json!({
                "agent_name": member.name,
                "hourly_rate": override_rate.to_string()
            }),
            output: serde_json::json!({
                "rate": override_rate.to_string(),
                "source": "member_hourly_rate"
            }),
            reasoning: format!(
                "Using hourly rate {} set on team member '{}'",
                override_rate, member.name
            ),
        };

        return Ok(HourlyRateLookup {
            rate: override_rate,
            audit_step,
        });
    }

    if member.monthly_rate <= Decimal::ZERO {
        return Err(EngineError::InvalidTeamMember {
            name: member.name.clone(),
            message: "no hourly rate set and monthly rate is not positive".to_string(),
        });
    }

    let derivation = config.rate_derivation();
    let rate = derive_hourly_rate(member.monthly_rate, derivation);
    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate_lookup".to_string(),
        rule_name: "Hourly Rate Lookup".to_string(),
        input: serde_json::json!({
            "agent_name": member.name,
            "monthly_rate": member.monthly_rate.to_string(),
            "working_days_per_year": derivation.working_days_per_year.to_string(),
            "hours_per_day": derivation.hours_per_day.to_string()
        }),
        output: serde_json::json!({
            "rate": rate.to_string(),
            "source": "derived_from_monthly"
        }),
        reasoning: format!(
            "Derived {} from monthly rate {} x 12 / {} days / {} hours",
            rate, member.monthly_rate, derivation.working_days_per_year, derivation.hours_per_day
        ),
    };

    Ok(HourlyRateLookup { rate, audit_step })
}
