//! Pay adjustments entered outside of attendance.
//!
//! Adjustments belong to an agent, not to a pay period or an entry; every
//! adjustment on file for an agent is applied to that agent's net pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Whether an adjustment adds to or subtracts from net pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Subtracted from earnings (e.g. cash advance, equipment).
    Deduction,
    /// Added to earnings (e.g. internet allowance, expenses).
    Reimbursement,
}

/// A free-standing deduction or reimbursement for an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Unique identifier for the adjustment.
    pub id: Uuid,
    /// The agent the adjustment applies to.
    pub agent_name: String,
    /// Deduction or reimbursement.
    pub kind: AdjustmentKind,
    /// Non-negative amount; `kind` decides the sign.
    pub amount: Decimal,
    /// What the adjustment is for.
    #[serde(default)]
    pub description: String,
}

impl Adjustment {
    /// Creates a new adjustment with a fresh id.
    pub fn new(
        agent_name: impl Into<String>,
        kind: AdjustmentKind,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            agent_name: agent_name.into(),
            kind,
            amount,
            description: description.into(),
        }
    }

    /// Rejects a negative amount. The sign comes from `kind` alone.
    pub fn validate(&self) -> EngineResult<()> {
        if self.amount < Decimal::ZERO {
            return Err(EngineError::NegativeAmount {
                field: "adjustment amount",
                value: self.amount,
            });
        }
        Ok(())
    }
}
