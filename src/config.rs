// Copyright 2025 Cowboy AI, LLC.

//! Equilibrium policy configuration
//!
//! The policy tunes how a [`MetaEquilibrium`](crate::MetaEquilibrium) ledger
//! audits what is registered with it. Dualities and relationships always use
//! exact equality; the policy only governs the ledger's own checks.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Share of a total assigned to structure at the operational level (52%)
pub const STRUCTURE_SHARE: f64 = 0.52;

/// Share of a total assigned to flexibility at the operational level (48%)
pub const FLEXIBILITY_SHARE: f64 = 0.48;

/// Policy configuration for a META 50/50 ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EquilibriumPolicy {
    /// Maximum allowed deviation, in percentage points, from 50/50 when a
    /// parameter is registered. META level allows no deviation.
    pub balance_tolerance: f64,
    /// Structure share expected by
    /// [`validate_operational_enables_meta`](crate::MetaEquilibrium::validate_operational_enables_meta).
    /// Attribute splits always use [`STRUCTURE_SHARE`].
    pub structure_share: f64,
    /// Maximum deviation, in percentage points, accepted by the operational check
    pub operational_tolerance: f64,
}

impl Default for EquilibriumPolicy {
    fn default() -> Self {
        Self {
            balance_tolerance: 0.0,
            structure_share: STRUCTURE_SHARE,
            operational_tolerance: 0.01,
        }
    }
}

impl EquilibriumPolicy {
    /// Parse a policy from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check the policy is usable
    pub fn validate(&self) -> DomainResult<()> {
        if !self.balance_tolerance.is_finite() || self.balance_tolerance < 0.0 {
            return Err(DomainError::InvalidPolicy(format!(
                "balance_tolerance must be a non-negative number, got {}",
                self.balance_tolerance
            )));
        }
        if !self.operational_tolerance.is_finite() || self.operational_tolerance < 0.0 {
            return Err(DomainError::InvalidPolicy(format!(
                "operational_tolerance must be a non-negative number, got {}",
                self.operational_tolerance
            )));
        }
        if !(self.structure_share > 0.0 && self.structure_share < 1.0) {
            return Err(DomainError::InvalidPolicy(format!(
                "structure_share must lie strictly between 0 and 1, got {}",
                self.structure_share
            )));
        }
        Ok(())
    }

    /// Expected operational split as percentages (structure, flexibility)
    pub fn operational_percentages(&self) -> (f64, f64) {
        let structure = self.structure_share * 100.0;
        (structure, 100.0 - structure)
    }
}
