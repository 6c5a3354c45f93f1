// Copyright 2025 Cowboy AI, LLC.

//! Duality value objects
//!
//! Value Objects are immutable, compared by value, and replaced rather than
//! updated:
//! - [`DomainPole`]: one named, non-negative side of an opposition
//! - [`DomainDuality`]: two poles that must carry equal weight (META 50/50)
//! - [`DomainAttribute`]: a total split 52/48 into structure and flexibility

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::proof::{AttributeProof, DualityProof, PoleProof};
use crate::equilibrium::{calculate_balance, verify_balance, SubParameter};
use crate::errors::{DomainError, DomainResult};
use crate::proportions::OperationalSplit;

/// One pole of a domain's duality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DomainPole {
    name: String,
    value: f64,
    description: Option<String>,
}

impl DomainPole {
    /// Create a pole, rejecting negative or non-finite weights
    pub fn new(name: impl Into<String>, value: f64) -> DomainResult<Self> {
        let name = name.into();
        if value.is_nan() || value.is_infinite() {
            return Err(DomainError::NonFiniteValue { pole: name });
        }
        if value < 0.0 {
            return Err(DomainError::NegativeValue { pole: name, value });
        }
        Ok(Self {
            name,
            value,
            description: None,
        })
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pole name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pole weight
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Optional description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// The fundamental duality of a knowledge domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DomainDuality {
    positive: DomainPole,
    negative: DomainPole,
    name: String,
}

impl DomainDuality {
    /// Pair two poles. Balance is checked by [`validate`](Self::validate).
    pub fn new(positive: DomainPole, negative: DomainPole, name: impl Into<String>) -> Self {
        Self {
            positive,
            negative,
            name: name.into(),
        }
    }

    /// Positive pole
    pub fn positive(&self) -> &DomainPole {
        &self.positive
    }

    /// Negative pole
    pub fn negative(&self) -> &DomainPole {
        &self.negative
    }

    /// Duality name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether both poles carry exactly equal weight
    pub fn is_balanced(&self) -> bool {
        verify_balance(self.positive.value, self.negative.value)
    }

    /// `(positive %, negative %)` of the total energy
    pub fn balance(&self) -> (f64, f64) {
        calculate_balance(self.positive.value, self.negative.value)
    }

    /// Sum of both poles
    pub fn total_energy(&self) -> f64 {
        self.positive.value + self.negative.value
    }

    /// Fail with a balance violation unless the poles are equal
    pub fn validate(&self) -> DomainResult<()> {
        if self.is_balanced() {
            return Ok(());
        }
        Err(DomainError::balance_violation(
            format!("Duality '{}'", self.name),
            &self.positive.name,
            &self.negative.name,
            self.balance(),
        ))
    }

    /// Export as a generic pair for ledger registration
    pub fn to_sub_parameter(&self) -> SubParameter {
        SubParameter::new(self.name.clone(), self.positive.value, self.negative.value)
    }

    /// Balance snapshot
    pub fn prove(&self) -> DualityProof {
        let (p, n) = self.balance();
        DualityProof {
            name: self.name.clone(),
            positive: PoleProof {
                name: self.positive.name.clone(),
                value: self.positive.value,
                percentage: p,
            },
            negative: PoleProof {
                name: self.negative.name.clone(),
                value: self.negative.value,
                percentage: n,
            },
            is_balanced: self.is_balanced(),
        }
    }
}

/// An attribute distributed 52/48 between structure and flexibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DomainAttribute {
    name: String,
    total_value: f64,
    description: Option<String>,
}

impl DomainAttribute {
    /// Create an attribute. Any total is accepted, including zero and negatives.
    pub fn new(name: impl Into<String>, total_value: f64) -> Self {
        Self {
            name: name.into(),
            total_value,
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total value
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Optional description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Structural component, `round(total * 0.52)`
    pub fn structure(&self) -> f64 {
        self.operational_ratio().structure
    }

    /// Flexible component, `total - structure`
    pub fn flexibility(&self) -> f64 {
        self.operational_ratio().flexibility
    }

    /// Both components
    pub fn operational_ratio(&self) -> OperationalSplit {
        OperationalSplit::of(self.total_value)
    }

    /// Prove the attribute operates at 52/48
    pub fn prove_operational(&self) -> AttributeProof {
        let split = self.operational_ratio();
        let ratio = if self.total_value == 0.0 {
            "0/0".to_string()
        } else {
            format!(
                "{:.0}/{:.0}",
                split.structure / self.total_value * 100.0,
                split.flexibility / self.total_value * 100.0
            )
        };

        AttributeProof {
            name: self.name.clone(),
            total: self.total_value,
            structure: split.structure,
            flexibility: split.flexibility,
            ratio,
            is_operational: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pole(name: &str, value: f64) -> DomainPole {
        DomainPole::new(name, value).unwrap()
    }

    #[test]
    fn pole_keeps_its_values() {
        let p = pole("positive", 100.0).with_description("A positive pole");
        assert_eq!(p.name(), "positive");
        assert_eq!(p.value(), 100.0);
        assert_eq!(p.description(), Some("A positive pole"));
    }

    #[test]
    fn pole_rejects_negative_and_non_finite() {
        let err = DomainPole::new("bad", -10.0).unwrap_err();
        assert!(err.to_string().contains("cannot be negative"));

        assert!(matches!(
            DomainPole::new("nan", f64::NAN),
            Err(DomainError::NonFiniteValue { .. })
        ));
        assert!(DomainPole::new("inf", f64::INFINITY).is_err());
        assert_eq!(pole("zero", 0.0).value(), 0.0);
    }

    #[test]
    fn balanced_duality() {
        let d = DomainDuality::new(pole("light", 50.0), pole("dark", 50.0), "light_dark");

        assert_eq!(d.positive().name(), "light");
        assert_eq!(d.negative().name(), "dark");
        assert_eq!(d.name(), "light_dark");
        assert!(d.is_balanced());
        assert_eq!(d.balance(), (50.0, 50.0));
        assert!(d.validate().is_ok());
    }

    #[test]
    fn unbalanced_duality_fails_validation() {
        let d = DomainDuality::new(pole("a", 60.0), pole("b", 40.0), "test");

        assert!(!d.is_balanced());
        let err = d.validate().unwrap_err();
        assert!(err.is_balance_violation());
        assert_eq!(
            err.to_string(),
            "Duality 'test' violates META 50/50: a=60.00% / b=40.00%"
        );
    }

    #[test]
    fn duality_energy_and_sub_parameter() {
        let d = DomainDuality::new(pole("a", 100.0), pole("b", 100.0), "test");
        assert_eq!(d.total_energy(), 200.0);

        let param = d.to_sub_parameter();
        assert_eq!(param.name(), "test");
        assert_eq!(param.values(), (100.0, 100.0));
    }

    #[test]
    fn duality_proof_snapshot() {
        let proof = DomainDuality::new(pole("matter", 100.0), pole("antimatter", 100.0), "md").prove();

        assert!(proof.is_balanced);
        assert_eq!(proof.positive.name, "matter");
        assert_eq!(proof.positive.percentage, 50.0);
        assert_eq!(proof.negative.value, 100.0);
    }

    #[test]
    fn attribute_splits_52_48() {
        let attr = DomainAttribute::new("energy", 100.0).with_description("Energy attribute");
        assert_eq!(attr.name(), "energy");
        assert_eq!(attr.total_value(), 100.0);
        assert_eq!(attr.description(), Some("Energy attribute"));
        assert_eq!(attr.structure(), 52.0);
        assert_eq!(attr.flexibility(), 48.0);

        let ratio = attr.operational_ratio();
        assert_eq!(ratio.structure, 52.0);
        assert_eq!(ratio.flexibility, 48.0);
    }

    #[test]
    fn attribute_proof() {
        let proof = DomainAttribute::new("energy", 1000.0).prove_operational();

        assert_eq!(proof.name, "energy");
        assert_eq!(proof.total, 1000.0);
        assert_eq!(proof.structure, 520.0);
        assert_eq!(proof.flexibility, 480.0);
        assert_eq!(proof.ratio, "52/48");
        assert!(proof.is_operational);
    }

    #[test]
    fn zero_attribute_has_no_ratio() {
        let proof = DomainAttribute::new("empty", 0.0).prove_operational();
        assert_eq!(proof.structure, 0.0);
        assert_eq!(proof.flexibility, 0.0);
        assert_eq!(proof.ratio, "0/0");
    }
}
