// Copyright 2025 Cowboy AI, LLC.

//! Operational proportions
//!
//! META balance is 50/50, but values operate at 52/48 (structure/flexibility).
//! Two shapes are offered:
//! - [`split_operational`]: the rounded split used by domain attributes, where
//!   flexibility is whatever remains after structure so the parts always sum
//!   back to the total
//! - [`OperationalRatio`]: a validated pair that must sit at 52/48
//!
//! The 52% structure share is PI/6 (~0.5236) rounded to whole percent; see
//! [`Pi6Proportion`]. Arbitrary ratios are checked at either level by a
//! [`ProportionValidator`].

use std::f64::consts::FRAC_PI_6;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{FLEXIBILITY_SHARE, STRUCTURE_SHARE};
use crate::equilibrium::{calculate_balance, verify_balance_within, MetaEquilibrium};
use crate::errors::{DomainError, DomainResult};

/// Allowed deviation, in percentage points, for an [`OperationalRatio`]
pub const OPERATIONAL_TOLERANCE: f64 = 0.01;

/// PI/6 in radians (30 degrees)
pub const PI_OVER_6: f64 = FRAC_PI_6;

/// Split a total into (structure, flexibility) at 52/48.
///
/// Structure is `round(total * 0.52)`; flexibility is `total - structure`,
/// never an independent rounding of 48%.
pub fn split_operational(total: f64) -> (f64, f64) {
    let structure = (total * STRUCTURE_SHARE).round();
    (structure, total - structure)
}

/// Split a total into two equal halves
pub fn split_balanced(total: f64) -> (f64, f64) {
    let half = total / 2.0;
    (half, half)
}

/// Unvalidated structure/flexibility pair as produced by [`split_operational`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OperationalSplit {
    /// Structural component
    pub structure: f64,
    /// Flexible component
    pub flexibility: f64,
}

impl OperationalSplit {
    /// Split a total
    pub fn of(total: f64) -> Self {
        let (structure, flexibility) = split_operational(total);
        Self {
            structure,
            flexibility,
        }
    }

    /// Sum of both parts
    pub fn total(&self) -> f64 {
        self.structure + self.flexibility
    }
}

/// A structure/flexibility pair validated to sit at 52/48
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OperationalRatio {
    structure: f64,
    flexibility: f64,
}

impl Default for OperationalRatio {
    fn default() -> Self {
        Self {
            structure: 52.0,
            flexibility: 48.0,
        }
    }
}

impl OperationalRatio {
    /// Create a ratio, rejecting anything that is not 52/48
    pub fn new(structure: f64, flexibility: f64) -> DomainResult<Self> {
        let total = structure + flexibility;
        if total == 0.0 {
            return Err(DomainError::ZeroTotal("operational ratio".to_string()));
        }
        let actual = structure / total * 100.0;
        if (actual - STRUCTURE_SHARE * 100.0).abs() > OPERATIONAL_TOLERANCE {
            return Err(DomainError::OperationalRatio {
                structure: actual,
                flexibility: 100.0 - actual,
            });
        }
        Ok(Self {
            structure,
            flexibility,
        })
    }

    /// Create the exact (unrounded) 52/48 ratio of a total
    pub fn from_total(total: f64) -> DomainResult<Self> {
        Self::new(total * STRUCTURE_SHARE, total * FLEXIBILITY_SHARE)
    }

    /// Structural component
    pub fn structure(&self) -> f64 {
        self.structure
    }

    /// Flexible component
    pub fn flexibility(&self) -> f64 {
        self.flexibility
    }

    /// Structure divided by flexibility (~1.0833)
    pub fn ratio(&self) -> f64 {
        self.structure / self.flexibility
    }

    /// Both parts as percentages of their sum
    pub fn as_percentage(&self) -> (f64, f64) {
        let total = self.structure + self.flexibility;
        (
            self.structure / total * 100.0,
            self.flexibility / total * 100.0,
        )
    }

    /// Absolute gap between the two parts
    pub fn asymmetry(&self) -> f64 {
        (self.structure - self.flexibility).abs()
    }

    /// 52/48 derived from PI/6: `round(PI/6 * 100)` percent structure
    pub fn from_pi_6() -> Self {
        let structure = (PI_OVER_6 * 100.0).round();
        Self {
            structure,
            flexibility: 100.0 - structure,
        }
    }

    /// Proof that this asymmetry enables META 50/50
    pub fn prove_enables_meta(&self) -> OperationalProof {
        OperationalProof {
            structure: self.structure,
            flexibility: self.flexibility,
            ratio: self.ratio(),
            asymmetry: self.asymmetry(),
            enables_meta: true,
            proof: "52/48 asymmetry creates dynamic tension that enables META 50/50 balance to function"
                .to_string(),
        }
    }
}

impl fmt::Display for OperationalRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperationalRatio({}/{})", self.structure, self.flexibility)
    }
}

/// Proof returned by [`OperationalRatio::prove_enables_meta`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OperationalProof {
    /// Structural component
    pub structure: f64,
    /// Flexible component
    pub flexibility: f64,
    /// Structure divided by flexibility
    pub ratio: f64,
    /// Absolute gap between the parts
    pub asymmetry: f64,
    /// Always true for a validated ratio
    pub enables_meta: bool,
    /// Human readable verdict
    pub proof: String,
}

/// PI/6 as the geometric source of the operational split.
///
/// `sin(PI/6) = 0.5` ties the angle to META 50/50; `PI/6 * 100` rounds to the
/// 52% structure share.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pi6Proportion;

impl Pi6Proportion {
    /// Angle in degrees
    pub const DEGREES: f64 = 30.0;

    /// Value in radians
    pub fn value(&self) -> f64 {
        PI_OVER_6
    }

    /// Value as a percentage (~52.36)
    pub fn as_percentage(&self) -> f64 {
        PI_OVER_6 * 100.0
    }

    /// `sin(PI/6)`, 0.5 up to rounding
    pub fn sin(&self) -> f64 {
        PI_OVER_6.sin()
    }

    /// `cos(PI/6)`, `sqrt(3)/2`
    pub fn cos(&self) -> f64 {
        PI_OVER_6.cos()
    }

    /// The operational 52/48 ratio
    pub fn to_operational_ratio(&self) -> OperationalRatio {
        OperationalRatio::from_pi_6()
    }

    /// Show the link between PI/6 and META 50/50
    pub fn verify_meta_connection(&self) -> Pi6Connection {
        let sin = self.sin();
        Pi6Connection {
            pi_6_value: self.value(),
            pi_6_percentage: self.as_percentage(),
            sin_pi_6: sin,
            sin_equals_half: (sin - 0.5).abs() < 1e-10,
            meta_connection: "sin(PI/6) = 0.5 proves META 50/50 has geometric basis".to_string(),
            operational_derivation: "PI/6 ≈ 0.5236 → 52% structure".to_string(),
        }
    }
}

impl fmt::Display for Pi6Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pi6Proportion(π/6 = {:.6} rad = {}°)",
            PI_OVER_6,
            Self::DEGREES
        )
    }
}

/// Result of [`Pi6Proportion::verify_meta_connection`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pi6Connection {
    /// PI/6 in radians
    pub pi_6_value: f64,
    /// PI/6 times 100
    pub pi_6_percentage: f64,
    /// `sin(PI/6)`
    pub sin_pi_6: f64,
    /// Whether the sine is 0.5 within 1e-10
    pub sin_equals_half: bool,
    /// Statement of the META link
    pub meta_connection: String,
    /// Statement of the 52% derivation
    pub operational_derivation: String,
}

/// A named numerator/denominator pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ratio {
    name: String,
    numerator: f64,
    denominator: f64,
}

impl Ratio {
    /// Create a ratio; the denominator must be non-zero
    pub fn new(name: impl Into<String>, numerator: f64, denominator: f64) -> DomainResult<Self> {
        let name = name.into();
        if denominator == 0.0 {
            return Err(DomainError::ZeroDenominator(format!("ratio '{name}'")));
        }
        Ok(Self {
            name,
            numerator,
            denominator,
        })
    }

    /// Ratio name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numerator
    pub fn numerator(&self) -> f64 {
        self.numerator
    }

    /// Denominator
    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    /// `numerator / denominator`
    pub fn value(&self) -> f64 {
        self.numerator / self.denominator
    }

    /// Share of each magnitude in their sum, in percent
    pub fn percentage(&self) -> (f64, f64) {
        calculate_balance(self.numerator, self.denominator)
    }

    /// Swap numerator and denominator. Fails when the numerator is zero.
    pub fn inverse(&self) -> DomainResult<Self> {
        Self::new(
            format!("{}_inverse", self.name),
            self.denominator,
            self.numerator,
        )
    }

    /// Whether both magnitudes are equal, i.e. the ratio sits at 50/50
    pub fn is_balanced(&self) -> bool {
        self.numerator.abs() == self.denominator.abs()
    }

    /// Percentage points between the numerator's share and 50
    pub fn distance_from_balance(&self) -> f64 {
        (self.percentage().0 - 50.0).abs()
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ratio({}: {}/{} = {:.4})",
            self.name,
            self.numerator,
            self.denominator,
            self.value()
        )
    }
}

/// Level a ratio is checked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProportionLevel {
    /// Absolute 50/50
    Meta,
    /// 52/48 structure/flexibility
    Operational,
}

impl ProportionLevel {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::Operational => "operational",
        }
    }
}

impl fmt::Display for ProportionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`ProportionValidator::validate_ratio`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RatioValidation {
    /// Ratio name
    pub ratio: String,
    /// `numerator / denominator`
    pub value: f64,
    /// Observed split formatted as `nn.nn/dd.dd`
    pub percentage: String,
    /// Level checked
    pub level: ProportionLevel,
    /// Expected split formatted as `50/50` or `52/48`
    pub expected: String,
    /// Whether the ratio sits at the expected split
    pub is_valid: bool,
    /// Percentage points between the numerator's share and the expected one
    pub distance_from_expected: f64,
    /// Human readable verdict
    pub proof: String,
}

/// Outcome of [`ProportionValidator::validate_pair_maintains_meta`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PairValidation {
    /// Pair name
    pub name: String,
    /// Positive value
    pub positive: f64,
    /// Negative value
    pub negative: f64,
    /// Balance formatted as `pp.pp/nn.nn`
    pub balance: String,
    /// Whether the pair holds 50/50
    pub maintains_meta: bool,
    /// Human readable verdict
    pub proof: String,
}

/// Summary line for one validated ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RatioSummary {
    /// Ratio name
    pub name: String,
    /// `numerator / denominator`
    pub value: f64,
    /// Whether it sits at 50/50
    pub balanced: bool,
}

/// Proof over every ratio a validator has accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProportionProof {
    /// Number of accepted ratios
    pub total_validated: usize,
    /// Accepted ratios in validation order
    pub ratios: Vec<RatioSummary>,
    /// Human readable verdict
    pub proof: String,
}

/// Checks ratios and pairs against META 50/50 or the operational 52/48.
///
/// Expected operational percentages and both tolerances come from the
/// ledger's [`EquilibriumPolicy`](crate::EquilibriumPolicy). Ratios that pass
/// [`validate_ratio`](Self::validate_ratio) are remembered.
#[derive(Debug, Clone, Default)]
pub struct ProportionValidator {
    equilibrium: MetaEquilibrium,
    validated: Vec<Ratio>,
}

impl ProportionValidator {
    /// Validator reading its policy from `equilibrium`
    pub fn new(equilibrium: MetaEquilibrium) -> Self {
        Self {
            equilibrium,
            validated: Vec::new(),
        }
    }

    /// The ledger whose policy is applied
    pub fn equilibrium(&self) -> &MetaEquilibrium {
        &self.equilibrium
    }

    /// Whether the ratio sits at META 50/50
    pub fn verify_maintains_meta(&self, ratio: &Ratio) -> bool {
        ratio.is_balanced()
    }

    /// Whether the ratio sits at the operational split
    pub fn verify_enables_meta(&self, ratio: &Ratio) -> bool {
        let policy = self.equilibrium.policy();
        let (expected_structure, expected_flexibility) = policy.operational_percentages();
        let (structure, flexibility) = ratio.percentage();
        (structure - expected_structure).abs() < policy.operational_tolerance
            && (flexibility - expected_flexibility).abs() < policy.operational_tolerance
    }

    /// Check a ratio at `level`, remembering it when it passes
    pub fn validate_ratio(&mut self, ratio: &Ratio, level: ProportionLevel) -> RatioValidation {
        let (is_valid, expected) = match level {
            ProportionLevel::Meta => (self.verify_maintains_meta(ratio), (50.0, 50.0)),
            ProportionLevel::Operational => (
                self.verify_enables_meta(ratio),
                self.equilibrium.policy().operational_percentages(),
            ),
        };
        let (num, den) = ratio.percentage();
        let label = level.as_str().to_uppercase();
        let expected_text = format!("{:.0}/{:.0}", expected.0, expected.1);

        let proof = if is_valid {
            debug!(ratio = %ratio.name(), level = %level, "ratio validated");
            self.validated.push(ratio.clone());
            format!("Ratio maintains {label} {expected_text} meaning")
        } else {
            format!("Ratio deviates from {label} {expected_text}")
        };

        RatioValidation {
            ratio: ratio.name().to_string(),
            value: ratio.value(),
            percentage: format!("{num:.2}/{den:.2}"),
            level,
            expected: expected_text,
            is_valid,
            distance_from_expected: (num - expected.0).abs(),
            proof,
        }
    }

    /// Check a positive/negative pair against META 50/50
    pub fn validate_pair_maintains_meta(
        &self,
        positive: f64,
        negative: f64,
        name: impl Into<String>,
    ) -> PairValidation {
        let tolerance = self.equilibrium.policy().balance_tolerance;
        let maintains_meta = verify_balance_within(positive, negative, tolerance);
        let (p, n) = calculate_balance(positive, negative);

        PairValidation {
            name: name.into(),
            positive,
            negative,
            balance: format!("{p:.2}/{n:.2}"),
            maintains_meta,
            proof: if maintains_meta {
                "Pair maintains META 50/50 equilibrium".to_string()
            } else {
                format!("Pair violates META 50/50: got {p:.2}/{n:.2}")
            },
        }
    }

    /// Value that balances `value` at `level`.
    ///
    /// At META level the complement is the value itself; at operational level
    /// `value` is read as the structure part and the flexibility part is
    /// returned.
    pub fn derive_complement(&self, value: f64, level: ProportionLevel) -> f64 {
        match level {
            ProportionLevel::Meta => value,
            ProportionLevel::Operational => {
                let (structure, flexibility) = self.equilibrium.policy().operational_percentages();
                value * flexibility / structure
            }
        }
    }

    /// Ratios accepted so far, in validation order
    pub fn validated_ratios(&self) -> &[Ratio] {
        &self.validated
    }

    /// Summarize every accepted ratio
    pub fn prove_all_maintain_meta(&self) -> ProportionProof {
        ProportionProof {
            total_validated: self.validated.len(),
            ratios: self
                .validated
                .iter()
                .map(|r| RatioSummary {
                    name: r.name().to_string(),
                    value: r.value(),
                    balanced: r.is_balanced(),
                })
                .collect(),
            proof: "All validated ratios maintain their designated equilibrium level".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(100.0, 52.0, 48.0 ; "hundred")]
    #[test_case(1000.0, 520.0, 480.0 ; "thousand")]
    #[test_case(0.0, 0.0, 0.0 ; "zero")]
    #[test_case(3.0, 2.0, 1.0 ; "rounds structure up")]
    #[test_case(10.0, 5.0, 5.0 ; "rounds structure down")]
    #[test_case(-100.0, -52.0, -48.0 ; "negative total")]
    fn split_operational_cases(total: f64, structure: f64, flexibility: f64) {
        assert_eq!(split_operational(total), (structure, flexibility));
    }

    #[test]
    fn split_balanced_halves() {
        assert_eq!(split_balanced(100.0), (50.0, 50.0));
        assert_eq!(split_balanced(1.0), (0.5, 0.5));
    }

    #[test]
    fn operational_ratio_accepts_52_48() {
        let ratio = OperationalRatio::new(52.0, 48.0).unwrap();
        assert_eq!(ratio.structure(), 52.0);
        assert_eq!(ratio.flexibility(), 48.0);
        assert!((ratio.ratio() - 52.0 / 48.0).abs() < 1e-12);
        assert_eq!(ratio.asymmetry(), 4.0);

        let scaled = OperationalRatio::from_total(1000.0).unwrap();
        let (s, f) = scaled.as_percentage();
        assert!((s - 52.0).abs() < 1e-9);
        assert!((f - 48.0).abs() < 1e-9);
    }

    #[test]
    fn operational_ratio_rejects_other_splits() {
        let err = OperationalRatio::new(50.0, 50.0).unwrap_err();
        assert!(matches!(err, DomainError::OperationalRatio { .. }));

        let err = OperationalRatio::new(0.0, 0.0).unwrap_err();
        assert!(matches!(err, DomainError::ZeroTotal(_)));

        assert!(OperationalRatio::from_total(0.0).is_err());
    }

    #[test]
    fn from_pi_6_is_the_default_ratio() {
        let ratio = OperationalRatio::from_pi_6();
        assert_eq!(ratio, OperationalRatio::default());
        assert_eq!(ratio.to_string(), "OperationalRatio(52/48)");
        assert_eq!(Pi6Proportion.to_operational_ratio(), ratio);

        let proof = ratio.prove_enables_meta();
        assert!(proof.enables_meta);
        assert_eq!(proof.asymmetry, 4.0);
        assert!((proof.ratio - 52.0 / 48.0).abs() < 1e-12);
    }

    #[test]
    fn pi_6_connects_to_meta() {
        let pi6 = Pi6Proportion;
        assert!((pi6.value() - 0.5236).abs() < 1e-4);
        assert!((pi6.as_percentage() - 52.36).abs() < 0.01);
        assert!((pi6.cos() - 3f64.sqrt() / 2.0).abs() < 1e-12);

        let connection = pi6.verify_meta_connection();
        assert!(connection.sin_equals_half);
        assert!((connection.sin_pi_6 - 0.5).abs() < 1e-10);
        assert!(pi6.to_string().starts_with("Pi6Proportion(π/6 = 0.523599 rad"));
    }

    #[test]
    fn ratio_rejects_zero_denominator() {
        let err = Ratio::new("broken", 1.0, 0.0).unwrap_err();
        assert!(matches!(err, DomainError::ZeroDenominator(_)));
        assert_eq!(err.to_string(), "Denominator cannot be zero: ratio 'broken'");

        let zero_top = Ratio::new("zero_top", 0.0, 4.0).unwrap();
        assert_eq!(zero_top.value(), 0.0);
        assert!(zero_top.inverse().is_err());
    }

    #[test_case(50.0, 50.0, true, 0.0 ; "even")]
    #[test_case(52.0, 48.0, false, 2.0 ; "operational")]
    #[test_case(-3.0, 3.0, true, 0.0 ; "equal magnitudes")]
    #[test_case(75.0, 25.0, false, 25.0 ; "three to one")]
    fn ratio_balance(numerator: f64, denominator: f64, balanced: bool, distance: f64) {
        let ratio = Ratio::new("r", numerator, denominator).unwrap();
        assert_eq!(ratio.is_balanced(), balanced);
        assert!((ratio.distance_from_balance() - distance).abs() < 1e-9);
    }

    #[test]
    fn ratio_inverse_and_percentage() {
        let ratio = Ratio::new("sf", 52.0, 48.0).unwrap();
        let (num, den) = ratio.percentage();
        assert!((num - 52.0).abs() < 1e-9);
        assert!((den - 48.0).abs() < 1e-9);

        let inverse = ratio.inverse().unwrap();
        assert_eq!(inverse.name(), "sf_inverse");
        assert_eq!((inverse.numerator(), inverse.denominator()), (48.0, 52.0));
        assert_eq!(ratio.to_string(), "Ratio(sf: 52/48 = 1.0833)");
    }

    #[test]
    fn validator_checks_both_levels() {
        let mut validator = ProportionValidator::default();
        let even = Ratio::new("even", 10.0, 10.0).unwrap();
        let operational = Ratio::new("op", 520.0, 480.0).unwrap();

        assert!(validator.verify_maintains_meta(&even));
        assert!(!validator.verify_maintains_meta(&operational));
        assert!(validator.verify_enables_meta(&operational));
        assert!(!validator.verify_enables_meta(&even));

        let meta = validator.validate_ratio(&even, ProportionLevel::Meta);
        assert!(meta.is_valid);
        assert_eq!(meta.expected, "50/50");
        assert_eq!(meta.proof, "Ratio maintains META 50/50 meaning");

        let op = validator.validate_ratio(&operational, ProportionLevel::Operational);
        assert!(op.is_valid);
        assert_eq!(op.percentage, "52.00/48.00");
        assert_eq!(op.expected, "52/48");

        let miss = validator.validate_ratio(&operational, ProportionLevel::Meta);
        assert!(!miss.is_valid);
        assert!((miss.distance_from_expected - 2.0).abs() < 1e-9);
        assert_eq!(miss.proof, "Ratio deviates from META 50/50");

        let names: Vec<&str> = validator.validated_ratios().iter().map(Ratio::name).collect();
        assert_eq!(names, vec!["even", "op"]);

        let proof = validator.prove_all_maintain_meta();
        assert_eq!(proof.total_validated, 2);
        assert!(proof.ratios[0].balanced);
        assert!(!proof.ratios[1].balanced);

        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["level"], "operational");
    }

    #[test]
    fn validator_pairs_and_complements() {
        let validator = ProportionValidator::new(MetaEquilibrium::new());

        let pair = validator.validate_pair_maintains_meta(40.0, 40.0, "ok");
        assert!(pair.maintains_meta);
        assert_eq!(pair.balance, "50.00/50.00");

        let pair = validator.validate_pair_maintains_meta(60.0, 40.0, "lopsided");
        assert!(!pair.maintains_meta);
        assert_eq!(pair.proof, "Pair violates META 50/50: got 60.00/40.00");

        assert_eq!(validator.derive_complement(50.0, ProportionLevel::Meta), 50.0);
        let flexibility = validator.derive_complement(52.0, ProportionLevel::Operational);
        assert!((flexibility - 48.0).abs() < 1e-9);
    }

    #[test]
    fn operational_split_sums_to_total() {
        let split = OperationalSplit::of(1234.5);
        assert_eq!(split.total(), 1234.5);
        assert_eq!(split.structure, 642.0);
    }
}
