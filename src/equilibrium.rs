// Copyright 2025 Cowboy AI, LLC.

//! META 50/50 equilibrium ledger
//!
//! META level: 50/50, absolute balance. Every paired value in the system (a
//! duality's poles, a relationship's give/receive) must carry equal weight.
//!
//! [`MetaEquilibrium`] is a passive ledger of pairs that have already been
//! balance-validated. It is a cheap, cloneable handle: every clone refers to
//! the same ledger, so one instance can be injected into many domains and
//! audited afterwards.
//!
//! ```rust
//! use cim_equilibrium::{Domain, DomainType, MetaEquilibrium};
//!
//! let meta = MetaEquilibrium::new();
//! let mut a = Domain::with_equilibrium("A", DomainType::Fundamental, "", meta.clone());
//! let mut b = Domain::with_equilibrium("B", DomainType::Fundamental, "", meta.clone());
//!
//! a.set_duality("p1", 50.0, "n1", 50.0, None).unwrap();
//! b.set_duality("p2", 100.0, "n2", 100.0, None).unwrap();
//!
//! let params = meta.validated_parameters();
//! assert!(params.contains_key("A_duality"));
//! assert!(params.contains_key("B_duality"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EquilibriumPolicy;
use crate::errors::{DomainError, DomainResult};

/// Verify that two values hold the 50/50 balance exactly.
///
/// Magnitudes are compared, and the empty state (both zero) is balanced.
pub fn verify_balance(positive: f64, negative: f64) -> bool {
    positive.abs() == negative.abs()
}

/// Percentages of the total carried by each side; `(50.0, 50.0)` when empty.
pub fn calculate_balance(positive: f64, negative: f64) -> (f64, f64) {
    let total = positive.abs() + negative.abs();
    if total == 0.0 {
        return (50.0, 50.0);
    }
    (
        positive.abs() / total * 100.0,
        negative.abs() / total * 100.0,
    )
}

/// Verify balance allowing `tolerance` percentage points of deviation
pub fn verify_balance_within(positive: f64, negative: f64, tolerance: f64) -> bool {
    if tolerance == 0.0 {
        return verify_balance(positive, negative);
    }
    let (p, _) = calculate_balance(positive, negative);
    (p - 50.0).abs() <= tolerance
}

/// A named pair that has been validated against META 50/50
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubParameter {
    name: String,
    positive: f64,
    negative: f64,
}

impl SubParameter {
    /// Create a sub-parameter record
    pub fn new(name: impl Into<String>, positive: f64, negative: f64) -> Self {
        Self {
            name: name.into(),
            positive,
            negative,
        }
    }

    /// Name of the pair
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(positive, negative)` values
    pub fn values(&self) -> (f64, f64) {
        (self.positive, self.negative)
    }

    /// Balance ratio
    pub fn balance(&self) -> (f64, f64) {
        calculate_balance(self.positive, self.negative)
    }

    /// Whether the pair holds exact 50/50
    pub fn is_balanced(&self) -> bool {
        verify_balance(self.positive, self.negative)
    }

    /// Prove this sub-parameter maintains META 50/50
    pub fn prove_meta_meaning(&self) -> SubParameterProof {
        let balance = self.balance();
        let meta_valid = self.is_balanced();
        SubParameterProof {
            name: self.name.clone(),
            positive: self.positive,
            negative: self.negative,
            balance: format!("{:.2}/{:.2}", balance.0, balance.1),
            meta_valid,
            proof: if meta_valid {
                "Maintains META 50/50 equilibrium".to_string()
            } else {
                format!("Deviates from META 50/50: {:.2}/{:.2}", balance.0, balance.1)
            },
        }
    }
}

/// Proof record for a single sub-parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubParameterProof {
    /// Name of the pair
    pub name: String,
    /// Positive side
    pub positive: f64,
    /// Negative side
    pub negative: f64,
    /// Balance formatted as `pp.pp/nn.nn`
    pub balance: String,
    /// Whether the pair holds 50/50
    pub meta_valid: bool,
    /// Human readable verdict
    pub proof: String,
}

/// Audit of everything a ledger holds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquilibriumAudit {
    /// Number of registered pairs
    pub total_parameters: usize,
    /// Whether every registered pair holds exact 50/50
    pub all_balanced: bool,
    /// Proofs keyed by registration key, in registration order
    pub parameters: IndexMap<String, SubParameterProof>,
    /// Human readable verdict
    pub proof: String,
}

#[derive(Debug, Default)]
struct Ledger {
    policy: EquilibriumPolicy,
    parameters: IndexMap<String, SubParameter>,
}

/// Shared META 50/50 ledger.
///
/// Single-threaded by construction: the handle is `!Send`, so sharing it
/// across threads does not compile.
#[derive(Debug, Clone, Default)]
pub struct MetaEquilibrium {
    inner: Rc<RefCell<Ledger>>,
}

impl MetaEquilibrium {
    /// Create an empty ledger with the default (exact) policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger with a custom policy
    pub fn with_policy(policy: EquilibriumPolicy) -> DomainResult<Self> {
        policy.validate()?;
        Ok(Self {
            inner: Rc::new(RefCell::new(Ledger {
                policy,
                parameters: IndexMap::new(),
            })),
        })
    }

    /// The ledger's policy
    pub fn policy(&self) -> EquilibriumPolicy {
        self.inner.borrow().policy.clone()
    }

    /// Whether two handles refer to the same ledger
    pub fn is_shared_with(&self, other: &MetaEquilibrium) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Register a named pair, validating it against META 50/50 first.
    ///
    /// Re-registering a name replaces the earlier entry.
    pub fn register_parameter(
        &self,
        name: impl Into<String>,
        positive: f64,
        negative: f64,
    ) -> DomainResult<()> {
        let name = name.into();
        let parameter = SubParameter::new(name.clone(), positive, negative);
        self.register(name, parameter)
    }

    /// Register an already-built sub-parameter under `key`
    pub fn register(&self, key: impl Into<String>, parameter: SubParameter) -> DomainResult<()> {
        let key = key.into();
        let tolerance = self.inner.borrow().policy.balance_tolerance;
        let (positive, negative) = parameter.values();

        if !verify_balance_within(positive, negative, tolerance) {
            warn!(key = %key, positive, negative, "rejected unbalanced parameter");
            return Err(DomainError::BalanceViolation {
                subject: format!("Parameter '{key}'"),
                detail: {
                    let (p, n) = parameter.balance();
                    format!("got {p:.2}/{n:.2}")
                },
            });
        }

        debug!(key = %key, positive, negative, "registered parameter");
        self.inner.borrow_mut().parameters.insert(key, parameter);
        Ok(())
    }

    /// Snapshot of every registered pair, in registration order
    pub fn validated_parameters(&self) -> IndexMap<String, SubParameter> {
        self.inner.borrow().parameters.clone()
    }

    /// Look up one registered pair
    pub fn parameter(&self, key: &str) -> Option<SubParameter> {
        self.inner.borrow().parameters.get(key).cloned()
    }

    /// Whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().parameters.contains_key(key)
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.inner.borrow().parameters.len()
    }

    /// Whether nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().parameters.is_empty()
    }

    /// Check that a structure/flexibility pair sits at the policy's 52/48
    pub fn validate_operational_enables_meta(&self, structure: f64, flexibility: f64) -> bool {
        let total = structure + flexibility;
        if total == 0.0 {
            return false;
        }
        let policy = self.policy();
        let (expected_structure, expected_flexibility) = policy.operational_percentages();
        let actual_structure = structure / total * 100.0;
        let actual_flexibility = flexibility / total * 100.0;

        (actual_structure - expected_structure).abs() < policy.operational_tolerance
            && (actual_flexibility - expected_flexibility).abs() < policy.operational_tolerance
    }

    /// Audit every registered pair
    pub fn audit(&self) -> EquilibriumAudit {
        let ledger = self.inner.borrow();
        let parameters: IndexMap<String, SubParameterProof> = ledger
            .parameters
            .iter()
            .map(|(key, p)| (key.clone(), p.prove_meta_meaning()))
            .collect();
        let all_balanced = parameters.values().all(|p| p.meta_valid);

        EquilibriumAudit {
            total_parameters: parameters.len(),
            all_balanced,
            proof: if all_balanced {
                format!("All {} registered parameters maintain META 50/50", parameters.len())
            } else {
                "Registered parameters deviate from META 50/50".to_string()
            },
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(50.0, 50.0, true ; "equal halves")]
    #[test_case(100.0, 100.0, true ; "equal hundreds")]
    #[test_case(0.0, 0.0, true ; "empty state")]
    #[test_case(-5.0, 5.0, true ; "magnitudes compared")]
    #[test_case(60.0, 40.0, false ; "sixty forty")]
    #[test_case(f64::NAN, f64::NAN, false ; "nan never balances")]
    fn verify_balance_cases(p: f64, n: f64, expected: bool) {
        assert_eq!(verify_balance(p, n), expected);
    }

    #[test]
    fn calculate_balance_percentages() {
        assert_eq!(calculate_balance(50.0, 50.0), (50.0, 50.0));
        assert_eq!(calculate_balance(0.0, 0.0), (50.0, 50.0));
        assert_eq!(calculate_balance(60.0, 40.0), (60.0, 40.0));
        assert_eq!(calculate_balance(3.0, 1.0), (75.0, 25.0));
    }

    #[test]
    fn register_parameter_records_balanced_pairs() {
        let meta = MetaEquilibrium::new();
        assert!(meta.is_empty());

        meta.register_parameter("light_dark", 50.0, 50.0).unwrap();

        assert_eq!(meta.len(), 1);
        assert!(meta.contains("light_dark"));
        assert_eq!(meta.parameter("light_dark").unwrap().values(), (50.0, 50.0));
    }

    #[test]
    fn register_parameter_rejects_unbalanced_pairs() {
        let meta = MetaEquilibrium::new();
        let err = meta.register_parameter("bad", 60.0, 40.0).unwrap_err();

        assert!(err.is_balance_violation());
        assert!(err.to_string().contains("violates META 50/50"));
        assert!(meta.is_empty());
    }

    #[test]
    fn tolerant_policy_accepts_small_drift() {
        let policy = EquilibriumPolicy {
            balance_tolerance: 1.0,
            ..EquilibriumPolicy::default()
        };
        let meta = MetaEquilibrium::with_policy(policy).unwrap();

        meta.register_parameter("close", 50.5, 49.5).unwrap();
        assert!(meta.register_parameter("far", 60.0, 40.0).is_err());

        let audit = meta.audit();
        assert_eq!(audit.total_parameters, 1);
        assert!(!audit.all_balanced);
    }

    #[test]
    fn clones_share_one_ledger() {
        let meta = MetaEquilibrium::new();
        let other = meta.clone();
        other.register_parameter("x", 1.0, 1.0).unwrap();

        assert!(meta.contains("x"));
        assert!(meta.is_shared_with(&other));
        assert!(!meta.is_shared_with(&MetaEquilibrium::new()));
    }

    #[test]
    fn operational_check_follows_policy() {
        let meta = MetaEquilibrium::new();
        assert!(meta.validate_operational_enables_meta(52.0, 48.0));
        assert!(meta.validate_operational_enables_meta(520.0, 480.0));
        assert!(!meta.validate_operational_enables_meta(50.0, 50.0));
        assert!(!meta.validate_operational_enables_meta(0.0, 0.0));
    }

    #[test]
    fn sub_parameter_proof() {
        let param = SubParameter::new("test", 100.0, 100.0);
        let proof = param.prove_meta_meaning();

        assert_eq!(proof.name, "test");
        assert_eq!(proof.balance, "50.00/50.00");
        assert!(proof.meta_valid);
    }

    #[test]
    fn audit_reports_all_pairs_in_order() {
        let meta = MetaEquilibrium::new();
        meta.register_parameter("first", 1.0, 1.0).unwrap();
        meta.register_parameter("second", 2.0, 2.0).unwrap();

        let audit = meta.audit();
        assert!(audit.all_balanced);
        assert_eq!(audit.total_parameters, 2);
        let keys: Vec<_> = audit.parameters.keys().cloned().collect();
        assert_eq!(keys, vec!["first".to_string(), "second".to_string()]);
    }
}
