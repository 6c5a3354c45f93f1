// Copyright 2025 Cowboy AI, LLC.

//! Claims and rule-based verification
//!
//! A [`Verifier`] holds named rules, the claims submitted to it and the result
//! of every run. Each result carries a verified/falsified score pair, so the
//! verifier can report whether its own aggregate sits at 50/50.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::Domain;
use crate::equilibrium::{calculate_balance, verify_balance, verify_balance_within, MetaEquilibrium};
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::{ClaimId, DomainId, VerificationId};

/// Rule checking a [`VerificationInput::Balance`] pair
pub const BALANCE_RULE: &str = "meta_balance";
/// Rule checking a [`VerificationInput::Proportion`]
pub const PROPORTION_RULE: &str = "proportion_check";
/// Rule checking a [`VerificationInput::Completeness`] set
pub const COMPLETENESS_RULE: &str = "completeness_check";

/// Outcome of a verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// The rule passed
    Verified,
    /// The rule failed, or no rule could run
    Failed,
}

/// What a claim or rule is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationType {
    /// META 50/50 balance
    Balance,
    /// Ratio against an expected value
    Proportion,
    /// Internal consistency
    Consistency,
    /// Required items present
    Completeness,
    /// Data integrity
    Integrity,
    /// Rule compliance
    Compliance,
}

/// Confidence derived from the verified score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Below 25
    None,
    /// 25 to 50
    Low,
    /// 50 to 75
    Medium,
    /// 75 to 90
    High,
    /// 90 and above
    Absolute,
}

impl ConfidenceLevel {
    /// Bucket a verified score
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::Absolute,
            s if s >= 75.0 => Self::High,
            s if s >= 50.0 => Self::Medium,
            s if s >= 25.0 => Self::Low,
            _ => Self::None,
        }
    }
}

/// Data handed to a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerificationInput {
    /// A positive/negative pair
    Balance {
        /// Positive side
        positive: f64,
        /// Negative side
        negative: f64,
    },
    /// An observed ratio and the value it should have
    Proportion {
        /// Observed ratio
        ratio: f64,
        /// Expected ratio
        expected: f64,
        /// Accepted absolute deviation
        tolerance: f64,
    },
    /// Items that must be present, and those that are
    Completeness {
        /// Required item names
        required: Vec<String>,
        /// Present item names
        present: Vec<String>,
    },
}

/// What a rule concluded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleOutcome {
    /// Whether the rule passed
    pub passed: bool,
    /// Weight for the claim
    pub score_for: f64,
    /// Weight against the claim
    pub score_against: f64,
}

impl RuleOutcome {
    fn pass() -> Self {
        Self {
            passed: true,
            score_for: 100.0,
            score_against: 0.0,
        }
    }

    fn fail(score_for: f64, score_against: f64) -> Self {
        Self {
            passed: false,
            score_for,
            score_against,
        }
    }

    // Input of the wrong kind for the rule.
    fn mismatched() -> Self {
        Self::fail(0.0, 100.0)
    }
}

/// A named check over a [`VerificationInput`]
pub struct VerificationRule {
    name: String,
    verification_type: VerificationType,
    description: String,
    check: Box<dyn Fn(&VerificationInput) -> RuleOutcome>,
}

impl VerificationRule {
    /// Create a rule
    pub fn new(
        name: impl Into<String>,
        verification_type: VerificationType,
        description: impl Into<String>,
        check: impl Fn(&VerificationInput) -> RuleOutcome + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            verification_type,
            description: description.into(),
            check: Box::new(check),
        }
    }

    /// Rule name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of claim this rule verifies
    pub fn verification_type(&self) -> VerificationType {
        self.verification_type
    }

    /// Description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the rule
    pub fn verify(&self, input: &VerificationInput) -> RuleOutcome {
        (self.check)(input)
    }
}

impl fmt::Debug for VerificationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationRule")
            .field("name", &self.name)
            .field("verification_type", &self.verification_type)
            .field("description", &self.description)
            .finish()
    }
}

fn balance_rule(tolerance: f64) -> VerificationRule {
    VerificationRule::new(
        BALANCE_RULE,
        VerificationType::Balance,
        "Verifies META 50/50 balance",
        move |input| match *input {
            VerificationInput::Balance { positive, negative } => {
                if verify_balance_within(positive, negative, tolerance) {
                    return RuleOutcome::pass();
                }
                let deviation = (calculate_balance(positive, negative).0 - 50.0).abs();
                RuleOutcome::fail(100.0 - deviation * 2.0, deviation * 2.0)
            }
            _ => RuleOutcome::mismatched(),
        },
    )
}

fn proportion_rule() -> VerificationRule {
    VerificationRule::new(
        PROPORTION_RULE,
        VerificationType::Proportion,
        "Verifies ratio proportions",
        |input| match *input {
            VerificationInput::Proportion {
                ratio,
                expected,
                tolerance,
            } => {
                let gap = (ratio - expected).abs();
                if gap <= tolerance {
                    return RuleOutcome::pass();
                }
                let deviation = if expected == 0.0 {
                    100.0
                } else {
                    gap / expected.abs() * 100.0
                };
                RuleOutcome::fail((100.0 - deviation).max(0.0), deviation.min(100.0))
            }
            _ => RuleOutcome::mismatched(),
        },
    )
}

fn completeness_rule() -> VerificationRule {
    VerificationRule::new(
        COMPLETENESS_RULE,
        VerificationType::Completeness,
        "Verifies data completeness",
        |input| match input {
            VerificationInput::Completeness { required, present } => {
                let required: BTreeSet<&str> = required.iter().map(String::as_str).collect();
                let present: BTreeSet<&str> = present.iter().map(String::as_str).collect();
                let found = required.intersection(&present).count();
                let completeness = if required.is_empty() {
                    100.0
                } else {
                    found as f64 / required.len() as f64 * 100.0
                };
                RuleOutcome {
                    passed: found == required.len(),
                    score_for: completeness,
                    score_against: 100.0 - completeness,
                }
            }
            _ => RuleOutcome::mismatched(),
        },
    )
}

/// A statement with evidence for and against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationClaim {
    id: ClaimId,
    subject_id: Option<DomainId>,
    claim_type: VerificationType,
    statement: String,
    evidence_for: f64,
    evidence_against: f64,
    timestamp: DateTime<Utc>,
}

fn check_evidence(side: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::InvalidEvidence {
            side: side.to_string(),
            value,
        });
    }
    Ok(())
}

impl VerificationClaim {
    /// Claim with no evidence yet
    pub fn new(statement: impl Into<String>, claim_type: VerificationType) -> Self {
        Self {
            id: ClaimId::new(),
            subject_id: None,
            claim_type,
            statement: statement.into(),
            evidence_for: 0.0,
            evidence_against: 0.0,
            timestamp: Utc::now(),
        }
    }

    /// Attach the domain the claim is about
    pub fn with_subject(mut self, subject: DomainId) -> Self {
        self.subject_id = Some(subject);
        self
    }

    /// Claim id
    pub fn id(&self) -> ClaimId {
        self.id
    }

    /// Domain the claim is about
    pub fn subject_id(&self) -> Option<DomainId> {
        self.subject_id
    }

    /// Kind of claim
    pub fn claim_type(&self) -> VerificationType {
        self.claim_type
    }

    /// The statement
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Evidence supporting the claim
    pub fn evidence_for(&self) -> f64 {
        self.evidence_for
    }

    /// Evidence opposing the claim
    pub fn evidence_against(&self) -> f64 {
        self.evidence_against
    }

    /// When the claim was made
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Add evidence; both amounts must be finite and non-negative
    pub fn add_evidence(&mut self, support: f64, opposition: f64) -> DomainResult<()> {
        check_evidence("support", support)?;
        check_evidence("opposition", opposition)?;
        self.evidence_for += support;
        self.evidence_against += opposition;
        Ok(())
    }

    /// Whether evidence for and against is equal
    pub fn is_balanced(&self) -> bool {
        verify_balance(self.evidence_for, self.evidence_against)
    }

    /// Evidence split in percent
    pub fn balance(&self) -> (f64, f64) {
        calculate_balance(self.evidence_for, self.evidence_against)
    }

    /// `for + against`
    pub fn total_evidence(&self) -> f64 {
        self.evidence_for + self.evidence_against
    }

    /// `for - against`
    pub fn net_evidence(&self) -> f64 {
        self.evidence_for - self.evidence_against
    }
}

/// Result of one verification run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Result id
    pub id: VerificationId,
    /// Claim verified
    pub claim_id: ClaimId,
    /// Outcome
    pub status: VerificationStatus,
    /// Kind of verification performed
    #[serde(rename = "type")]
    pub verification_type: VerificationType,
    /// Confidence from the verified score
    pub confidence: ConfidenceLevel,
    /// Weight for the claim
    pub score_verified: f64,
    /// Weight against the claim
    pub score_falsified: f64,
    /// Rule that ran, if any
    pub rule: Option<String>,
    /// When the run finished
    pub timestamp: DateTime<Utc>,
    /// Why no rule could run
    pub errors: Vec<String>,
}

impl VerificationResult {
    fn failed(
        claim_id: ClaimId,
        verification_type: VerificationType,
        error: impl Into<String>,
    ) -> Self {
        Self {
            id: VerificationId::new(),
            claim_id,
            status: VerificationStatus::Failed,
            verification_type,
            confidence: ConfidenceLevel::None,
            score_verified: 0.0,
            score_falsified: 0.0,
            rule: None,
            timestamp: Utc::now(),
            errors: vec![error.into()],
        }
    }

    /// Whether both scores are equal
    pub fn is_balanced(&self) -> bool {
        verify_balance(self.score_verified, self.score_falsified)
    }

    /// Score split in percent
    pub fn balance(&self) -> (f64, f64) {
        calculate_balance(self.score_verified, self.score_falsified)
    }

    /// `verified + falsified`
    pub fn total_score(&self) -> f64 {
        self.score_verified + self.score_falsified
    }
}

/// Counts over every recorded result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationStats {
    /// Recorded results
    pub total: usize,
    /// Verified results
    pub verified: usize,
    /// Failed results
    pub failed: usize,
    /// Verified share in percent; 0 when empty
    pub rate: f64,
}

/// Snapshot of a verifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifierValidation {
    /// Claims held
    pub claims: usize,
    /// Results recorded
    pub results: usize,
    /// Rules registered
    pub rules: usize,
    /// Result counts
    pub statistics: VerificationStats,
    /// Sum of verified vs. falsified scores, as `vv.vv/ff.ff`
    pub aggregate_balance: String,
    /// Whether both sums are equal
    pub system_balanced: bool,
}

/// Verifier snapshot with a verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifierProof {
    /// Snapshot
    #[serde(flatten)]
    pub validation: VerifierValidation,
    /// Human readable verdict
    pub proof: String,
}

/// Rule registry plus the claims and results it has seen
#[derive(Debug)]
pub struct Verifier {
    equilibrium: MetaEquilibrium,
    rules: IndexMap<String, VerificationRule>,
    claims: IndexMap<ClaimId, VerificationClaim>,
    results: IndexMap<VerificationId, VerificationResult>,
    history: Vec<VerificationResult>,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(MetaEquilibrium::new())
    }
}

impl Verifier {
    /// Verifier with the balance, proportion and completeness rules.
    ///
    /// The balance rule allows the ledger policy's `balance_tolerance`.
    pub fn new(equilibrium: MetaEquilibrium) -> Self {
        let tolerance = equilibrium.policy().balance_tolerance;
        let mut verifier = Self {
            equilibrium,
            rules: IndexMap::new(),
            claims: IndexMap::new(),
            results: IndexMap::new(),
            history: Vec::new(),
        };
        verifier.register_rule(balance_rule(tolerance));
        verifier.register_rule(proportion_rule());
        verifier.register_rule(completeness_rule());
        verifier
    }

    /// The ledger whose policy the balance rule follows
    pub fn equilibrium(&self) -> &MetaEquilibrium {
        &self.equilibrium
    }

    /// Add a rule, replacing one with the same name
    pub fn register_rule(&mut self, rule: VerificationRule) {
        debug!(rule = %rule.name(), "verification rule registered");
        self.rules.insert(rule.name().to_string(), rule);
    }

    /// Look up a rule
    pub fn rule(&self, name: &str) -> Option<&VerificationRule> {
        self.rules.get(name)
    }

    /// Registered rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Claims held
    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    /// Results recorded
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Store a claim built by the caller
    pub fn submit_claim(&mut self, claim: VerificationClaim) -> ClaimId {
        let id = claim.id();
        self.claims.insert(id, claim);
        id
    }

    /// Create and store a claim with no evidence
    pub fn create_claim(
        &mut self,
        statement: impl Into<String>,
        claim_type: VerificationType,
    ) -> ClaimId {
        self.submit_claim(VerificationClaim::new(statement, claim_type))
    }

    /// Look up a claim
    pub fn claim(&self, id: ClaimId) -> Option<&VerificationClaim> {
        self.claims.get(&id)
    }

    /// Mutable access to a claim, e.g. to add evidence
    pub fn claim_mut(&mut self, id: ClaimId) -> Option<&mut VerificationClaim> {
        self.claims.get_mut(&id)
    }

    /// Verify a claim with the named rule, or with the first rule matching
    /// the claim's type.
    ///
    /// An unknown claim or a missing rule yields a failed result that is kept
    /// in the history but not counted among the results.
    pub fn verify_claim(
        &mut self,
        claim_id: ClaimId,
        input: &VerificationInput,
        rule_name: Option<&str>,
    ) -> VerificationResult {
        let Some(claim) = self.claims.get(&claim_id) else {
            warn!(claim = %claim_id, "verification of unknown claim");
            let result = VerificationResult::failed(
                claim_id,
                VerificationType::Balance,
                DomainError::NotFound(format!("claim {claim_id}")).to_string(),
            );
            self.history.push(result.clone());
            return result;
        };

        let rule = match rule_name {
            Some(name) => self.rules.get(name),
            None => self
                .rules
                .values()
                .find(|r| r.verification_type() == claim.claim_type()),
        };
        let Some(rule) = rule else {
            warn!(claim = %claim_id, rule = ?rule_name, "no matching verification rule");
            let result = VerificationResult::failed(
                claim_id,
                claim.claim_type(),
                "No matching verification rule found",
            );
            self.history.push(result.clone());
            return result;
        };

        let outcome = rule.verify(input);
        let result = VerificationResult {
            id: VerificationId::new(),
            claim_id,
            status: if outcome.passed {
                VerificationStatus::Verified
            } else {
                VerificationStatus::Failed
            },
            verification_type: rule.verification_type(),
            confidence: ConfidenceLevel::from_score(outcome.score_for),
            score_verified: outcome.score_for,
            score_falsified: outcome.score_against,
            rule: Some(rule.name().to_string()),
            timestamp: Utc::now(),
            errors: Vec::new(),
        };
        info!(
            claim = %claim_id,
            rule = %rule.name(),
            status = ?result.status,
            score = result.score_verified,
            "claim verified"
        );
        self.record(result)
    }

    fn record(&mut self, result: VerificationResult) -> VerificationResult {
        self.results.insert(result.id, result.clone());
        self.history.push(result.clone());
        result
    }

    /// Claim and verify that a pair is balanced
    pub fn verify_balance(&mut self, positive: f64, negative: f64) -> VerificationResult {
        let claim = self.create_claim(
            format!("Balance check: {positive}/{negative}"),
            VerificationType::Balance,
        );
        self.verify_claim(
            claim,
            &VerificationInput::Balance { positive, negative },
            Some(BALANCE_RULE),
        )
    }

    /// Claim and verify that `actual` is within `tolerance` of `expected`
    pub fn verify_proportion(
        &mut self,
        actual: f64,
        expected: f64,
        tolerance: f64,
    ) -> VerificationResult {
        let claim = self.create_claim(
            format!("Proportion check: {actual} vs {expected}"),
            VerificationType::Proportion,
        );
        self.verify_claim(
            claim,
            &VerificationInput::Proportion {
                ratio: actual,
                expected,
                tolerance,
            },
            Some(PROPORTION_RULE),
        )
    }

    /// Claim and verify that a domain's duality is balanced.
    ///
    /// A domain without a duality fails and the failure is recorded.
    pub fn verify_domain(&mut self, domain: &Domain) -> VerificationResult {
        let claim = VerificationClaim::new(
            format!("Domain '{}' maintains META 50/50", domain.name()),
            VerificationType::Balance,
        )
        .with_subject(domain.id());
        let claim = self.submit_claim(claim);

        match domain.duality() {
            Some(duality) => self.verify_claim(
                claim,
                &VerificationInput::Balance {
                    positive: duality.positive().value(),
                    negative: duality.negative().value(),
                },
                Some(BALANCE_RULE),
            ),
            None => {
                let error = DomainError::NoDuality {
                    domain: domain.name().to_string(),
                };
                let mut result =
                    VerificationResult::failed(claim, VerificationType::Balance, error.to_string());
                result.score_falsified = 100.0;
                self.record(result)
            }
        }
    }

    /// Verify several claims with one rule
    pub fn batch_verify(
        &mut self,
        items: &[(ClaimId, VerificationInput)],
        rule_name: &str,
    ) -> Vec<VerificationResult> {
        items
            .iter()
            .map(|(claim, input)| self.verify_claim(*claim, input, Some(rule_name)))
            .collect()
    }

    /// Recorded results with `status`
    pub fn results_by_status(&self, status: VerificationStatus) -> Vec<&VerificationResult> {
        self.results.values().filter(|r| r.status == status).collect()
    }

    /// Every run, recorded or not, oldest first
    pub fn history(&self) -> &[VerificationResult] {
        &self.history
    }

    /// Counts over the recorded results
    pub fn stats(&self) -> VerificationStats {
        let total = self.results.len();
        let verified = self.results_by_status(VerificationStatus::Verified).len();
        VerificationStats {
            total,
            verified,
            failed: total - verified,
            rate: if total == 0 {
                0.0
            } else {
                verified as f64 / total as f64 * 100.0
            },
        }
    }

    /// Snapshot of claims, rules and the aggregate score balance
    pub fn validate_all(&self) -> VerifierValidation {
        let verified: f64 = self.results.values().map(|r| r.score_verified).sum();
        let falsified: f64 = self.results.values().map(|r| r.score_falsified).sum();
        let (v, f) = calculate_balance(verified, falsified);

        VerifierValidation {
            claims: self.claims.len(),
            results: self.results.len(),
            rules: self.rules.len(),
            statistics: self.stats(),
            aggregate_balance: format!("{v:.2}/{f:.2}"),
            system_balanced: verify_balance(verified, falsified),
        }
    }

    /// Snapshot with a verdict on the aggregate balance
    pub fn prove_meta_meaning(&self) -> VerifierProof {
        let validation = self.validate_all();
        VerifierProof {
            proof: if validation.system_balanced {
                "Verification system maintains META 50/50 equilibrium".to_string()
            } else {
                "Verification system aggregate is not balanced".to_string()
            },
            validation,
        }
    }
}

struct ChainStep {
    name: String,
    rule: String,
    transform: Box<dyn Fn(&VerificationInput) -> DomainResult<VerificationInput>>,
}

/// Summary of a chain run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSummary {
    /// Chain name
    pub chain: String,
    /// Steps defined
    pub total_steps: usize,
    /// Steps run
    pub executed: usize,
    /// Steps verified
    pub passed: usize,
    /// Steps failed
    pub failed: usize,
    /// Every step ran and passed
    pub complete: bool,
}

/// Ordered verification steps; the first failure stops the chain.
///
/// Each step transforms the previous step's input and verifies the result
/// with its rule.
pub struct VerificationChain {
    name: String,
    steps: Vec<ChainStep>,
    results: Vec<VerificationResult>,
}

impl VerificationChain {
    /// Empty chain
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Chain name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a step
    pub fn add_step(
        &mut self,
        name: impl Into<String>,
        rule: impl Into<String>,
        transform: impl Fn(&VerificationInput) -> DomainResult<VerificationInput> + 'static,
    ) {
        self.steps.push(ChainStep {
            name: name.into(),
            rule: rule.into(),
            transform: Box::new(transform),
        });
    }

    /// Steps defined
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Results of the last run
    pub fn results(&self) -> &[VerificationResult] {
        &self.results
    }

    /// Run every step against `verifier`, returning whether all passed
    pub fn execute(&mut self, verifier: &mut Verifier, initial: VerificationInput) -> bool {
        self.results.clear();
        let mut current = initial;

        for step in &self.steps {
            let input = match (step.transform)(&current) {
                Ok(input) => input,
                Err(err) => {
                    warn!(chain = %self.name, step = %step.name, error = %err, "chain transform failed");
                    self.results.push(VerificationResult::failed(
                        ClaimId::new(),
                        VerificationType::Compliance,
                        format!("Transform error in {}: {err}", step.name),
                    ));
                    return false;
                }
            };

            let claim = verifier.create_claim(
                format!("Chain step: {}", step.name),
                VerificationType::Compliance,
            );
            let result = verifier.verify_claim(claim, &input, Some(&step.rule));
            let passed = result.status == VerificationStatus::Verified;
            self.results.push(result);
            if !passed {
                return false;
            }
            current = input;
        }
        true
    }

    /// Counts for the last run
    pub fn summary(&self) -> ChainSummary {
        let passed = self
            .results
            .iter()
            .filter(|r| r.status == VerificationStatus::Verified)
            .count();
        let failed = self.results.len() - passed;

        ChainSummary {
            chain: self.name.clone(),
            total_steps: self.steps.len(),
            executed: self.results.len(),
            passed,
            failed,
            complete: self.results.len() == self.steps.len() && failed == 0,
        }
    }
}

impl fmt::Debug for VerificationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<&str> = self.steps.iter().map(|s| s.name.as_str()).collect();
        f.debug_struct("VerificationChain")
            .field("name", &self.name)
            .field("steps", &steps)
            .field("results", &self.results.len())
            .finish()
    }
}
