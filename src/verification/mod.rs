// Copyright 2025 Cowboy AI, LLC.

//! Validation and verification
//!
//! Validators score an input and list its issues without failing. The
//! [`Verifier`] runs named rules against claims and keeps every result, and a
//! [`VerificationChain`] runs rules in sequence until one fails.

pub mod validators;
pub mod verifier;

pub use validators::{
    BalanceSource, BalanceValidator, CompositeValidator, MetaEquilibriumValidator,
    ProportionRatioValidator, RangeValidator, ValidationIssue, ValidationReport,
    ValidationSeverity, Validator,
};
pub use verifier::{
    ChainSummary, ConfidenceLevel, RuleOutcome, VerificationChain, VerificationClaim,
    VerificationInput, VerificationResult, VerificationRule, VerificationStats, VerificationStatus,
    VerificationType, Verifier, VerifierProof, VerifierValidation, BALANCE_RULE,
    COMPLETENESS_RULE, PROPORTION_RULE,
};
