// Copyright 2025 Cowboy AI, LLC.

//! Validators producing scored reports
//!
//! A [`Validator`] inspects one kind of input and returns a
//! [`ValidationReport`]: the issues found, a score from 0 to 100, and whether
//! any issue is blocking (`Error` or `Critical`). Validators never fail; a
//! bad input is an issue in the report.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Domain, DomainDuality, DomainRelationship};
use crate::equilibrium::{calculate_balance, verify_balance, SubParameter};
use crate::proportions::Ratio;

/// Severity of a validation issue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    /// Informational
    Info,
    /// Should be addressed, does not invalidate
    Warning,
    /// Invalidates the report
    Error,
    /// Invalidates the report; the input is unusable
    Critical,
}

impl ValidationSeverity {
    /// `Error` and `Critical` invalidate a report
    pub fn is_blocking(&self) -> bool {
        *self >= Self::Error
    }
}

/// One problem found by a validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Stable machine-readable code, e.g. `UNBALANCED`
    pub code: String,
    /// Human readable message
    pub message: String,
    /// How serious the issue is
    pub severity: ValidationSeverity,
    /// Input field the issue refers to
    pub field: Option<String>,
    /// Offending value, rendered as text
    pub value: Option<String>,
}

impl ValidationIssue {
    /// Create an issue with no field or value
    pub fn new(code: &str, message: impl Into<String>, severity: ValidationSeverity) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            severity,
            field: None,
            value: None,
        }
    }

    /// Attach the input field
    pub fn on_field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }

    /// Attach the offending value
    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.value = Some(value.to_string());
        self
    }
}

/// Outcome of one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no issue is blocking
    pub valid: bool,
    /// Every issue found, in discovery order
    pub issues: Vec<ValidationIssue>,
    /// Score in `[0, 100]`
    pub score: f64,
    /// When the report was produced
    pub timestamp: DateTime<Utc>,
}

impl ValidationReport {
    /// Build a report; validity follows from the issues and the score is
    /// clamped to `[0, 100]`
    pub fn from_issues(issues: Vec<ValidationIssue>, score: f64) -> Self {
        Self {
            valid: !issues.iter().any(|i| i.severity.is_blocking()),
            issues,
            score: score.clamp(0.0, 100.0),
            timestamp: Utc::now(),
        }
    }

    /// A clean report scoring 100
    pub fn passed() -> Self {
        Self::from_issues(Vec::new(), 100.0)
    }

    /// Number of `Error` and `Critical` issues
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity.is_blocking())
            .count()
    }

    /// Number of `Warning` issues
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ValidationSeverity::Warning)
            .count()
    }

    /// Issues at or above `severity`
    pub fn issues_at_least(&self, severity: ValidationSeverity) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.severity >= severity).collect()
    }
}

/// Something that checks a `T` and reports on it
pub trait Validator<T: ?Sized> {
    /// Validator name
    fn name(&self) -> &str;

    /// Check `data`
    fn validate(&self, data: &T) -> ValidationReport;
}

/// Checks a `(positive, negative)` pair for finite, non-negative, equal values
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceValidator;

impl Validator<(f64, f64)> for BalanceValidator {
    fn name(&self) -> &str {
        "balance"
    }

    fn validate(&self, &(positive, negative): &(f64, f64)) -> ValidationReport {
        let sides = [("positive", positive), ("negative", negative)];
        let mut issues = Vec::new();
        let mut score = 100.0;

        for (field, value) in sides {
            if !value.is_finite() {
                issues.push(
                    ValidationIssue::new(
                        "NON_FINITE",
                        format!("'{field}' must be finite"),
                        ValidationSeverity::Error,
                    )
                    .on_field(field)
                    .with_value(value),
                );
                score -= 30.0;
            }
        }
        if !issues.is_empty() {
            return ValidationReport::from_issues(issues, score);
        }

        for (field, value) in sides {
            if value < 0.0 {
                issues.push(
                    ValidationIssue::new(
                        "NEGATIVE_VALUE",
                        format!("'{field}' cannot be negative"),
                        ValidationSeverity::Error,
                    )
                    .on_field(field)
                    .with_value(value),
                );
                score -= 20.0;
            }
        }
        if !issues.is_empty() {
            return ValidationReport::from_issues(issues, score);
        }

        if !verify_balance(positive, negative) {
            let (p, n) = calculate_balance(positive, negative);
            issues.push(
                ValidationIssue::new(
                    "UNBALANCED",
                    format!("Not META 50/50 balanced: {p:.2}/{n:.2}"),
                    ValidationSeverity::Error,
                )
                .on_field("balance")
                .with_value(format!("{p:.2}/{n:.2}")),
            );
            score -= (p - 50.0).abs() * 2.0;
        }
        ValidationReport::from_issues(issues, score)
    }
}

impl Validator<DomainDuality> for BalanceValidator {
    fn name(&self) -> &str {
        "balance"
    }

    fn validate(&self, duality: &DomainDuality) -> ValidationReport {
        self.validate(&(duality.positive().value(), duality.negative().value()))
    }
}

/// Checks a `(numerator, denominator)` pair against an expected split.
///
/// Deviations over half a percentage point are reported; under 5 points the
/// issue is a warning, beyond that an error.
#[derive(Debug, Clone, Copy)]
pub struct ProportionRatioValidator {
    expected: (f64, f64),
}

impl Default for ProportionRatioValidator {
    fn default() -> Self {
        Self {
            expected: (52.0, 48.0),
        }
    }
}

impl ProportionRatioValidator {
    /// Validator expecting `expected` percentages
    pub fn new(expected: (f64, f64)) -> Self {
        Self { expected }
    }

    /// Expected percentages
    pub fn expected(&self) -> (f64, f64) {
        self.expected
    }
}

impl Validator<(f64, f64)> for ProportionRatioValidator {
    fn name(&self) -> &str {
        "proportion"
    }

    fn validate(&self, &(numerator, denominator): &(f64, f64)) -> ValidationReport {
        if denominator == 0.0 {
            let issue = ValidationIssue::new(
                "ZERO_DENOMINATOR",
                "Denominator cannot be zero",
                ValidationSeverity::Critical,
            )
            .on_field("denominator")
            .with_value(0);
            return ValidationReport::from_issues(vec![issue], 0.0);
        }

        let (num, den) = calculate_balance(numerator, denominator);
        let deviation_num = (num - self.expected.0).abs();
        let deviation_den = (den - self.expected.1).abs();
        let mut issues = Vec::new();
        let mut score = 100.0;

        if deviation_num > 0.5 || deviation_den > 0.5 {
            let severity = if deviation_num < 5.0 {
                ValidationSeverity::Warning
            } else {
                ValidationSeverity::Error
            };
            issues.push(
                ValidationIssue::new(
                    "RATIO_MISMATCH",
                    format!(
                        "Ratio {num:.2}/{den:.2} differs from expected {}/{}",
                        self.expected.0, self.expected.1
                    ),
                    severity,
                )
                .on_field("ratio")
                .with_value(format!("{num:.2}/{den:.2}")),
            );
            score -= (deviation_num + deviation_den) * 2.0;
        }
        ValidationReport::from_issues(issues, score)
    }
}

impl Validator<Ratio> for ProportionRatioValidator {
    fn name(&self) -> &str {
        "proportion"
    }

    fn validate(&self, ratio: &Ratio) -> ValidationReport {
        self.validate(&(ratio.numerator(), ratio.denominator()))
    }
}

/// Checks a number lies within optional bounds
#[derive(Debug, Clone)]
pub struct RangeValidator {
    name: String,
    min: Option<f64>,
    max: Option<f64>,
}

impl RangeValidator {
    /// Unbounded validator
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: None,
            max: None,
        }
    }

    /// Set the inclusive lower bound
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

// At most 50 points are lost per bound.
fn bound_penalty(deviation: f64, bound: f64) -> f64 {
    if bound == 0.0 {
        50.0
    } else {
        (deviation / bound.abs() * 100.0).min(50.0)
    }
}

impl Validator<f64> for RangeValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, &value: &f64) -> ValidationReport {
        if value.is_nan() {
            let issue = ValidationIssue::new(
                "NOT_A_NUMBER",
                "Expected a numeric value, got NaN",
                ValidationSeverity::Error,
            );
            return ValidationReport::from_issues(vec![issue], 0.0);
        }

        let mut issues = Vec::new();
        let mut score = 100.0;

        if let Some(min) = self.min.filter(|min| value < *min) {
            issues.push(
                ValidationIssue::new(
                    "BELOW_MINIMUM",
                    format!("Value {value} is below minimum {min}"),
                    ValidationSeverity::Error,
                )
                .with_value(value),
            );
            score -= bound_penalty(min - value, min);
        }
        if let Some(max) = self.max.filter(|max| value > *max) {
            issues.push(
                ValidationIssue::new(
                    "ABOVE_MAXIMUM",
                    format!("Value {value} is above maximum {max}"),
                    ValidationSeverity::Error,
                )
                .with_value(value),
            );
            score -= bound_penalty(value - max, max);
        }
        ValidationReport::from_issues(issues, score)
    }
}

/// Runs several validators over one input.
///
/// Issues are concatenated and the score is the mean of the sub-scores. An
/// empty composite passes with 100.
pub struct CompositeValidator<T: ?Sized> {
    name: String,
    #[allow(clippy::type_complexity)]
    checks: Vec<(String, Box<dyn Fn(&T) -> ValidationReport>)>,
}

impl<T: ?Sized> CompositeValidator<T> {
    /// Create an empty composite
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
        }
    }

    /// Run `validator` on the whole input
    pub fn add_validator<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator<T> + 'static,
    {
        self.checks
            .push((name.into(), Box::new(move |data: &T| validator.validate(data))));
        self
    }

    /// Run `validator` on the part of the input picked by `extract`
    pub fn add_extracted<U, V, F>(mut self, name: impl Into<String>, validator: V, extract: F) -> Self
    where
        V: Validator<U> + 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.checks.push((
            name.into(),
            Box::new(move |data: &T| validator.validate(&extract(data))),
        ));
        self
    }

    /// Number of sub-validators
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no sub-validator was added
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for CompositeValidator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.checks.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("CompositeValidator")
            .field("name", &self.name)
            .field("checks", &names)
            .finish()
    }
}

impl<T: ?Sized> Validator<T> for CompositeValidator<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, data: &T) -> ValidationReport {
        if self.checks.is_empty() {
            return ValidationReport::passed();
        }

        let mut issues = Vec::new();
        let mut total = 0.0;
        for (name, check) in &self.checks {
            let report = check(data);
            debug!(composite = %self.name, validator = %name, score = report.score, "sub-validator finished");
            total += report.score;
            issues.extend(report.issues);
        }
        ValidationReport::from_issues(issues, total / self.checks.len() as f64)
    }
}

/// Anything that can say whether it holds META 50/50
pub trait BalanceSource {
    /// Whether the value is balanced
    fn holds_meta_balance(&self) -> bool;

    /// Observed percentages, when the value has any
    fn balance_percentages(&self) -> Option<(f64, f64)>;
}

impl BalanceSource for (f64, f64) {
    fn holds_meta_balance(&self) -> bool {
        self.0 == self.1
    }

    fn balance_percentages(&self) -> Option<(f64, f64)> {
        Some(calculate_balance(self.0, self.1))
    }
}

impl BalanceSource for DomainDuality {
    fn holds_meta_balance(&self) -> bool {
        self.is_balanced()
    }

    fn balance_percentages(&self) -> Option<(f64, f64)> {
        Some(self.balance())
    }
}

impl BalanceSource for DomainRelationship {
    fn holds_meta_balance(&self) -> bool {
        self.is_balanced()
    }

    fn balance_percentages(&self) -> Option<(f64, f64)> {
        Some(calculate_balance(
            self.influence_give(),
            self.influence_receive(),
        ))
    }
}

impl BalanceSource for SubParameter {
    fn holds_meta_balance(&self) -> bool {
        self.is_balanced()
    }

    fn balance_percentages(&self) -> Option<(f64, f64)> {
        Some(self.balance())
    }
}

impl BalanceSource for Domain {
    fn holds_meta_balance(&self) -> bool {
        self.validate_meta_compliance()
    }

    fn balance_percentages(&self) -> Option<(f64, f64)> {
        self.duality().map(DomainDuality::balance)
    }
}

/// Checks any [`BalanceSource`] for META 50/50
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaEquilibriumValidator;

impl<B: BalanceSource + ?Sized> Validator<B> for MetaEquilibriumValidator {
    fn name(&self) -> &str {
        "meta_equilibrium"
    }

    fn validate(&self, source: &B) -> ValidationReport {
        if source.holds_meta_balance() {
            return ValidationReport::passed();
        }

        match source.balance_percentages() {
            Some((p, n)) => {
                let issue = ValidationIssue::new(
                    "META_VIOLATION",
                    format!("META 50/50 violated: {p:.2}/{n:.2}"),
                    ValidationSeverity::Error,
                )
                .with_value(format!("{p:.2}/{n:.2}"));
                ValidationReport::from_issues(vec![issue], 100.0 - (p - 50.0).abs() * 2.0)
            }
            None => {
                let issue = ValidationIssue::new(
                    "META_VIOLATION",
                    "Not balanced and no balance to report",
                    ValidationSeverity::Error,
                );
                ValidationReport::from_issues(vec![issue], 0.0)
            }
        }
    }
}
