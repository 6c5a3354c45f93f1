// Copyright 2025 Cowboy AI, LLC.

//! Error types for equilibrium and domain operations

use thiserror::Error;

/// Errors that can occur while building or validating knowledge domains
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// A pole was given a negative weight
    #[error("Pole value cannot be negative: {pole} = {value}")]
    NegativeValue {
        /// Name of the offending pole
        pole: String,
        /// The rejected value
        value: f64,
    },

    /// A pole was given NaN or an infinite weight
    #[error("Pole value must be finite: {pole}")]
    NonFiniteValue {
        /// Name of the offending pole
        pole: String,
    },

    /// A relationship was given a negative or non-finite influence
    #[error("Relationship '{relationship}' {side} influence must be finite and non-negative, got {value}")]
    InvalidInfluence {
        /// Name of the relationship
        relationship: String,
        /// `give` or `receive`
        side: String,
        /// The rejected value
        value: f64,
    },

    /// Claim evidence was negative or non-finite
    #[error("Evidence must be finite and non-negative: {side} = {value}")]
    InvalidEvidence {
        /// `support` or `opposition`
        side: String,
        /// The rejected value
        value: f64,
    },

    /// Already exists error (generic)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A ratio was built with a zero denominator
    #[error("Denominator cannot be zero: {0}")]
    ZeroDenominator(String),

    /// A paired value does not hold the META 50/50 balance
    #[error("{subject} violates META 50/50: {detail}")]
    BalanceViolation {
        /// What was being validated, e.g. `Duality 'light_dark'`
        subject: String,
        /// Percentages observed for both sides
        detail: String,
    },

    /// Activation attempted before a duality was set
    #[error("Domain '{domain}' has no duality set")]
    NoDuality {
        /// Name of the domain
        domain: String,
    },

    /// Stabilization attempted outside the active state
    #[error("Domain '{domain}' must be active before stabilizing (currently {state})")]
    NotActive {
        /// Name of the domain
        domain: String,
        /// State the domain was in
        state: String,
    },

    /// Invalid state transition
    #[error("Invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        /// Current state
        from: String,
        /// Attempted target state
        to: String,
    },

    /// A structure/flexibility pair is not split 52/48
    #[error("Operational ratio must be 52/48, got {structure:.2}/{flexibility:.2}")]
    OperationalRatio {
        /// Observed structure percentage
        structure: f64,
        /// Observed flexibility percentage
        flexibility: f64,
    },

    /// A ratio was built over a zero total
    #[error("Total cannot be zero: {0}")]
    ZeroTotal(String),

    /// Rejected equilibrium policy
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    /// Not found error (generic)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl DomainError {
    /// Build a balance violation for a named subject and its two percentages
    pub fn balance_violation(
        subject: impl Into<String>,
        positive_label: &str,
        negative_label: &str,
        balance: (f64, f64),
    ) -> Self {
        DomainError::BalanceViolation {
            subject: subject.into(),
            detail: format!(
                "{positive_label}={:.2}% / {negative_label}={:.2}%",
                balance.0, balance.1
            ),
        }
    }

    /// Check if this is a META 50/50 violation
    pub fn is_balance_violation(&self) -> bool {
        matches!(self, DomainError::BalanceViolation { .. })
    }

    /// Check if this is a value validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DomainError::NegativeValue { .. }
                | DomainError::NonFiniteValue { .. }
                | DomainError::InvalidInfluence { .. }
                | DomainError::InvalidEvidence { .. }
                | DomainError::BalanceViolation { .. }
                | DomainError::OperationalRatio { .. }
                | DomainError::ZeroTotal(_)
                | DomainError::ZeroDenominator(_)
        )
    }

    /// Check if this is a lifecycle error
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            DomainError::NoDuality { .. }
                | DomainError::NotActive { .. }
                | DomainError::InvalidStateTransition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error creation and display messages
    ///
    /// ```mermaid
    /// graph TD
    ///     A[DomainError] -->|Display| B[Error Message]
    ///     A -->|Clone| C[Cloned Error]
    /// ```
    #[test]
    fn test_error_display_messages() {
        let err = DomainError::NegativeValue {
            pole: "bad".to_string(),
            value: -10.0,
        };
        assert_eq!(err.to_string(), "Pole value cannot be negative: bad = -10");

        let err = DomainError::balance_violation("Duality 'test'", "a", "b", (60.0, 40.0));
        assert_eq!(
            err.to_string(),
            "Duality 'test' violates META 50/50: a=60.00% / b=40.00%"
        );

        let err = DomainError::NoDuality {
            domain: "Physics".to_string(),
        };
        assert_eq!(err.to_string(), "Domain 'Physics' has no duality set");

        let err = DomainError::NotActive {
            domain: "Physics".to_string(),
            state: "nascent".to_string(),
        };
        assert!(err.to_string().contains("must be active"));

        let err = DomainError::OperationalRatio {
            structure: 60.0,
            flexibility: 40.0,
        };
        assert_eq!(
            err.to_string(),
            "Operational ratio must be 52/48, got 60.00/40.00"
        );

        let err = DomainError::InvalidStateTransition {
            from: "archived".to_string(),
            to: "active".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid state transition from archived to active"
        );
    }

    #[test]
    fn test_error_clone() {
        let original = DomainError::ZeroTotal("ratio".to_string());
        let cloned = original.clone();

        assert_eq!(original.to_string(), cloned.to_string());
    }

    /// Test helper predicates are mutually exclusive
    #[test]
    fn test_helper_method_exclusivity() {
        let balance = DomainError::balance_violation("x", "p", "n", (70.0, 30.0));
        assert!(balance.is_balance_violation());
        assert!(balance.is_validation_error());
        assert!(!balance.is_state_error());

        let no_duality = DomainError::NoDuality {
            domain: "X".to_string(),
        };
        assert!(no_duality.is_state_error());
        assert!(!no_duality.is_validation_error());
        assert!(!no_duality.is_balance_violation());

        let influence = DomainError::InvalidInfluence {
            relationship: "ab".to_string(),
            side: "give".to_string(),
            value: -5.0,
        };
        assert!(influence.is_validation_error());
        assert!(!influence.is_balance_violation());
        assert_eq!(
            influence.to_string(),
            "Relationship 'ab' give influence must be finite and non-negative, got -5"
        );

        let duplicate = DomainError::AlreadyExists("Domain name Physics".to_string());
        assert_eq!(duplicate.to_string(), "Already exists: Domain name Physics");
        assert!(!duplicate.is_validation_error());
        assert!(!duplicate.is_state_error());

        let not_found = DomainError::NotFound("X".to_string());
        assert!(!not_found.is_state_error());
        assert!(!not_found.is_validation_error());
    }

    #[test]
    fn test_serde_json_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let domain_err: DomainError = serde_err.into();

        match domain_err {
            DomainError::SerializationError(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected SerializationError"),
        }
    }
}
