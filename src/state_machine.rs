// Copyright 2025 Cowboy AI, LLC.

//! State machine for domain lifecycles
//!
//! Domains move through a small Moore-style machine: the set of legal
//! targets depends only on the current state. Guards that depend on the
//! domain itself (a duality must be set before activating) live on
//! [`Domain`](crate::Domain); this module only knows the transition table.
//!
//! ```text
//! Nascent  -> Active | Archived
//! Active   -> Active | Evolving | Stable | Archived
//! Evolving -> Active | Archived
//! Stable   -> Active | Evolving | Archived
//! Archived (terminal)
//! ```

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Trait for types that can be used as states in a state machine
pub trait State: Debug + Clone + PartialEq + Eq {
    /// Get the name of this state for logging/debugging
    fn name(&self) -> &'static str;

    /// Check if this is a terminal state
    fn is_terminal(&self) -> bool {
        false
    }
}

/// Transition table of a Moore machine
pub trait StateTransitions: State {
    /// Check if a transition to the target state is valid
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Get all valid target states from this state
    fn valid_transitions(&self) -> Vec<Self>;

    /// Validate a transition, returning the error a caller should surface
    fn check_transition(&self, target: &Self) -> DomainResult<()> {
        if self.is_terminal() || !self.can_transition_to(target) {
            return Err(DomainError::InvalidStateTransition {
                from: self.name().to_string(),
                to: target.name().to_string(),
            });
        }
        Ok(())
    }
}

/// Record of a state transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTransition<S> {
    /// The state before the transition
    pub from: S,
    /// The state after the transition
    pub to: S,
    /// Unique identifier for this transition instance
    pub transition_id: Uuid,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Record a transition happening now
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            transition_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}

/// Lifecycle states of a knowledge domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DomainState {
    /// Newly created, not yet balanced
    Nascent,
    /// Balanced and operational
    Active,
    /// Undergoing transformation
    Evolving,
    /// Reached equilibrium
    Stable,
    /// No longer active but preserved
    Archived,
}

impl DomainState {
    /// Every state, in lifecycle order
    pub const ALL: [DomainState; 5] = [
        DomainState::Nascent,
        DomainState::Active,
        DomainState::Evolving,
        DomainState::Stable,
        DomainState::Archived,
    ];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nascent => "nascent",
            Self::Active => "active",
            Self::Evolving => "evolving",
            Self::Stable => "stable",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for DomainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl State for DomainState {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Archived)
    }
}

impl StateTransitions for DomainState {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DomainState::*;

        match self {
            Nascent => vec![Active, Archived],
            Active => vec![Active, Evolving, Stable, Archived],
            Evolving => vec![Active, Archived],
            Stable => vec![Active, Evolving, Archived],
            Archived => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(DomainState::Nascent, DomainState::Active, true)]
    #[test_case(DomainState::Nascent, DomainState::Stable, false)]
    #[test_case(DomainState::Active, DomainState::Stable, true)]
    #[test_case(DomainState::Active, DomainState::Active, true)]
    #[test_case(DomainState::Stable, DomainState::Active, true)]
    #[test_case(DomainState::Stable, DomainState::Nascent, false)]
    #[test_case(DomainState::Evolving, DomainState::Stable, false)]
    #[test_case(DomainState::Archived, DomainState::Active, false)]
    fn transition_table(from: DomainState, to: DomainState, allowed: bool) {
        assert_eq!(from.can_transition_to(&to), allowed);
        assert_eq!(from.check_transition(&to).is_ok(), allowed);
    }

    #[test]
    fn archived_is_terminal() {
        assert!(DomainState::Archived.is_terminal());
        assert!(DomainState::Archived.valid_transitions().is_empty());

        let err = DomainState::Archived
            .check_transition(&DomainState::Active)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid state transition from archived to active");
    }

    #[test]
    fn nothing_returns_to_nascent() {
        for state in DomainState::ALL {
            assert!(!state.can_transition_to(&DomainState::Nascent));
        }
    }

    #[test]
    fn states_serialize_lowercase() {
        for state in DomainState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
        }
        assert_eq!(DomainState::ALL.len(), 5);
    }

    #[test]
    fn transition_record_captures_both_ends() {
        let t = StateTransition::now(DomainState::Nascent, DomainState::Active);
        assert_eq!(t.from, DomainState::Nascent);
        assert_eq!(t.to, DomainState::Active);
        assert!(t.timestamp <= Utc::now());
    }
}
