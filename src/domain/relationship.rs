// Copyright 2025 Cowboy AI, LLC.

//! Relationships between domains
//!
//! A relationship's influence must flow equally both ways: both sides are
//! finite, non-negative and exactly equal. The two ends are
//! held as [`DomainRef`]s, never as owned domains, so a relationship cannot
//! keep a domain alive or form an ownership cycle.

use serde::{Deserialize, Serialize};

use super::model::Domain;
use super::proof::RelationshipProof;
use crate::equilibrium::calculate_balance;
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::DomainId;

/// Default relationship kind
pub const BIDIRECTIONAL: &str = "bidirectional";

/// Non-owning reference to a domain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainRef {
    /// Referenced domain id
    pub id: DomainId,
    /// Name at the time the reference was taken
    pub name: String,
}

impl From<&Domain> for DomainRef {
    fn from(domain: &Domain) -> Self {
        Self {
            id: domain.id(),
            name: domain.name().to_string(),
        }
    }
}

/// Balanced influence between two domains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRelationship {
    name: String,
    source: DomainRef,
    target: DomainRef,
    influence_give: f64,
    influence_receive: f64,
    relationship_type: String,
}

impl DomainRelationship {
    /// Relate two domains, failing unless `give == receive` and both are
    /// finite and non-negative
    pub fn new(
        name: impl Into<String>,
        source: &Domain,
        target: &Domain,
        influence_give: f64,
        influence_receive: f64,
    ) -> DomainResult<Self> {
        Self::with_type(name, source, target, influence_give, influence_receive, BIDIRECTIONAL)
    }

    /// Same as [`new`](Self::new) with an explicit relationship kind
    pub fn with_type(
        name: impl Into<String>,
        source: &Domain,
        target: &Domain,
        influence_give: f64,
        influence_receive: f64,
        relationship_type: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        for (side, value) in [("give", influence_give), ("receive", influence_receive)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidInfluence {
                    relationship: name.clone(),
                    side: side.to_string(),
                    value,
                });
            }
        }
        if influence_give != influence_receive {
            return Err(DomainError::balance_violation(
                format!("Relationship '{name}'"),
                "give",
                "receive",
                calculate_balance(influence_give, influence_receive),
            ));
        }

        Ok(Self {
            name,
            source: DomainRef::from(source),
            target: DomainRef::from(target),
            influence_give,
            influence_receive,
            relationship_type: relationship_type.into(),
        })
    }

    /// Relationship name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source end
    pub fn source(&self) -> &DomainRef {
        &self.source
    }

    /// Target end
    pub fn target(&self) -> &DomainRef {
        &self.target
    }

    /// Influence given
    pub fn influence_give(&self) -> f64 {
        self.influence_give
    }

    /// Influence received
    pub fn influence_receive(&self) -> f64 {
        self.influence_receive
    }

    /// Relationship kind
    pub fn relationship_type(&self) -> &str {
        &self.relationship_type
    }

    /// Whether give equals receive, sign included
    pub fn is_balanced(&self) -> bool {
        self.influence_give == self.influence_receive
    }

    /// `give + receive`
    pub fn total_influence(&self) -> f64 {
        self.influence_give + self.influence_receive
    }

    /// Prove the relationship maintains META 50/50
    pub fn prove_meta_meaning(&self) -> RelationshipProof {
        let (give, receive) = calculate_balance(self.influence_give, self.influence_receive);
        let is_balanced = self.is_balanced();

        RelationshipProof {
            name: self.name.clone(),
            source: self.source.name.clone(),
            target: self.target.name.clone(),
            relationship_type: self.relationship_type.clone(),
            give: self.influence_give,
            receive: self.influence_receive,
            balance: format!("{give:.2}/{receive:.2}"),
            is_balanced,
            proof: if is_balanced {
                "Relationship maintains META 50/50 equilibrium".to_string()
            } else {
                format!("Relationship '{}' violates META 50/50", self.name)
            },
        }
    }
}
