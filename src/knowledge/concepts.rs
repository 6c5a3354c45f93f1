// Copyright 2025 Cowboy AI, LLC.

//! Concepts and concept relations
//!
//! Concepts are the content a knowledge domain carries: axioms, laws,
//! definitions and so on. Each concept balances certainty against
//! uncertainty (the two always sum to 100). Neither certainty nor relation
//! strength take part in the META 50/50 invariant; only dualities and
//! domain relationships do.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identifiers::{ConceptId, DomainId, RelationId};

/// Kinds of concepts within a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConceptType {
    /// Fundamental truth
    Axiom,
    /// Proven statement
    Theorem,
    /// Unproven statement
    Hypothesis,
    /// Term definition
    Definition,
    /// Guiding principle
    Principle,
    /// Established law
    Law,
    /// Comprehensive theory
    Theory,
    /// Conceptual model
    Model,
}

impl ConceptType {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Axiom => "axiom",
            Self::Theorem => "theorem",
            Self::Hypothesis => "hypothesis",
            Self::Definition => "definition",
            Self::Principle => "principle",
            Self::Law => "law",
            Self::Theory => "theory",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for ConceptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of relations between concepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// Source is derived from target
    DerivesFrom,
    /// Source implies target
    Implies,
    /// The two contradict each other
    Contradicts,
    /// Source supports target
    Supports,
    /// Source extends target
    Extends,
    /// Source is a special case of target
    Specializes,
    /// Source generalizes target
    Generalizes,
    /// The two are equivalent
    Equivalent,
}

impl RelationType {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DerivesFrom => "derives_from",
            Self::Implies => "implies",
            Self::Contradicts => "contradicts",
            Self::Supports => "supports",
            Self::Extends => "extends",
            Self::Specializes => "specializes",
            Self::Generalizes => "generalizes",
            Self::Equivalent => "equivalent",
        }
    }

    /// Whether the relation reads the same in both directions
    pub fn is_symmetric(&self) -> bool {
        matches!(self, Self::Contradicts | Self::Equivalent)
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concept within a knowledge domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    id: ConceptId,
    name: String,
    concept_type: ConceptType,
    description: String,
    certainty: f64,
    uncertainty: f64,
    domain_id: Option<DomainId>,
    created_at: DateTime<Utc>,
    metadata: IndexMap<String, Value>,
}

impl Concept {
    /// Create a concept. Certainty is clamped to `[0, 100]`; uncertainty is
    /// the remainder.
    pub fn new(
        name: impl Into<String>,
        concept_type: ConceptType,
        description: impl Into<String>,
        certainty: f64,
    ) -> Self {
        let certainty = clamp_percent(certainty);
        Self {
            id: ConceptId::new(),
            name: name.into(),
            concept_type,
            description: description.into(),
            certainty,
            uncertainty: 100.0 - certainty,
            domain_id: None,
            created_at: Utc::now(),
            metadata: IndexMap::new(),
        }
    }

    /// Replace certainty and uncertainty with two raw weights, normalised so
    /// they sum to 100. Two zero weights give 50/50.
    pub fn with_weights(mut self, certainty: f64, uncertainty: f64) -> Self {
        let c = certainty.max(0.0);
        let u = uncertainty.max(0.0);
        let total = c + u;
        if total > 0.0 && total.is_finite() {
            self.certainty = c / total * 100.0;
            self.uncertainty = u / total * 100.0;
        } else {
            self.certainty = 50.0;
            self.uncertainty = 50.0;
        }
        self
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub(crate) fn assign_to(&mut self, domain_id: DomainId) {
        self.domain_id = Some(domain_id);
    }

    /// Concept id
    pub fn id(&self) -> ConceptId {
        self.id
    }

    /// Concept name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Concept kind
    pub fn concept_type(&self) -> ConceptType {
        self.concept_type
    }

    /// Free-form description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Certainty in percent
    pub fn certainty(&self) -> f64 {
        self.certainty
    }

    /// Uncertainty in percent
    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// Owning domain, once added to one
    pub fn domain_id(&self) -> Option<DomainId> {
        self.domain_id
    }

    /// Creation time
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Open metadata
    pub fn metadata(&self) -> &IndexMap<String, Value> {
        &self.metadata
    }

    /// Mutable metadata
    pub fn metadata_mut(&mut self) -> &mut IndexMap<String, Value> {
        &mut self.metadata
    }

    /// `(certainty, uncertainty)`
    pub fn balance(&self) -> (f64, f64) {
        (self.certainty, self.uncertainty)
    }

    /// Whether certainty sits at 50 (within 0.01)
    pub fn is_balanced(&self) -> bool {
        (self.certainty - 50.0).abs() < 0.01
    }

    /// Shift certainty by `delta`, clamped to `[0, 100]`
    pub fn adjust_certainty(&mut self, delta: f64) {
        self.certainty = clamp_percent(self.certainty + delta);
        self.uncertainty = 100.0 - self.certainty;
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 50.0;
    }
    value.clamp(0.0, 100.0)
}

/// A directed (or symmetric) relation between two concepts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRelation {
    id: RelationId,
    source_id: ConceptId,
    target_id: ConceptId,
    relation_type: RelationType,
    strength: f64,
    bidirectional: bool,
    metadata: IndexMap<String, Value>,
}

impl ConceptRelation {
    /// Relate two concepts. Symmetric relation types are bidirectional.
    pub fn new(
        source_id: ConceptId,
        target_id: ConceptId,
        relation_type: RelationType,
        strength: f64,
    ) -> Self {
        Self {
            id: RelationId::new(),
            source_id,
            target_id,
            relation_type,
            strength,
            bidirectional: relation_type.is_symmetric(),
            metadata: IndexMap::new(),
        }
    }

    /// Override direction
    pub fn bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    /// Attach a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Relation id
    pub fn id(&self) -> RelationId {
        self.id
    }

    /// Source concept
    pub fn source_id(&self) -> ConceptId {
        self.source_id
    }

    /// Target concept
    pub fn target_id(&self) -> ConceptId {
        self.target_id
    }

    /// Relation kind
    pub fn relation_type(&self) -> RelationType {
        self.relation_type
    }

    /// Opaque strength, conventionally 0..100
    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Whether the relation holds both ways
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Open metadata
    pub fn metadata(&self) -> &IndexMap<String, Value> {
        &self.metadata
    }

    /// Whether either end is `concept`
    pub fn involves(&self, concept: ConceptId) -> bool {
        self.source_id == concept || self.target_id == concept
    }
}
