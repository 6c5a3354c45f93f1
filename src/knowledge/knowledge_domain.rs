// Copyright 2025 Cowboy AI, LLC.

//! Knowledge domains seeded from static data
//!
//! A [`KnowledgeDomain`] wraps a core [`Domain`] and adds the bookkeeping a
//! subject area needs: which concepts are axioms, which concept names are
//! fundamental, and statistics over the concept population.
//!
//! Subject areas are data, not types. A [`DomainSeed`] names the duality,
//! the axioms and the fundamental concepts; [`KnowledgeDomain::from_seed`]
//! turns it into an active, balanced domain.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::concepts::{Concept, ConceptRelation, ConceptType, RelationType};
use crate::domain::{Domain, DomainType, DualityProof};
use crate::equilibrium::MetaEquilibrium;
use crate::errors::DomainResult;
use crate::identifiers::{ConceptId, DomainId, RelationId};

/// The balanced opposition at the heart of a seed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualitySeed {
    /// Duality name
    pub name: &'static str,
    /// Positive pole name
    pub positive: &'static str,
    /// Negative pole name
    pub negative: &'static str,
    /// Weight given to each pole
    pub weight: f64,
}

/// Static description of a subject area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainSeed {
    /// Domain name
    pub name: &'static str,
    /// Domain kind
    pub domain_type: DomainType,
    /// One-line description
    pub description: &'static str,
    /// Fundamental duality
    pub duality: DualitySeed,
    /// Kind given to every seeded axiom concept
    pub axiom_type: ConceptType,
    /// Certainty given to every seeded axiom concept
    pub axiom_certainty: f64,
    /// `(name, description)` of each axiom
    pub axioms: &'static [(&'static str, &'static str)],
    /// Names of the domain's fundamental concepts
    pub fundamental_concepts: &'static [&'static str],
}

/// Concept population statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DomainStats {
    /// Domain name
    pub name: String,
    /// Domain kind
    #[serde(rename = "type")]
    pub domain_type: DomainType,
    /// Number of concepts
    pub concepts: usize,
    /// Number of concepts of kind `axiom`
    pub axioms: usize,
    /// Number of concept relations
    pub relations: usize,
    /// Concept count per kind
    pub concepts_by_type: BTreeMap<ConceptType, usize>,
    /// Mean certainty, zero when there are no concepts
    pub average_certainty: f64,
    /// Whether the duality is set and balanced
    pub balanced: bool,
}

/// META proof for a knowledge domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KnowledgeProof {
    /// Domain name
    pub domain: String,
    /// Concept statistics
    pub statistics: DomainStats,
    /// Duality snapshot
    pub duality: Option<DualityProof>,
    /// Whether the duality is set and balanced
    pub meta_valid: bool,
    /// Human readable verdict
    pub proof: String,
}

/// A subject area built on a core [`Domain`]
#[derive(Debug, Clone)]
pub struct KnowledgeDomain {
    domain: Domain,
    axioms: Vec<ConceptId>,
    fundamental_concepts: Vec<String>,
}

impl KnowledgeDomain {
    /// Wrap a fresh nascent domain registering into `equilibrium`
    pub fn new(
        name: impl Into<String>,
        domain_type: DomainType,
        description: impl Into<String>,
        equilibrium: MetaEquilibrium,
    ) -> Self {
        Self::from_domain(Domain::with_equilibrium(
            name,
            domain_type,
            description,
            equilibrium,
        ))
    }

    /// Wrap an existing domain. Axioms already present are tracked.
    pub fn from_domain(domain: Domain) -> Self {
        let axioms = domain
            .concepts()
            .values()
            .filter(|c| c.concept_type() == ConceptType::Axiom)
            .map(Concept::id)
            .collect();
        Self {
            domain,
            axioms,
            fundamental_concepts: Vec::new(),
        }
    }

    /// Build an active domain from a seed.
    ///
    /// Sets the seed's duality, activates the domain, then creates one
    /// concept per seeded axiom.
    pub fn from_seed(seed: &DomainSeed, equilibrium: MetaEquilibrium) -> DomainResult<Self> {
        let mut kd = Self::new(seed.name, seed.domain_type, seed.description, equilibrium);

        let duality = &seed.duality;
        kd.domain.set_duality(
            duality.positive,
            duality.weight,
            duality.negative,
            duality.weight,
            Some(duality.name),
        )?;
        kd.domain.activate()?;

        for (name, description) in seed.axioms {
            kd.create_concept(*name, seed.axiom_type, *description, seed.axiom_certainty);
        }
        kd.fundamental_concepts = seed
            .fundamental_concepts
            .iter()
            .map(|c| c.to_string())
            .collect();

        info!(
            domain = %seed.name,
            axioms = seed.axioms.len(),
            duality = %duality.name,
            "knowledge domain seeded"
        );
        Ok(kd)
    }

    /// Domain id
    pub fn id(&self) -> DomainId {
        self.domain.id()
    }

    /// Domain name
    pub fn name(&self) -> &str {
        self.domain.name()
    }

    /// Domain kind
    pub fn domain_type(&self) -> DomainType {
        self.domain.domain_type()
    }

    /// Description
    pub fn description(&self) -> &str {
        self.domain.description()
    }

    /// The wrapped domain
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Mutable access to the wrapped domain
    pub fn domain_mut(&mut self) -> &mut Domain {
        &mut self.domain
    }

    /// Unwrap, e.g. to add the domain to a hierarchy
    pub fn into_domain(self) -> Domain {
        self.domain
    }

    /// Fundamental concept names
    pub fn fundamental_concepts(&self) -> &[String] {
        &self.fundamental_concepts
    }

    /// Create a concept; axioms are tracked
    pub fn create_concept(
        &mut self,
        name: impl Into<String>,
        concept_type: ConceptType,
        description: impl Into<String>,
        certainty: f64,
    ) -> ConceptId {
        self.add_concept(Concept::new(name, concept_type, description, certainty))
    }

    /// Adopt an existing concept; axioms are tracked
    pub fn add_concept(&mut self, concept: Concept) -> ConceptId {
        let is_axiom = concept.concept_type() == ConceptType::Axiom;
        let id = self.domain.add_concept(concept);
        if is_axiom && !self.axioms.contains(&id) {
            self.axioms.push(id);
        }
        id
    }

    /// Relate two concepts
    pub fn create_relation(
        &mut self,
        source: ConceptId,
        target: ConceptId,
        relation_type: RelationType,
        strength: f64,
    ) -> RelationId {
        self.domain
            .create_relation(source, target, relation_type, strength)
    }

    /// Look up a concept by id
    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.domain.concept(id)
    }

    /// Look up a concept by name, ignoring case
    pub fn concept_by_name(&self, name: &str) -> Option<&Concept> {
        self.domain.concept_by_name(name)
    }

    /// Relations with `concept` at either end
    pub fn relations_of(&self, concept: ConceptId) -> Vec<&ConceptRelation> {
        self.domain.relations_of(concept)
    }

    /// Axiom concepts in creation order
    pub fn axioms(&self) -> Vec<&Concept> {
        self.axioms
            .iter()
            .filter_map(|id| self.domain.concept(*id))
            .collect()
    }

    /// Number of concepts
    pub fn concept_count(&self) -> usize {
        self.domain.concepts().len()
    }

    /// Number of axioms
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Whether the duality is set and balanced
    pub fn validate_balance(&self) -> bool {
        self.domain.validate_meta_compliance()
    }

    /// Concept population statistics
    pub fn stats(&self) -> DomainStats {
        let concepts = self.domain.concepts();
        let mut concepts_by_type = BTreeMap::new();
        for concept in concepts.values() {
            *concepts_by_type.entry(concept.concept_type()).or_insert(0) += 1;
        }
        let average_certainty = if concepts.is_empty() {
            0.0
        } else {
            concepts.values().map(Concept::certainty).sum::<f64>() / concepts.len() as f64
        };

        DomainStats {
            name: self.name().to_string(),
            domain_type: self.domain_type(),
            concepts: concepts.len(),
            axioms: self.axiom_count(),
            relations: self.domain.relations().len(),
            concepts_by_type,
            average_certainty,
            balanced: self.validate_balance(),
        }
    }

    /// Prove the domain maintains META 50/50
    pub fn prove_meta_meaning(&self) -> KnowledgeProof {
        let meta_valid = self.validate_balance();
        KnowledgeProof {
            domain: self.name().to_string(),
            statistics: self.stats(),
            duality: self.domain.duality().map(|d| d.prove()),
            meta_valid,
            proof: if meta_valid {
                format!("Domain '{}' maintains META 50/50 equilibrium", self.name())
            } else {
                format!("Domain '{}' requires balance adjustment", self.name())
            },
        }
    }
}

impl fmt::Display for KnowledgeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KnowledgeDomain({}, concepts={})",
            self.name(),
            self.concept_count()
        )
    }
}
