// Copyright 2025 Cowboy AI, LLC.

//! The knowledge domain aggregate
//!
//! A [`Domain`] owns its duality, attributes, sub-domains, relationships,
//! concepts and concept relations. It is created `Nascent` with no duality;
//! setting a balanced duality registers it with the domain's
//! [`MetaEquilibrium`] ledger, after which the domain can be activated.
//!
//! ```rust
//! use cim_equilibrium::{Domain, DomainState, DomainType};
//!
//! let mut physics = Domain::new("Physics", DomainType::Fundamental, "");
//! physics.set_duality("matter", 100.0, "antimatter", 100.0, Some("md")).unwrap();
//! physics.activate().unwrap();
//! physics.add_attribute("energy", 1000.0, "");
//!
//! assert_eq!(physics.state(), DomainState::Active);
//! assert_eq!(physics.attribute("energy").unwrap().structure(), 520.0);
//! assert!(physics.prove_meta_meaning().meta_valid);
//! ```

use std::fmt;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::proof::DomainProof;
use super::relationship::DomainRelationship;
use super::value_objects::{DomainAttribute, DomainDuality, DomainPole};
use crate::equilibrium::MetaEquilibrium;
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::{ConceptId, DomainId, RelationId};
use crate::knowledge::concepts::{Concept, ConceptRelation, ConceptType, RelationType};
use crate::state_machine::{DomainState, StateTransition, StateTransitions};

/// Kinds of knowledge domains
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    /// Core domain
    #[default]
    Fundamental,
    /// Derived from fundamentals
    Derived,
    /// Combines several others
    Composite,
    /// Emerges from interactions
    Emergent,
}

impl DomainType {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fundamental => "fundamental",
            Self::Derived => "derived",
            Self::Composite => "composite",
            Self::Emergent => "emergent",
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A knowledge domain maintaining META 50/50
#[derive(Debug, Clone)]
pub struct Domain {
    id: DomainId,
    name: String,
    domain_type: DomainType,
    description: String,
    state: DomainState,
    duality: Option<DomainDuality>,
    attributes: IndexMap<String, DomainAttribute>,
    sub_domains: IndexMap<String, Domain>,
    relationships: IndexMap<String, DomainRelationship>,
    concepts: IndexMap<ConceptId, Concept>,
    relations: IndexMap<RelationId, ConceptRelation>,
    history: Vec<StateTransition<DomainState>>,
    equilibrium: MetaEquilibrium,
}

impl Domain {
    /// Create a nascent domain with its own ledger
    pub fn new(
        name: impl Into<String>,
        domain_type: DomainType,
        description: impl Into<String>,
    ) -> Self {
        Self::with_equilibrium(name, domain_type, description, MetaEquilibrium::new())
    }

    /// Create a nascent domain that registers into a shared ledger
    pub fn with_equilibrium(
        name: impl Into<String>,
        domain_type: DomainType,
        description: impl Into<String>,
        equilibrium: MetaEquilibrium,
    ) -> Self {
        Self {
            id: DomainId::new(),
            name: name.into(),
            domain_type,
            description: description.into(),
            state: DomainState::Nascent,
            duality: None,
            attributes: IndexMap::new(),
            sub_domains: IndexMap::new(),
            relationships: IndexMap::new(),
            concepts: IndexMap::new(),
            relations: IndexMap::new(),
            history: Vec::new(),
            equilibrium,
        }
    }

    /// Domain id
    pub fn id(&self) -> DomainId {
        self.id
    }

    /// Domain name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Domain kind
    pub fn domain_type(&self) -> DomainType {
        self.domain_type
    }

    /// Free-form description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current lifecycle state
    pub fn state(&self) -> DomainState {
        self.state
    }

    /// The fundamental duality, once set
    pub fn duality(&self) -> Option<&DomainDuality> {
        self.duality.as_ref()
    }

    /// The ledger this domain registers into
    pub fn equilibrium(&self) -> &MetaEquilibrium {
        &self.equilibrium
    }

    /// Ledger key used for this domain's duality
    pub fn duality_key(&self) -> String {
        format!("{}_duality", self.name)
    }

    /// Set the fundamental duality.
    ///
    /// The poles must be non-negative and equal. On success the duality is
    /// registered under [`duality_key`](Self::duality_key); on failure the
    /// previous duality and the ledger are left untouched. Legal in any state.
    pub fn set_duality(
        &mut self,
        positive_name: impl Into<String>,
        positive_value: f64,
        negative_name: impl Into<String>,
        negative_value: f64,
        duality_name: Option<&str>,
    ) -> DomainResult<()> {
        let positive = DomainPole::new(positive_name, positive_value)?;
        let negative = DomainPole::new(negative_name, negative_value)?;
        let name = duality_name
            .map(str::to_string)
            .unwrap_or_else(|| self.duality_key());

        let duality = DomainDuality::new(positive, negative, name);
        duality.validate()?;

        let key = self.duality_key();
        self.equilibrium.register(key.as_str(), duality.to_sub_parameter())?;
        debug!(domain = %self.name, duality = %duality.name(), key = %key, "duality set");

        self.duality = Some(duality);
        Ok(())
    }

    /// Add an attribute, split 52/48. Replaces an attribute of the same name.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        total_value: f64,
        description: impl Into<String>,
    ) -> &DomainAttribute {
        let mut attribute = DomainAttribute::new(name, total_value);
        let description = description.into();
        if !description.is_empty() {
            attribute = attribute.with_description(description);
        }
        debug!(
            domain = %self.name,
            attribute = %attribute.name(),
            structure = attribute.structure(),
            flexibility = attribute.flexibility(),
            "attribute added"
        );

        let key = attribute.name().to_string();
        self.attributes.insert(key.clone(), attribute);
        &self.attributes[&key]
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> &IndexMap<String, DomainAttribute> {
        &self.attributes
    }

    /// Look up an attribute
    pub fn attribute(&self, name: &str) -> Option<&DomainAttribute> {
        self.attributes.get(name)
    }

    /// Take ownership of a child domain, keyed by its name
    pub fn add_sub_domain(&mut self, domain: Domain) {
        self.sub_domains.insert(domain.name.clone(), domain);
    }

    /// Direct sub-domains
    pub fn sub_domains(&self) -> &IndexMap<String, Domain> {
        &self.sub_domains
    }

    /// Look up a direct sub-domain
    pub fn sub_domain(&self, name: &str) -> Option<&Domain> {
        self.sub_domains.get(name)
    }

    /// Mutable access to a direct sub-domain
    pub fn sub_domain_mut(&mut self, name: &str) -> Option<&mut Domain> {
        self.sub_domains.get_mut(name)
    }

    /// Store a relationship to another domain, keyed by its name
    pub fn add_relationship(&mut self, relationship: DomainRelationship) {
        self.relationships
            .insert(relationship.name().to_string(), relationship);
    }

    /// Relationships in insertion order
    pub fn relationships(&self) -> &IndexMap<String, DomainRelationship> {
        &self.relationships
    }

    /// Move to `Active`. Requires a balanced duality.
    pub fn activate(&mut self) -> DomainResult<()> {
        self.transition_to(DomainState::Active)
    }

    /// Move from `Active` to `Stable`
    pub fn stabilize(&mut self) -> DomainResult<()> {
        if self.state != DomainState::Active {
            return Err(DomainError::NotActive {
                domain: self.name.clone(),
                state: self.state.to_string(),
            });
        }
        self.transition_to(DomainState::Stable)
    }

    /// Move from `Active` or `Stable` to `Evolving`
    pub fn begin_evolution(&mut self) -> DomainResult<()> {
        self.transition_to(DomainState::Evolving)
    }

    /// Move to the terminal `Archived` state
    pub fn archive(&mut self) -> DomainResult<()> {
        self.transition_to(DomainState::Archived)
    }

    /// Guarded transition to any state.
    ///
    /// Entering `Active` or `Evolving` requires a balanced duality; every other
    /// rule comes from the [`DomainState`] transition table.
    pub fn transition_to(&mut self, target: DomainState) -> DomainResult<()> {
        if matches!(target, DomainState::Active | DomainState::Evolving) {
            self.require_balanced_duality()?;
        }
        self.state.check_transition(&target)?;

        let from = self.state;
        self.state = target;
        self.history.push(StateTransition::now(from, target));
        info!(domain = %self.name, from = %from, to = %target, "domain state transition");
        Ok(())
    }

    fn require_balanced_duality(&self) -> DomainResult<()> {
        match &self.duality {
            None => Err(DomainError::NoDuality {
                domain: self.name.clone(),
            }),
            Some(duality) => duality.validate(),
        }
    }

    /// Every transition so far, oldest first
    pub fn history(&self) -> &[StateTransition<DomainState>] {
        &self.history
    }

    /// Create a concept owned by this domain
    pub fn create_concept(
        &mut self,
        name: impl Into<String>,
        concept_type: ConceptType,
        description: impl Into<String>,
        certainty: f64,
    ) -> ConceptId {
        self.add_concept(Concept::new(name, concept_type, description, certainty))
    }

    /// Adopt an existing concept
    pub fn add_concept(&mut self, mut concept: Concept) -> ConceptId {
        concept.assign_to(self.id);
        let id = concept.id();
        self.concepts.insert(id, concept);
        id
    }

    /// Concepts in insertion order
    pub fn concepts(&self) -> &IndexMap<ConceptId, Concept> {
        &self.concepts
    }

    /// Look up a concept by id
    pub fn concept(&self, id: ConceptId) -> Option<&Concept> {
        self.concepts.get(&id)
    }

    /// Mutable access to a concept
    pub fn concept_mut(&mut self, id: ConceptId) -> Option<&mut Concept> {
        self.concepts.get_mut(&id)
    }

    /// First concept whose name matches, ignoring case
    pub fn concept_by_name(&self, name: &str) -> Option<&Concept> {
        let wanted = name.to_lowercase();
        self.concepts
            .values()
            .find(|c| c.name().to_lowercase() == wanted)
    }

    /// Relate two concepts. Neither end has to exist in this domain.
    pub fn create_relation(
        &mut self,
        source: ConceptId,
        target: ConceptId,
        relation_type: RelationType,
        strength: f64,
    ) -> RelationId {
        self.add_relation(ConceptRelation::new(source, target, relation_type, strength))
    }

    /// Adopt an existing relation
    pub fn add_relation(&mut self, relation: ConceptRelation) -> RelationId {
        let id = relation.id();
        self.relations.insert(id, relation);
        id
    }

    /// Relations in insertion order
    pub fn relations(&self) -> &IndexMap<RelationId, ConceptRelation> {
        &self.relations
    }

    /// Relations with `concept` at either end
    pub fn relations_of(&self, concept: ConceptId) -> Vec<&ConceptRelation> {
        self.relations
            .values()
            .filter(|r| r.involves(concept))
            .collect()
    }

    /// True iff a duality is set and balanced
    pub fn validate_meta_compliance(&self) -> bool {
        self.duality.as_ref().is_some_and(DomainDuality::is_balanced)
    }

    /// Prove this domain maintains META 50/50
    pub fn prove_meta_meaning(&self) -> DomainProof {
        let meta_valid = self.validate_meta_compliance();

        DomainProof {
            domain: self.name.clone(),
            domain_type: self.domain_type,
            state: self.state,
            meta_valid,
            duality: self.duality.as_ref().map(DomainDuality::prove),
            attributes: self
                .attributes
                .values()
                .map(DomainAttribute::prove_operational)
                .collect(),
            sub_domains_count: self.sub_domains.len(),
            sub_domains_valid: self
                .sub_domains
                .values()
                .all(Domain::validate_meta_compliance),
            proof: if meta_valid {
                format!("Domain '{}' maintains META 50/50 equilibrium", self.name)
            } else {
                format!("Domain '{}' violates META 50/50", self.name)
            },
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Domain({}, type={}, state={})",
            self.name, self.domain_type, self.state
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physics() -> Domain {
        Domain::new("Physics", DomainType::Fundamental, "Study of matter and energy")
    }

    #[test]
    fn new_domain_is_nascent() {
        let d = physics();
        assert_eq!(d.name(), "Physics");
        assert_eq!(d.domain_type(), DomainType::Fundamental);
        assert_eq!(d.description(), "Study of matter and energy");
        assert_eq!(d.state(), DomainState::Nascent);
        assert!(d.duality().is_none());
        assert!(d.history().is_empty());
        assert!(!d.validate_meta_compliance());
    }

    #[test]
    fn set_duality_registers_under_domain_key() {
        let mut d = physics();
        d.set_duality("matter", 50.0, "antimatter", 50.0, None).unwrap();

        let duality = d.duality().unwrap();
        assert_eq!(duality.name(), "Physics_duality");
        assert!(duality.is_balanced());
        assert!(d.equilibrium().contains("Physics_duality"));
        assert!(d.validate_meta_compliance());
    }

    #[test]
    fn explicit_duality_name_keeps_domain_key() {
        let mut d = physics();
        d.set_duality("matter", 100.0, "antimatter", 100.0, Some("md")).unwrap();

        assert_eq!(d.duality().unwrap().name(), "md");
        let param = d.equilibrium().parameter("Physics_duality").unwrap();
        assert_eq!(param.name(), "md");
        assert_eq!(param.values(), (100.0, 100.0));
    }

    #[test]
    fn failed_set_duality_leaves_domain_untouched() {
        let mut d = physics();
        d.set_duality("a", 10.0, "b", 10.0, None).unwrap();

        let err = d.set_duality("a", 60.0, "b", 40.0, None).unwrap_err();
        assert!(err.to_string().contains("violates META 50/50"));
        assert!(d.set_duality("a", -1.0, "b", -1.0, None).is_err());

        assert_eq!(d.duality().unwrap().positive().value(), 10.0);
        assert_eq!(d.equilibrium().parameter("Physics_duality").unwrap().values(), (10.0, 10.0));
    }

    #[test]
    fn failed_set_duality_on_fresh_domain_leaves_it_unset() {
        let mut d = physics();
        assert!(d.set_duality("a", 60.0, "b", 40.0, None).is_err());

        assert!(d.duality().is_none());
        assert_eq!(d.state(), DomainState::Nascent);
        assert!(d.history().is_empty());
        assert!(!d.equilibrium().contains("Physics_duality"));
        assert!(d.equilibrium().is_empty());
    }

    #[test]
    fn activate_requires_duality() {
        let mut d = physics();
        let err = d.activate().unwrap_err();
        assert!(err.to_string().contains("no duality set"));
        assert_eq!(d.state(), DomainState::Nascent);

        d.set_duality("p", 1.0, "n", 1.0, None).unwrap();
        d.activate().unwrap();
        assert_eq!(d.state(), DomainState::Active);
    }

    #[test]
    fn stabilize_requires_active() {
        let mut d = physics();
        let err = d.stabilize().unwrap_err();
        assert!(err.to_string().contains("must be active"));

        d.set_duality("p", 1.0, "n", 1.0, None).unwrap();
        d.activate().unwrap();
        d.stabilize().unwrap();
        assert_eq!(d.state(), DomainState::Stable);
        assert!(d.stabilize().is_err());
    }

    #[test]
    fn evolution_and_archive() {
        let mut d = physics();
        assert!(d.begin_evolution().is_err());

        d.set_duality("p", 1.0, "n", 1.0, None).unwrap();
        d.activate().unwrap();
        d.stabilize().unwrap();
        d.begin_evolution().unwrap();
        assert_eq!(d.state(), DomainState::Evolving);
        d.activate().unwrap();

        d.archive().unwrap();
        assert_eq!(d.state(), DomainState::Archived);
        let err = d.activate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition { .. }));
        assert!(d.archive().is_err());

        let path: Vec<_> = d.history().iter().map(|t| t.to).collect();
        assert_eq!(
            path,
            vec![
                DomainState::Active,
                DomainState::Stable,
                DomainState::Evolving,
                DomainState::Active,
                DomainState::Archived,
            ]
        );
    }

    #[test]
    fn nascent_domain_can_be_archived_without_duality() {
        let mut d = physics();
        d.archive().unwrap();
        assert_eq!(d.state(), DomainState::Archived);
    }

    #[test]
    fn attributes_split_and_replace() {
        let mut d = physics();
        let attr = d.add_attribute("energy", 1000.0, "Total energy");
        assert_eq!(attr.structure(), 520.0);
        assert_eq!(attr.description(), Some("Total energy"));

        d.add_attribute("energy", 100.0, "");
        assert_eq!(d.attributes().len(), 1);
        assert_eq!(d.attribute("energy").unwrap().flexibility(), 48.0);
        assert!(d.attribute("energy").unwrap().description().is_none());
    }

    #[test]
    fn sub_domains_are_owned_by_name() {
        let mut d = physics();
        let mut quantum = Domain::new("Quantum", DomainType::Derived, "");
        quantum.set_duality("wave", 1.0, "particle", 1.0, None).unwrap();
        d.add_sub_domain(quantum);

        assert_eq!(d.sub_domains().len(), 1);
        assert!(d.sub_domain("Quantum").unwrap().validate_meta_compliance());

        d.sub_domain_mut("Quantum").unwrap().add_attribute("spin", 2.0, "");
        assert_eq!(d.sub_domain("Quantum").unwrap().attributes().len(), 1);
    }

    #[test]
    fn relationships_are_stored_by_name() {
        let mut d = physics();
        let chemistry = Domain::new("Chemistry", DomainType::Derived, "");
        let rel = DomainRelationship::new("grounds", &d, &chemistry, 5.0, 5.0).unwrap();
        d.add_relationship(rel);

        assert_eq!(d.relationships()["grounds"].target().name, "Chemistry");
    }

    #[test]
    fn concepts_and_relations() {
        let mut d = physics();
        let energy = d.create_concept("Energy", ConceptType::Definition, "Capacity for work", 90.0);
        let conservation =
            d.create_concept("Conservation of Energy", ConceptType::Law, "", 100.0);
        let rel = d.create_relation(conservation, energy, RelationType::Supports, 75.0);

        assert_eq!(d.concept(energy).unwrap().domain_id(), Some(d.id()));
        assert_eq!(d.concept_by_name("energy").unwrap().id(), energy);
        assert!(d.concept_by_name("Entropy").is_none());
        assert_eq!(d.relations_of(energy).len(), 1);
        assert_eq!(d.relations()[&rel].strength(), 75.0);

        d.concept_mut(energy).unwrap().adjust_certainty(-40.0);
        assert_eq!(d.concept(energy).unwrap().certainty(), 50.0);
    }

    #[test]
    fn proof_serializes_type_lowercase() {
        let mut d = physics();
        d.set_duality("matter", 100.0, "antimatter", 100.0, Some("md")).unwrap();
        d.add_attribute("energy", 1000.0, "");

        let proof = d.prove_meta_meaning();
        assert!(proof.meta_valid);
        assert!(proof.duality.as_ref().unwrap().is_balanced);
        assert_eq!(proof.attributes.len(), 1);
        assert!(proof.sub_domains_valid);

        let json = serde_json::to_value(&proof).unwrap();
        assert_eq!(json["type"], "fundamental");
        assert_eq!(json["state"], "nascent");
    }

    #[test]
    fn proof_without_duality() {
        let proof = physics().prove_meta_meaning();
        assert!(!proof.meta_valid);
        assert!(proof.duality.is_none());
        assert_eq!(proof.proof, "Domain 'Physics' violates META 50/50");
    }

    #[test]
    fn display() {
        assert_eq!(
            physics().to_string(),
            "Domain(Physics, type=fundamental, state=nascent)"
        );
    }
}
