// Copyright 2025 Cowboy AI, LLC.

//! Registry of domains, hierarchies and relationships
//!
//! The registry owns the domains registered with it and shares one
//! [`MetaEquilibrium`] ledger with every domain it creates. Domain ids and
//! names are unique; hierarchies are keyed by name.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{
    Domain, DomainHierarchy, DomainProof, DomainRelationship, DomainType, HierarchyProof,
    RelationshipProof,
};
use crate::equilibrium::{calculate_balance, MetaEquilibrium};
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::DomainId;
use crate::state_machine::DomainState;

/// One registered domain in a [`RegistryValidation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegistryDomainEntry {
    /// Domain name
    pub name: String,
    /// Domain kind
    #[serde(rename = "type")]
    pub domain_type: DomainType,
    /// Lifecycle state
    pub state: DomainState,
    /// Whether the domain is META compliant
    pub meta_valid: bool,
}

/// One registered relationship in a [`RegistryValidation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegistryRelationshipEntry {
    /// Relationship name
    pub name: String,
    /// Whether give equals receive
    pub balanced: bool,
}

/// Compliance of everything registered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegistryValidation {
    /// Registered domains
    pub total_domains: usize,
    /// Compliant domains
    pub valid_domains: usize,
    /// Non-compliant domains
    pub invalid_domains: usize,
    /// Whether every domain is compliant
    pub all_valid: bool,
    /// Per-domain results in registration order
    pub domains: Vec<RegistryDomainEntry>,
    /// Per-relationship results in registration order
    pub relationships: Vec<RegistryRelationshipEntry>,
    /// Registered hierarchy names
    pub hierarchies: Vec<String>,
}

/// Registry validation plus the proof of every member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RegistryProof {
    /// Validation summary
    #[serde(flatten)]
    pub validation: RegistryValidation,
    /// Proof of each domain, keyed by name
    pub domain_proofs: BTreeMap<String, DomainProof>,
    /// Proof of each hierarchy, keyed by name
    pub hierarchy_proofs: BTreeMap<String, HierarchyProof>,
    /// Proof of each relationship in registration order
    pub relationship_proofs: Vec<RelationshipProof>,
    /// Human readable verdict
    pub proof: String,
}

/// Duality given to [`DomainRegistry::create_domain`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualitySpec<'a> {
    /// Positive pole name
    pub positive: &'a str,
    /// Positive pole weight
    pub positive_value: f64,
    /// Negative pole name
    pub negative: &'a str,
    /// Negative pole weight
    pub negative_value: f64,
}

impl<'a> DualitySpec<'a> {
    /// Two named poles with their weights
    pub fn new(positive: &'a str, positive_value: f64, negative: &'a str, negative_value: f64) -> Self {
        Self {
            positive,
            positive_value,
            negative,
            negative_value,
        }
    }
}

/// Domains, hierarchies and relationships under one ledger
#[derive(Debug, Default)]
pub struct DomainRegistry {
    equilibrium: MetaEquilibrium,
    domains: IndexMap<DomainId, Domain>,
    hierarchies: IndexMap<String, DomainHierarchy>,
    relationships: Vec<DomainRelationship>,
}

impl DomainRegistry {
    /// Empty registry with its own ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry sharing `equilibrium`
    pub fn with_equilibrium(equilibrium: MetaEquilibrium) -> Self {
        Self {
            equilibrium,
            ..Self::default()
        }
    }

    /// The ledger shared with created domains
    pub fn equilibrium(&self) -> &MetaEquilibrium {
        &self.equilibrium
    }

    fn check_unique(&self, id: DomainId, name: &str) -> DomainResult<()> {
        if self.domains.contains_key(&id) {
            return Err(DomainError::AlreadyExists(format!(
                "Domain already registered: {name}"
            )));
        }
        if self.get_domain_by_name(name).is_some() {
            return Err(DomainError::AlreadyExists(format!(
                "Domain name already exists: {name}"
            )));
        }
        Ok(())
    }

    fn insert(&mut self, domain: Domain) -> &Domain {
        info!(domain = %domain.name(), id = %domain.id(), "domain registered");
        self.domains.entry(domain.id()).or_insert(domain)
    }

    /// Register a domain.
    ///
    /// Fails on a duplicate id or name. With `require_balanced`, a domain
    /// without a balanced duality is rejected.
    pub fn register_domain(&mut self, domain: Domain, require_balanced: bool) -> DomainResult<&Domain> {
        self.check_unique(domain.id(), domain.name())?;

        if require_balanced && !domain.validate_meta_compliance() {
            warn!(domain = %domain.name(), "rejected non-compliant domain");
            let subject = format!("Domain '{}'", domain.name());
            return Err(match domain.duality() {
                Some(duality) => DomainError::balance_violation(
                    subject,
                    duality.positive().name(),
                    duality.negative().name(),
                    duality.balance(),
                ),
                None => DomainError::BalanceViolation {
                    subject,
                    detail: "no duality set".to_string(),
                },
            });
        }

        Ok(self.insert(domain))
    }

    /// Remove a domain and every registered relationship touching it
    pub fn unregister_domain(&mut self, id: DomainId) -> Option<Domain> {
        let domain = self.domains.shift_remove(&id)?;
        let before = self.relationships.len();
        self.relationships
            .retain(|r| r.source().id != id && r.target().id != id);
        info!(
            domain = %domain.name(),
            relationships_removed = before - self.relationships.len(),
            "domain unregistered"
        );
        Some(domain)
    }

    /// Build a domain on this registry's ledger and register it.
    ///
    /// With a duality the domain is activated and must be balanced; without
    /// one it stays nascent and is registered as is.
    pub fn create_domain(
        &mut self,
        name: impl Into<String>,
        domain_type: DomainType,
        description: impl Into<String>,
        duality: Option<DualitySpec<'_>>,
    ) -> DomainResult<&Domain> {
        let domain = self.build_domain(name, domain_type, description, duality)?;
        self.check_unique(domain.id(), domain.name())?;
        Ok(self.insert(domain))
    }

    /// Same as [`create_domain`](Self::create_domain) without registering
    pub fn build_domain(
        &self,
        name: impl Into<String>,
        domain_type: DomainType,
        description: impl Into<String>,
        duality: Option<DualitySpec<'_>>,
    ) -> DomainResult<Domain> {
        let name = name.into();
        // The duality registers into the shared ledger, so reject a taken name first.
        if self.get_domain_by_name(&name).is_some() {
            return Err(DomainError::AlreadyExists(format!(
                "Domain name already exists: {name}"
            )));
        }

        let mut domain =
            Domain::with_equilibrium(name, domain_type, description, self.equilibrium.clone());
        if let Some(spec) = duality {
            domain.set_duality(
                spec.positive,
                spec.positive_value,
                spec.negative,
                spec.negative_value,
                None,
            )?;
            domain.activate()?;
        }
        Ok(domain)
    }

    /// Look up a domain by id
    pub fn get_domain(&self, id: DomainId) -> Option<&Domain> {
        self.domains.get(&id)
    }

    /// Mutable access to a registered domain
    pub fn get_domain_mut(&mut self, id: DomainId) -> Option<&mut Domain> {
        self.domains.get_mut(&id)
    }

    /// Look up a domain by exact name
    pub fn get_domain_by_name(&self, name: &str) -> Option<&Domain> {
        self.domains.values().find(|d| d.name() == name)
    }

    /// Domains in registration order
    pub fn domains(&self) -> impl Iterator<Item = &Domain> {
        self.domains.values()
    }

    /// Domains matching an optional type and state filter
    pub fn list_domains(
        &self,
        domain_type: Option<DomainType>,
        state: Option<DomainState>,
    ) -> Vec<&Domain> {
        self.domains
            .values()
            .filter(|d| domain_type.is_none() || domain_type == Some(d.domain_type()))
            .filter(|d| state.is_none() || state == Some(d.state()))
            .collect()
    }

    /// Registered domains
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// Register a hierarchy by name.
    ///
    /// Root domains not yet registered are copied in without a balance
    /// requirement. The copies are snapshots: later changes to the hierarchy
    /// are not reflected in the registry's domains.
    pub fn register_hierarchy(&mut self, hierarchy: DomainHierarchy) -> DomainResult<()> {
        if self.hierarchies.contains_key(hierarchy.name()) {
            return Err(DomainError::AlreadyExists(format!(
                "Hierarchy already registered: {}",
                hierarchy.name()
            )));
        }

        for root in hierarchy.root_domains().values() {
            if self.check_unique(root.id(), root.name()).is_ok() {
                self.insert(root.clone());
            } else {
                debug!(hierarchy = %hierarchy.name(), domain = %root.name(), "root already registered");
            }
        }

        info!(hierarchy = %hierarchy.name(), roots = hierarchy.root_domains().len(), "hierarchy registered");
        self.hierarchies.insert(hierarchy.name().to_string(), hierarchy);
        Ok(())
    }

    /// Register an empty hierarchy and return it for filling
    pub fn create_hierarchy(&mut self, name: impl Into<String>) -> DomainResult<&mut DomainHierarchy> {
        let name = name.into();
        if self.hierarchies.contains_key(&name) {
            return Err(DomainError::AlreadyExists(format!(
                "Hierarchy already registered: {name}"
            )));
        }
        info!(hierarchy = %name, "hierarchy created");
        Ok(self
            .hierarchies
            .entry(name.clone())
            .or_insert_with(|| DomainHierarchy::new(name)))
    }

    /// Look up a hierarchy
    pub fn get_hierarchy(&self, name: &str) -> Option<&DomainHierarchy> {
        self.hierarchies.get(name)
    }

    /// Registered hierarchies
    pub fn hierarchy_count(&self) -> usize {
        self.hierarchies.len()
    }

    /// Register a relationship between two registered domains
    pub fn register_relationship(&mut self, relationship: DomainRelationship) -> DomainResult<()> {
        for end in [relationship.source(), relationship.target()] {
            if !self.domains.contains_key(&end.id) {
                return Err(DomainError::NotFound(format!("domain {}", end.name)));
            }
        }
        if !relationship.is_balanced() {
            return Err(DomainError::balance_violation(
                format!("Relationship '{}'", relationship.name()),
                "give",
                "receive",
                calculate_balance(relationship.influence_give(), relationship.influence_receive()),
            ));
        }

        debug!(relationship = %relationship.name(), "relationship registered");
        self.relationships.push(relationship);
        Ok(())
    }

    /// Relate two registered domains, splitting `influence` evenly between
    /// give and receive. The relationship is also added to the source domain.
    pub fn create_relationship(
        &mut self,
        name: impl Into<String>,
        source_id: DomainId,
        target_id: DomainId,
        influence: f64,
    ) -> DomainResult<DomainRelationship> {
        let source = self
            .domains
            .get(&source_id)
            .ok_or_else(|| DomainError::NotFound(format!("domain {source_id}")))?;
        let target = self
            .domains
            .get(&target_id)
            .ok_or_else(|| DomainError::NotFound(format!("domain {target_id}")))?;

        let half = influence / 2.0;
        let relationship = DomainRelationship::new(name, source, target, half, half)?;

        if let Some(source) = self.domains.get_mut(&source_id) {
            source.add_relationship(relationship.clone());
        }
        info!(
            relationship = %relationship.name(),
            source = %relationship.source().name,
            target = %relationship.target().name,
            influence,
            "relationship created"
        );
        self.relationships.push(relationship.clone());
        Ok(relationship)
    }

    /// Relationships with `id` at either end
    pub fn get_relationships(&self, id: DomainId) -> Vec<&DomainRelationship> {
        self.relationships
            .iter()
            .filter(|r| r.source().id == id || r.target().id == id)
            .collect()
    }

    /// Every registered relationship
    pub fn relationships(&self) -> &[DomainRelationship] {
        &self.relationships
    }

    /// Check every domain and relationship
    pub fn validate_all(&self) -> RegistryValidation {
        let domains: Vec<RegistryDomainEntry> = self
            .domains
            .values()
            .map(|d| RegistryDomainEntry {
                name: d.name().to_string(),
                domain_type: d.domain_type(),
                state: d.state(),
                meta_valid: d.validate_meta_compliance(),
            })
            .collect();
        let valid_domains = domains.iter().filter(|d| d.meta_valid).count();

        RegistryValidation {
            total_domains: domains.len(),
            valid_domains,
            invalid_domains: domains.len() - valid_domains,
            all_valid: valid_domains == domains.len(),
            domains,
            relationships: self
                .relationships
                .iter()
                .map(|r| RegistryRelationshipEntry {
                    name: r.name().to_string(),
                    balanced: r.is_balanced(),
                })
                .collect(),
            hierarchies: self.hierarchies.keys().cloned().collect(),
        }
    }

    /// Validation plus the proof of every domain, hierarchy and relationship
    pub fn prove_registry_meta_meaning(&self) -> RegistryProof {
        let validation = self.validate_all();
        if !validation.all_valid {
            warn!(invalid = validation.invalid_domains, "registry has non-compliant domains");
        }

        RegistryProof {
            domain_proofs: self
                .domains
                .values()
                .map(|d| (d.name().to_string(), d.prove_meta_meaning()))
                .collect(),
            hierarchy_proofs: self
                .hierarchies
                .iter()
                .map(|(name, h)| (name.clone(), h.prove_meta_meaning()))
                .collect(),
            relationship_proofs: self
                .relationships
                .iter()
                .map(DomainRelationship::prove_meta_meaning)
                .collect(),
            proof: if validation.all_valid {
                "Registry maintains META 50/50 equilibrium".to_string()
            } else {
                "Registry contains domains violating META 50/50".to_string()
            },
            validation,
        }
    }
}

impl fmt::Display for DomainRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DomainRegistry(domains={}, hierarchies={})",
            self.domains.len(),
            self.hierarchies.len()
        )
    }
}
