// Copyright 2025 Cowboy AI, LLC.

//! A forest of domains validated together
//!
//! Roots are stored by name; each root owns its sub-domain tree. Traversal is
//! pre-order, roots in insertion order, and each domain id is visited once.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::model::Domain;
use super::proof::{DomainValidation, HierarchyProof, HierarchyValidation};
use crate::identifiers::DomainId;

/// Named collection of root domains
#[derive(Debug, Clone, Default)]
pub struct DomainHierarchy {
    name: String,
    root_domains: IndexMap<String, Domain>,
}

impl DomainHierarchy {
    /// Create an empty hierarchy
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root_domains: IndexMap::new(),
        }
    }

    /// Hierarchy name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a root domain. A root with the same name is replaced.
    pub fn add_root_domain(&mut self, domain: Domain) {
        debug!(hierarchy = %self.name, domain = %domain.name(), "root domain added");
        if let Some(previous) = self.root_domains.insert(domain.name().to_string(), domain) {
            debug!(hierarchy = %self.name, domain = %previous.name(), "root domain replaced");
        }
    }

    /// Root domains in insertion order
    pub fn root_domains(&self) -> &IndexMap<String, Domain> {
        &self.root_domains
    }

    /// Look up a root by name
    pub fn root_domain(&self, name: &str) -> Option<&Domain> {
        self.root_domains.get(name)
    }

    /// Mutable access to a root
    pub fn root_domain_mut(&mut self, name: &str) -> Option<&mut Domain> {
        self.root_domains.get_mut(name)
    }

    /// Every reachable domain in pre-order, each id once
    pub fn domains(&self) -> Vec<&Domain> {
        let mut seen: HashSet<DomainId> = HashSet::new();
        let mut visited = Vec::new();
        let mut stack: Vec<&Domain> = self.root_domains.values().rev().collect();

        while let Some(domain) = stack.pop() {
            if !seen.insert(domain.id()) {
                continue;
            }
            visited.push(domain);
            stack.extend(domain.sub_domains().values().rev());
        }
        visited
    }

    /// Number of distinct domains reachable from every root
    pub fn total_domains(&self) -> usize {
        self.domains().len()
    }

    /// Find a domain anywhere in the forest
    pub fn get_domain(&self, id: DomainId) -> Option<&Domain> {
        self.domains().into_iter().find(|d| d.id() == id)
    }

    /// First domain in pre-order with this exact name
    pub fn get_domain_by_name(&self, name: &str) -> Option<&Domain> {
        self.domains().into_iter().find(|d| d.name() == name)
    }

    /// Check every domain's META compliance
    pub fn validate_hierarchy(&self) -> HierarchyValidation {
        let domains: Vec<DomainValidation> = self
            .domains()
            .into_iter()
            .map(|d| DomainValidation {
                name: d.name().to_string(),
                valid: d.validate_meta_compliance(),
                state: d.state(),
            })
            .collect();
        let all_valid = domains.iter().all(|d| d.valid);

        if !all_valid {
            let invalid: Vec<&str> = domains
                .iter()
                .filter(|d| !d.valid)
                .map(|d| d.name.as_str())
                .collect();
            warn!(hierarchy = %self.name, ?invalid, "hierarchy has non-compliant domains");
        }

        HierarchyValidation {
            hierarchy: self.name.clone(),
            total_domains: domains.len(),
            root_domains: self.root_domains.len(),
            all_valid,
            proof: if all_valid {
                format!("Hierarchy '{}' maintains META 50/50", self.name)
            } else {
                format!("Hierarchy '{}' has invalid domains", self.name)
            },
            domains,
        }
    }

    /// Validation plus the proof of each root domain
    pub fn prove_meta_meaning(&self) -> HierarchyProof {
        let root_domain_proofs: BTreeMap<_, _> = self
            .root_domains
            .iter()
            .map(|(name, domain)| (name.clone(), domain.prove_meta_meaning()))
            .collect();

        HierarchyProof {
            validation: self.validate_hierarchy(),
            root_domain_proofs,
        }
    }
}

impl fmt::Display for DomainHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DomainHierarchy({}, domains={})",
            self.name,
            self.total_domains()
        )
    }
}
