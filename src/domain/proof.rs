// Copyright 2025 Cowboy AI, LLC.

//! Proof records
//!
//! Every `prove_*` operation returns one of these structures. They are plain
//! data: serialize them with `serde_json` to get the nested report shape
//! (`{"domain": .., "type": "fundamental", "meta_valid": true, ..}`).

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::model::DomainType;
use crate::state_machine::DomainState;

/// One pole inside a duality proof
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PoleProof {
    /// Pole name
    pub name: String,
    /// Pole weight
    pub value: f64,
    /// Share of the duality's total energy, in percent
    pub percentage: f64,
}

/// Balance snapshot of a duality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DualityProof {
    /// Duality name
    pub name: String,
    /// Positive pole
    pub positive: PoleProof,
    /// Negative pole
    pub negative: PoleProof,
    /// Whether the poles carry equal weight
    pub is_balanced: bool,
}

/// Proof that an attribute operates at 52/48
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AttributeProof {
    /// Attribute name
    pub name: String,
    /// Total value
    pub total: f64,
    /// Structural component
    pub structure: f64,
    /// Flexible component
    pub flexibility: f64,
    /// Split formatted as whole percentages, e.g. `52/48`
    pub ratio: String,
    /// Always true: the split is derived, never stored
    pub is_operational: bool,
}

/// Proof that a domain maintains META 50/50
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DomainProof {
    /// Domain name
    pub domain: String,
    /// Domain type
    #[serde(rename = "type")]
    pub domain_type: DomainType,
    /// Lifecycle state at proof time
    pub state: DomainState,
    /// Whether the domain has a balanced duality
    pub meta_valid: bool,
    /// Duality snapshot, absent when no duality is set
    pub duality: Option<DualityProof>,
    /// One proof per attribute, in insertion order
    pub attributes: Vec<AttributeProof>,
    /// Number of direct sub-domains
    pub sub_domains_count: usize,
    /// Whether every direct sub-domain is compliant
    pub sub_domains_valid: bool,
    /// Human readable verdict
    pub proof: String,
}

/// Proof that a relationship's influence is balanced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RelationshipProof {
    /// Relationship name
    pub name: String,
    /// Source domain name
    pub source: String,
    /// Target domain name
    pub target: String,
    /// Relationship kind, e.g. `bidirectional`
    #[serde(rename = "type")]
    pub relationship_type: String,
    /// Influence given
    pub give: f64,
    /// Influence received
    pub receive: f64,
    /// Balance formatted as `gg.gg/rr.rr`
    pub balance: String,
    /// Whether give equals receive
    pub is_balanced: bool,
    /// Human readable verdict
    pub proof: String,
}

/// Compliance of one domain inside a hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DomainValidation {
    /// Domain name
    pub name: String,
    /// Whether it is META compliant
    pub valid: bool,
    /// Its lifecycle state
    pub state: DomainState,
}

/// Result of validating a whole hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HierarchyValidation {
    /// Hierarchy name
    pub hierarchy: String,
    /// Distinct domains reachable from the roots
    pub total_domains: usize,
    /// Number of root domains
    pub root_domains: usize,
    /// Whether every domain is META compliant
    pub all_valid: bool,
    /// Per-domain results in traversal order
    pub domains: Vec<DomainValidation>,
    /// Human readable verdict
    pub proof: String,
}

/// Complete META proof for a hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HierarchyProof {
    /// Validation summary
    #[serde(flatten)]
    pub validation: HierarchyValidation,
    /// Proof of each root domain, keyed by name
    pub root_domain_proofs: BTreeMap<String, DomainProof>,
}
