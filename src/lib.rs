// Copyright 2025 Cowboy AI, LLC.

//! # CIM Equilibrium
//!
//! Knowledge domains held in META 50/50 equilibrium.
//!
//! This crate provides an in-memory model for seeding a knowledge base:
//! - **Poles and Dualities**: paired opposing concepts whose two poles must
//!   carry exactly equal weight
//! - **Attributes**: values operating at 52/48 (structure/flexibility)
//! - **Domains**: aggregates with a guarded lifecycle
//!   (nascent, active, evolving, stable, archived)
//! - **Relationships**: balanced influence between two domains
//! - **Hierarchies**: forests of domains validated together
//! - **MetaEquilibrium**: a shared ledger of every balance-validated pair
//! - **DomainRegistry**: domains, hierarchies and relationships under one ledger
//! - **Knowledge layer**: concepts, concept relations and seeded subject areas
//! - **Verification**: scored validators and rule-based claim verification
//!
//! ## Proportions
//!
//! 1. **META level (50/50)**: absolute balance, checked with exact equality
//! 2. **Operational level (52/48)**: structure is `round(total * 0.52)` and
//!    flexibility is the remainder, so the parts always sum to the total.
//!    52 is `round(π/6 * 100)`, see [`Pi6Proportion`].
//!
//! ```rust
//! use cim_equilibrium::{Domain, DomainHierarchy, DomainType, MetaEquilibrium};
//!
//! let meta = MetaEquilibrium::new();
//! let mut physics = Domain::with_equilibrium("Physics", DomainType::Fundamental, "", meta.clone());
//! physics.set_duality("matter", 100.0, "antimatter", 100.0, Some("md"))?;
//! physics.activate()?;
//!
//! let mut science = DomainHierarchy::new("Science");
//! science.add_root_domain(physics);
//!
//! assert!(science.validate_hierarchy().all_valid);
//! assert!(meta.contains("Physics_duality"));
//! # Ok::<(), cim_equilibrium::DomainError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod equilibrium;
mod errors;
mod identifiers;
mod proportions;
mod registry;
mod state_machine;
pub mod domain;
pub mod knowledge;
pub mod verification;

// Re-export core types
pub use config::{EquilibriumPolicy, FLEXIBILITY_SHARE, STRUCTURE_SHARE};
pub use equilibrium::{
    calculate_balance, verify_balance, verify_balance_within, EquilibriumAudit, MetaEquilibrium,
    SubParameter, SubParameterProof,
};
pub use errors::{DomainError, DomainResult};
pub use identifiers::{ClaimId, ConceptId, DomainId, RelationId, VerificationId};
pub use proportions::{
    split_balanced, split_operational, OperationalProof, OperationalRatio, OperationalSplit,
    PairValidation, Pi6Connection, Pi6Proportion, ProportionLevel, ProportionProof,
    ProportionValidator, Ratio, RatioSummary, RatioValidation, OPERATIONAL_TOLERANCE, PI_OVER_6,
};
pub use registry::{
    DomainRegistry, DualitySpec, RegistryDomainEntry, RegistryProof, RegistryRelationshipEntry,
    RegistryValidation,
};
pub use state_machine::{DomainState, State, StateTransition, StateTransitions};

pub use domain::{
    AttributeProof, Domain, DomainAttribute, DomainDuality, DomainHierarchy, DomainPole,
    DomainProof, DomainRef, DomainRelationship, DomainType, DomainValidation, DualityProof,
    HierarchyProof, HierarchyValidation, PoleProof, RelationshipProof,
};
pub use knowledge::{
    catalog, seed_hierarchy, Concept, ConceptRelation, ConceptType, DomainSeed, DomainStats,
    DualitySeed, KnowledgeDomain, KnowledgeProof, RelationType,
};
pub use verification::{
    ValidationReport, ValidationSeverity, Validator, VerificationChain, VerificationClaim,
    VerificationResult, VerificationStatus, Verifier,
};
