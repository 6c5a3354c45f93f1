// Copyright 2025 Cowboy AI, LLC.

//! Knowledge layer
//!
//! Concepts, concept relations and seeded subject areas on top of the core
//! domain model.

pub mod catalog;
pub mod concepts;
pub mod knowledge_domain;

pub use catalog::seed_hierarchy;
pub use concepts::{Concept, ConceptRelation, ConceptType, RelationType};
pub use knowledge_domain::{DomainSeed, DomainStats, DualitySeed, KnowledgeDomain, KnowledgeProof};
