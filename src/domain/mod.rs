// Copyright 2025 Cowboy AI, LLC.

//! Knowledge domain model
//!
//! Value objects (poles, dualities, attributes), the [`Domain`] aggregate,
//! relationships between domains, hierarchies of domains and the proof
//! records they produce.

pub mod hierarchy;
pub mod model;
pub mod proof;
pub mod relationship;
pub mod value_objects;

pub use hierarchy::DomainHierarchy;
pub use model::{Domain, DomainType};
pub use proof::{
    AttributeProof, DomainProof, DomainValidation, DualityProof, HierarchyProof,
    HierarchyValidation, PoleProof, RelationshipProof,
};
pub use relationship::{DomainRef, DomainRelationship, BIDIRECTIONAL};
pub use value_objects::{DomainAttribute, DomainDuality, DomainPole};
