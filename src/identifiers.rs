// Copyright 2025 Cowboy AI, LLC.

//! Identifier types for domains, concepts, concept relations and verifications
//!
//! Domains are entities: their id is generated once on creation and survives
//! every state transition. Concepts and relations are local to the domain
//! that created them but still carry a globally unique id so that relations
//! can reference concepts without borrowing them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create from a UUID
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<&$name> for Uuid {
            fn from(id: &$name) -> Self {
                id.0
            }
        }
    };
}

uuid_identifier!(
    /// Domain ID - the persistent identity of a knowledge domain
    DomainId
);

uuid_identifier!(
    /// Concept ID - identifies a concept within the knowledge layer
    ConceptId
);

uuid_identifier!(
    /// Relation ID - identifies a relation between two concepts
    RelationId
);

uuid_identifier!(
    /// Claim ID - identifies a claim submitted to a verifier
    ClaimId
);

uuid_identifier!(
    /// Verification ID - identifies one verification result
    VerificationId
);
