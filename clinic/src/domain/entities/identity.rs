//! Identifier and name values shared by the clinic entities
//!
//! An entity is *new* while its `id` is `None`; storage assigns the
//! identifier on first save.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for an owner
    OwnerId
);
entity_id!(
    /// Unique identifier for a pet
    PetId
);
entity_id!(
    /// Unique identifier for a pet type
    PetTypeId
);
entity_id!(
    /// Unique identifier for a visit
    VisitId
);
entity_id!(
    /// Unique identifier for a vet
    VetId
);
entity_id!(
    /// Unique identifier for a specialty
    SpecialtyId
);

/// First and last name of a person (owners and vets)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
