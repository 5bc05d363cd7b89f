//! Specialty domain entity

use serde::{Deserialize, Serialize};

use super::SpecialtyId;

/// A veterinary specialty (e.g. radiology)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: Option<SpecialtyId>,
    pub name: String,
}

impl Specialty {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: Some(SpecialtyId(id)),
            name: name.into(),
        }
    }

    /// A specialty that has not been stored yet
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}
