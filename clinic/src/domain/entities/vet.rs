//! Vet domain entity

use serde::{Deserialize, Serialize};

use super::{PersonName, Specialty, VetId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vet {
    pub id: Option<VetId>,
    pub name: PersonName,
    specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(name: PersonName) -> Self {
        Self {
            id: None,
            name,
            specialties: Vec::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Specialties sorted by name (plain ordinal string order).
    ///
    /// The stored order is left untouched.
    pub fn specialties(&self) -> Vec<&Specialty> {
        let mut sorted: Vec<&Specialty> = self.specialties.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    /// Append a specialty; duplicates are kept
    pub fn add_specialty(&mut self, specialty: Specialty) {
        self.specialties.push(specialty);
    }

    /// Specialties in the order they were added
    pub(crate) fn specialties_in_entry_order(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn specialty_count(&self) -> usize {
        self.specialties.len()
    }
}
