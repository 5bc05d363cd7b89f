//! Pet domain entity
//!
//! A pet belongs to exactly one owner and owns its visits. Visits keep
//! the order in which they were added, not visit-date order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PetId, PetType, Visit};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: Option<PetId>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub pet_type: Option<PetType>,
    visits: Vec<Visit>,
}

impl Pet {
    /// A new (unsaved) pet
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, pet_type: PetType) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            birth_date: Some(birth_date),
            pet_type: Some(pet_type),
            visits: Vec::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Append a visit; no de-duplication is performed
    pub fn add_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    pub(crate) fn visits_mut(&mut self) -> &mut [Visit] {
        &mut self.visits
    }

    /// Case-insensitive name comparison; an unset name never matches
    pub(crate) fn has_name(&self, name: &str) -> bool {
        self.name.as_deref().is_some_and(|own| {
            own.chars()
                .flat_map(char::to_lowercase)
                .eq(name.chars().flat_map(char::to_lowercase))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_name_ignores_case() {
        let pet = Pet::new("Leo", NaiveDate::from_ymd_opt(2020, 9, 7).unwrap(), PetType::new(1, "cat"));

        assert!(pet.has_name("leo"));
        assert!(pet.has_name("LEO"));
        assert!(!pet.has_name("Leon"));
    }

    #[test]
    fn unnamed_pet_never_matches() {
        let pet = Pet::default();
        assert!(!pet.has_name(""));
    }

    #[test]
    fn visits_keep_entry_order() {
        let mut pet = Pet::default();
        pet.add_visit(Visit::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), "second by date"));
        pet.add_visit(Visit::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "first by date"));

        let descriptions: Vec<_> = pet
            .visits()
            .iter()
            .map(|v| v.description.as_deref().unwrap())
            .collect();
        assert_eq!(descriptions, vec!["second by date", "first by date"]);
    }
}
