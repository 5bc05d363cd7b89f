//! Owner aggregate root
//!
//! An owner owns its pets (and through them, their visits). The pet list
//! never holds two pets with the same identifier: `add_pet` only admits
//! new pets, and pets loaded from storage go through `restore_pet`.

use serde::{Deserialize, Serialize};

use super::{OwnerId, PersonName, Pet, PetId, Visit};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: Option<OwnerId>,
    pub name: PersonName,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
    pets: Vec<Pet>,
}

impl Owner {
    /// A new (unsaved) owner without pets
    pub fn new(
        name: PersonName,
        address: impl Into<String>,
        city: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name,
            address: Some(address.into()),
            city: Some(city.into()),
            telephone: Some(telephone.into()),
            pets: Vec::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Add a pet to this owner.
    ///
    /// Only new pets are admitted; a pet that already has an identifier is
    /// ignored so a loaded pet cannot be added twice.
    pub fn add_pet(&mut self, pet: Pet) {
        if pet.is_new() {
            self.pets.push(pet);
        }
    }

    /// Find a persisted pet by identifier
    pub fn get_pet(&self, id: &PetId) -> Option<&Pet> {
        self.pets
            .iter()
            .find(|pet| !pet.is_new() && pet.id.as_ref() == Some(id))
    }

    /// Mutable variant of [`Owner::get_pet`]
    pub fn get_pet_mut(&mut self, id: &PetId) -> Option<&mut Pet> {
        self.pets
            .iter_mut()
            .find(|pet| !pet.is_new() && pet.id.as_ref() == Some(id))
    }

    /// Find a pet by name, ignoring case.
    ///
    /// With `ignore_new` set, pets that have not been saved yet are skipped.
    pub fn get_pet_by_name(&self, name: &str, ignore_new: bool) -> Option<&Pet> {
        self.pets
            .iter()
            .find(|pet| pet.has_name(name) && (!ignore_new || !pet.is_new()))
    }

    /// Attach a visit to the persisted pet with `pet_id`.
    ///
    /// Does nothing when the owner has no such pet.
    pub fn add_visit(&mut self, pet_id: &PetId, visit: Visit) {
        if let Some(pet) = self.get_pet_mut(pet_id) {
            pet.add_visit(visit);
        }
    }

    /// Attach a pet loaded from storage, keeping identifiers unique
    pub(crate) fn restore_pet(&mut self, pet: Pet) {
        let duplicate = pet
            .id
            .is_some_and(|id| self.pets.iter().any(|existing| existing.id == Some(id)));
        if !duplicate {
            self.pets.push(pet);
        }
    }

    pub(crate) fn pets_mut(&mut self) -> &mut [Pet] {
        &mut self.pets
    }
}
