//! Pet use cases
//!
//! Adding and editing pets on an owner, plus the business checks a pet
//! form runs before saving (name uniqueness and birth date).

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use validator::ValidationErrors;

use super::validation::{Rejections, BIRTH_DATE_MISMATCH, DUPLICATE};
use crate::domain::entities::{Owner, Pet, PetId};
use crate::domain::ports::OwnerRepository;
use crate::error::DomainError;

/// Service for pets. Pets are saved through their owner.
pub struct PetService<OR>
where
    OR: OwnerRepository,
{
    owners: Arc<OR>,
}

impl<OR> PetService<OR>
where
    OR: OwnerRepository,
{
    pub fn new(owners: Arc<OR>) -> Self {
        Self { owners }
    }

    /// Add a new pet to `owner` and save the owner.
    ///
    /// The caller's owner is left untouched; the saved copy is returned.
    pub async fn create_pet(&self, owner: &Owner, pet: Pet) -> Result<Owner, DomainError> {
        let mut owner = owner.clone();
        owner.add_pet(pet);

        let saved = self.owners.save(&owner).await?;
        tracing::info!(owner_id = ?saved.id, pets = saved.pets().len(), "Created pet");
        Ok(saved)
    }

    /// Overwrite name, birth date and type of the owner's pet with
    /// `pet.id`, or add `pet` as new when the owner has no such pet.
    pub async fn update_pet(&self, owner: &Owner, pet: Pet) -> Result<Owner, DomainError> {
        let mut owner = owner.clone();

        match pet.id.and_then(|id| owner.get_pet_mut(&id)) {
            Some(existing) => {
                existing.name = pet.name;
                existing.birth_date = pet.birth_date;
                existing.pet_type = pet.pet_type;
            }
            None => owner.add_pet(pet),
        }

        let saved = self.owners.save(&owner).await?;
        tracing::info!(owner_id = ?saved.id, "Updated pet");
        Ok(saved)
    }

    /// True when `name` is blank, or when no pet of `owner` carries it
    /// other than the pet identified by `excluded`.
    pub fn is_pet_name_unique_for_owner(
        &self,
        owner: &Owner,
        name: Option<&str>,
        excluded: Option<PetId>,
    ) -> bool {
        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return true;
        };
        owner
            .get_pet_by_name(name, false)
            .map_or(true, |existing| existing.id == excluded)
    }

    /// True when `date` is absent or not after today
    pub fn is_birth_date_valid(&self, date: Option<NaiveDate>) -> bool {
        self.is_birth_date_valid_on(date, Local::now().date_naive())
    }

    pub fn is_birth_date_valid_on(&self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        date.map_or(true, |d| d <= today)
    }

    /// Run the uniqueness and birth date checks for a submitted pet
    pub fn check_pet(&self, owner: &Owner, pet: &Pet) -> Result<(), ValidationErrors> {
        let mut rejections = Rejections::default();

        if !self.is_pet_name_unique_for_owner(owner, pet.name.as_deref(), pet.id) {
            rejections.reject("name", DUPLICATE);
        }
        if !self.is_birth_date_valid(pet.birth_date) {
            rejections.reject("birthDate", BIRTH_DATE_MISMATCH);
        }

        rejections.into_result()
    }
}
