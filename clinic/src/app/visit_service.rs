//! Visit use cases

use std::sync::Arc;

use crate::domain::entities::{Owner, PetId, Visit};
use crate::domain::ports::OwnerRepository;
use crate::error::DomainError;

/// Service for visits. Visits are saved through their pet's owner.
pub struct VisitService<OR>
where
    OR: OwnerRepository,
{
    owners: Arc<OR>,
}

impl<OR> VisitService<OR>
where
    OR: OwnerRepository,
{
    pub fn new(owners: Arc<OR>) -> Self {
        Self { owners }
    }

    /// Attach `visit` to the owner's pet and save the owner.
    ///
    /// Unlike `Owner::add_visit`, an unknown pet is an error here
    /// (`PetNotFound`), and nothing is saved.
    pub async fn create_visit(
        &self,
        owner: &Owner,
        pet_id: PetId,
        visit: Visit,
    ) -> Result<Owner, DomainError> {
        if owner.get_pet(&pet_id).is_none() {
            let owner_id = owner
                .id
                .map_or_else(|| "none".to_string(), |id| id.to_string());
            tracing::warn!(pet_id = %pet_id, owner_id = %owner_id, "Visit for unknown pet");
            return Err(DomainError::PetNotFound(format!(
                "Pet with id {} not found for owner with id {}.",
                pet_id, owner_id
            )));
        }

        let mut owner = owner.clone();
        owner.add_visit(&pet_id, visit);

        let saved = self.owners.save(&owner).await?;
        tracing::info!(owner_id = ?saved.id, pet_id = %pet_id, "Created visit");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::test_utils::{george_franklin, george_with_leo, InMemoryOwnerRepository};

    fn rabies_shot() -> Visit {
        Visit::new(NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(), "Rabies shot")
    }

    #[tokio::test]
    async fn create_visit_for_known_pet() {
        let owner = george_with_leo();
        let repo = Arc::new(InMemoryOwnerRepository::new().with_owner(owner.clone()));
        let service = VisitService::new(repo.clone());

        let saved = service.create_visit(&owner, PetId(1), rabies_shot()).await.unwrap();

        let visits = saved.get_pet(&PetId(1)).unwrap().visits();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].description.as_deref(), Some("Rabies shot"));
        assert!(visits[0].id.is_some());
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn create_visit_for_unknown_pet_fails() {
        let owner = george_with_leo();
        let repo = Arc::new(InMemoryOwnerRepository::new().with_owner(owner.clone()));
        let service = VisitService::new(repo.clone());

        let result = service.create_visit(&owner, PetId(999), rabies_shot()).await;

        match result {
            Err(DomainError::PetNotFound(msg)) => {
                assert_eq!(msg, "Pet with id 999 not found for owner with id 1.")
            }
            other => panic!("expected PetNotFound, got {:?}", other),
        }
        assert_eq!(repo.save_count(), 0);
        assert!(owner.get_pet(&PetId(1)).unwrap().visits().is_empty());
    }

    #[tokio::test]
    async fn create_visit_on_owner_without_pets_fails() {
        let service = VisitService::new(Arc::new(InMemoryOwnerRepository::new()));

        let result = service.create_visit(&george_franklin(), PetId(1), rabies_shot()).await;

        assert!(matches!(result, Err(DomainError::PetNotFound(_))));
    }

    #[tokio::test]
    async fn storage_failure_propagates() {
        let service = VisitService::new(Arc::new(InMemoryOwnerRepository::failing()));

        let result = service.create_visit(&george_with_leo(), PetId(1), rabies_shot()).await;

        assert!(matches!(result, Err(DomainError::Database(_))));
    }
}
