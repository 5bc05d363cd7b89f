//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Owner, OwnerId, PetId, PetType, Vet, VisitId};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::ports::{OwnerRepository, PetTypeRepository, VetRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Owner Repository
// ============================================================================

/// Owner store that assigns identifiers on save, like a database sequence
#[derive(Default)]
pub struct InMemoryOwnerRepository {
    owners: Arc<RwLock<BTreeMap<OwnerId, Owner>>>,
    next_owner_id: AtomicI32,
    next_pet_id: AtomicI32,
    next_visit_id: AtomicI32,
    saves: AtomicUsize,
    fail: bool,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with an owner for testing. Missing ids are assigned.
    pub fn with_owner(self, owner: Owner) -> Self {
        let owner = self.assign_ids(owner);
        self.owners
            .write()
            .unwrap()
            .insert(owner.id.unwrap(), owner);
        self
    }

    /// Number of successful `save` calls
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Stored state of an owner, bypassing the port
    pub fn stored(&self, id: OwnerId) -> Option<Owner> {
        self.owners.read().unwrap().get(&id).cloned()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn next(counter: &AtomicI32) -> i32 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn assign_ids(&self, mut owner: Owner) -> Owner {
        // Keep the sequences ahead of ids that came in pre-assigned.
        if let Some(id) = owner.id {
            self.next_owner_id.fetch_max(id.0, Ordering::SeqCst);
        }
        for pet in owner.pets() {
            if let Some(id) = pet.id {
                self.next_pet_id.fetch_max(id.0, Ordering::SeqCst);
            }
            for visit in pet.visits() {
                if let Some(id) = visit.id {
                    self.next_visit_id.fetch_max(id.0, Ordering::SeqCst);
                }
            }
        }

        if owner.id.is_none() {
            owner.id = Some(OwnerId(Self::next(&self.next_owner_id)));
        }
        for pet in owner.pets_mut() {
            if pet.id.is_none() {
                pet.id = Some(PetId(Self::next(&self.next_pet_id)));
            }
            for visit in pet.visits_mut() {
                if visit.id.is_none() {
                    visit.id = Some(VisitId(Self::next(&self.next_visit_id)));
                }
            }
        }
        owner
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn find_by_last_name_starting_with(
        &self,
        prefix: &str,
        page: &PageRequest,
    ) -> Result<Page<Owner>, DomainError> {
        self.check()?;
        let owners = self.owners.read().unwrap();
        let matching: Vec<Owner> = owners
            .values()
            .filter(|o| o.name.last_name.starts_with(prefix))
            .cloned()
            .collect();
        Ok(Page::from_all(matching, *page))
    }

    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError> {
        self.check()?;
        Ok(self.owners.read().unwrap().get(id).cloned())
    }

    async fn save(&self, owner: &Owner) -> Result<Owner, DomainError> {
        self.check()?;
        let saved = self.assign_ids(owner.clone());
        if let Some(id) = saved.id {
            self.owners.write().unwrap().insert(id, saved.clone());
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(saved)
    }
}

// ============================================================================
// In-Memory Vet Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryVetRepository {
    vets: Arc<RwLock<Vec<Vet>>>,
}

impl InMemoryVetRepository {
    pub fn with_vets(vets: Vec<Vet>) -> Self {
        Self {
            vets: Arc::new(RwLock::new(vets)),
        }
    }
}

#[async_trait]
impl VetRepository for InMemoryVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>, DomainError> {
        Ok(self.vets.read().unwrap().clone())
    }

    async fn find_all_paged(&self, page: &PageRequest) -> Result<Page<Vet>, DomainError> {
        Ok(Page::from_all(self.vets.read().unwrap().clone(), *page))
    }
}

// ============================================================================
// In-Memory Pet Type Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPetTypeRepository {
    types: Arc<RwLock<Vec<PetType>>>,
}

impl InMemoryPetTypeRepository {
    pub fn with_types(types: Vec<PetType>) -> Self {
        Self {
            types: Arc::new(RwLock::new(types)),
        }
    }
}

#[async_trait]
impl PetTypeRepository for InMemoryPetTypeRepository {
    async fn find_all(&self) -> Result<Vec<PetType>, DomainError> {
        Ok(self.types.read().unwrap().clone())
    }
}
