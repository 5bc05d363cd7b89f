//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//! Single-entity lookups report a missing row as `Ok(None)`, never as an error.

use async_trait::async_trait;

use crate::domain::entities::{Owner, OwnerId, PetType, Vet};
use crate::domain::pagination::{Page, PageRequest};
use crate::error::DomainError;

/// Repository for the Owner aggregate (owner, pets, visits)
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Find owners whose last name starts with `prefix` (empty matches all)
    async fn find_by_last_name_starting_with(
        &self,
        prefix: &str,
        page: &PageRequest,
    ) -> Result<Page<Owner>, DomainError>;

    /// Find an owner by ID
    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError>;

    /// Insert or update the whole aggregate in one transaction.
    ///
    /// Returns the stored aggregate with identifiers assigned.
    async fn save(&self, owner: &Owner) -> Result<Owner, DomainError>;
}

/// Repository for Vet entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// All vets in storage order
    async fn find_all(&self) -> Result<Vec<Vet>, DomainError>;

    /// One page of vets
    async fn find_all_paged(&self, page: &PageRequest) -> Result<Page<Vet>, DomainError>;
}

/// Repository for PetType entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetTypeRepository: Send + Sync {
    /// All pet types in storage order
    async fn find_all(&self) -> Result<Vec<PetType>, DomainError>;
}
