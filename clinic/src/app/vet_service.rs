//! Vet use cases

use std::sync::Arc;

use crate::domain::entities::Vet;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::ports::VetRepository;
use crate::error::DomainError;

/// Service for vets
pub struct VetService<VR>
where
    VR: VetRepository,
{
    vets: Arc<VR>,
}

impl<VR> VetService<VR>
where
    VR: VetRepository,
{
    pub fn new(vets: Arc<VR>) -> Self {
        Self { vets }
    }

    /// All vets, unpaginated
    pub async fn find_all(&self) -> Result<Vec<Vet>, DomainError> {
        self.vets.find_all().await
    }

    /// One page of vets; `page_number` is one-based
    pub async fn find_all_paged(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<Page<Vet>, DomainError> {
        let request = PageRequest::from_page_number(page_number, page_size);
        tracing::debug!(page = request.page, size = request.size, "Listing vets");
        self.vets.find_all_paged(&request).await
    }
}
