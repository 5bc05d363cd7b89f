//! Owner use cases
//!
//! Lookup, paged last-name search, and save of the Owner aggregate.

use std::sync::Arc;

use crate::domain::entities::{Owner, OwnerId};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::ports::OwnerRepository;
use crate::error::DomainError;

/// Outcome of an owner search by last name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerSearch {
    /// Nothing on the requested page
    NoMatch,
    /// Exactly one owner matched overall
    Single(Owner),
    Many(Page<Owner>),
}

/// Service for owners
pub struct OwnerService<OR>
where
    OR: OwnerRepository,
{
    owners: Arc<OR>,
    page_size: u64,
}

impl<OR> OwnerService<OR>
where
    OR: OwnerRepository,
{
    /// `page_size` is used by [`OwnerService::search`]
    pub fn new(owners: Arc<OR>, page_size: u64) -> Self {
        Self { owners, page_size }
    }

    /// Find an owner by ID, failing with `NotFound` when absent
    pub async fn find_by_id(&self, id: OwnerId) -> Result<Owner, DomainError> {
        tracing::debug!(owner_id = %id, "Loading owner");
        self.owners
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Owner not found with id: {}", id)))
    }

    /// Owners whose last name starts with `prefix`.
    ///
    /// `page_number` is one-based.
    pub async fn find_by_last_name_starting_with(
        &self,
        prefix: &str,
        page_number: u64,
        page_size: u64,
    ) -> Result<Page<Owner>, DomainError> {
        let request = PageRequest::from_page_number(page_number, page_size);
        tracing::debug!(prefix, page = request.page, size = request.size, "Searching owners");
        self.owners
            .find_by_last_name_starting_with(prefix, &request)
            .await
    }

    /// Insert or update an owner, returning it with identifiers assigned
    pub async fn save(&self, owner: &Owner) -> Result<Owner, DomainError> {
        let saved = self.owners.save(owner).await?;
        tracing::info!(
            owner_id = ?saved.id,
            created = owner.is_new(),
            "Saved owner"
        );
        Ok(saved)
    }

    /// Search by last name using the configured page size.
    ///
    /// An absent last name matches every owner.
    pub async fn search(
        &self,
        last_name: Option<&str>,
        page_number: u64,
    ) -> Result<OwnerSearch, DomainError> {
        let page = self
            .find_by_last_name_starting_with(last_name.unwrap_or(""), page_number, self.page_size)
            .await?;

        if page.is_empty() {
            tracing::debug!(last_name, "Owner search found nothing");
            return Ok(OwnerSearch::NoMatch);
        }
        if page.total_elements == 1 {
            if let Some(owner) = page.content.into_iter().next() {
                return Ok(OwnerSearch::Single(owner));
            }
            return Ok(OwnerSearch::NoMatch);
        }
        Ok(OwnerSearch::Many(page))
    }
}
