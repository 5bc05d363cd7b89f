//! Pet type use cases

use std::sync::Arc;

use crate::domain::entities::PetType;
use crate::domain::ports::PetTypeRepository;
use crate::error::DomainError;

/// Service for pet types
pub struct PetTypeService<TR>
where
    TR: PetTypeRepository,
{
    types: Arc<TR>,
}

impl<TR> PetTypeService<TR>
where
    TR: PetTypeRepository,
{
    pub fn new(types: Arc<TR>) -> Self {
        Self { types }
    }

    /// All pet types in storage order
    pub async fn find_all(&self) -> Result<Vec<PetType>, DomainError> {
        self.types.find_all().await
    }

    /// Resolve a type from its submitted name (exact match)
    pub async fn find_by_name(&self, text: &str) -> Result<PetType, DomainError> {
        self.find_all()
            .await?
            .into_iter()
            .find(|t| t.name.as_deref() == Some(text))
            .ok_or_else(|| {
                tracing::debug!(text, "Unknown pet type");
                DomainError::NotFound(format!("type not found: {}", text))
            })
    }
}
