//! PostgreSQL adapter for PetTypeRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::domain::entities::PetType;
use crate::domain::ports::PetTypeRepository;
use crate::entity::types;
use crate::error::DomainError;
use crate::mapping;

/// PostgreSQL implementation of PetTypeRepository
pub struct PostgresPetTypeRepository {
    db: DatabaseConnection,
}

impl PostgresPetTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetTypeRepository for PostgresPetTypeRepository {
    /// Ordered by name
    async fn find_all(&self) -> Result<Vec<PetType>, DomainError> {
        let rows = types::Entity::find()
            .order_by_asc(types::Column::Name)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|m| mapping::pet_type::to_domain(Some(m.into())))
            .collect())
    }
}
