//! PostgreSQL adapter for VetRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::domain::entities::Vet;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::ports::VetRepository;
use crate::entity::{specialties, vet_specialties, vets};
use crate::error::DomainError;
use crate::mapping;
use crate::records::{SpecialtyRecord, VetRecord};

use super::page_window;

/// PostgreSQL implementation of VetRepository
pub struct PostgresVetRepository {
    db: DatabaseConnection,
}

impl PostgresVetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach specialties to the given vet rows, keeping row order
    async fn with_specialties(&self, rows: Vec<vets::Model>) -> Result<Vec<Vet>, DomainError> {
        let vet_ids: Vec<i32> = rows.iter().map(|v| v.id).collect();
        let links = if vet_ids.is_empty() {
            Vec::new()
        } else {
            vet_specialties::Entity::find()
                .filter(vet_specialties::Column::VetId.is_in(vet_ids))
                .order_by_asc(vet_specialties::Column::SpecialtyId)
                .find_also_related(specialties::Entity)
                .all(&self.db)
                .await?
        };

        let mut by_vet: HashMap<i32, Vec<SpecialtyRecord>> = HashMap::new();
        for (link, specialty) in links {
            if let Some(specialty) = specialty {
                by_vet.entry(link.vet_id).or_default().push(specialty.into());
            }
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                mapping::vet::to_domain(VetRecord {
                    id: Some(row.id),
                    specialties: by_vet.remove(&row.id).unwrap_or_default(),
                    first_name: row.first_name,
                    last_name: row.last_name,
                })
            })
            .collect())
    }
}

#[async_trait]
impl VetRepository for PostgresVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>, DomainError> {
        let rows = vets::Entity::find()
            .order_by_asc(vets::Column::Id)
            .all(&self.db)
            .await?;

        self.with_specialties(rows).await
    }

    async fn find_all_paged(&self, page: &PageRequest) -> Result<Page<Vet>, DomainError> {
        let query = vets::Entity::find().order_by_asc(vets::Column::Id);

        let total = query.clone().count(&self.db).await?;
        let rows = match page_window(query, page, total) {
            Some(window) => window.all(&self.db).await?,
            None => Vec::new(),
        };
        let content = self.with_specialties(rows).await?;

        Ok(Page::new(content, *page, total))
    }
}

impl From<specialties::Model> for SpecialtyRecord {
    fn from(m: specialties::Model) -> Self {
        SpecialtyRecord {
            id: Some(m.id),
            name: m.name,
        }
    }
}
