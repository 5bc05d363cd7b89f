//! PostgreSQL adapter for OwnerRepository
//!
//! Owners are loaded as whole aggregates: the owner rows, then their pets
//! (by name, with the pet type joined) and the pets' visits (by id). Rows
//! are assembled into records and converted with `mapping::owner`.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{Owner, OwnerId};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::ports::OwnerRepository;
use crate::entity::{owners, pets, types, visits};
use crate::error::DomainError;
use crate::mapping;
use crate::records::{OwnerRecord, PetRecord, PetTypeRecord, VisitRecord};

use super::page_window;

/// PostgreSQL implementation of OwnerRepository
pub struct PostgresOwnerRepository {
    db: DatabaseConnection,
}

impl PostgresOwnerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerRepository for PostgresOwnerRepository {
    async fn find_by_last_name_starting_with(
        &self,
        prefix: &str,
        page: &PageRequest,
    ) -> Result<Page<Owner>, DomainError> {
        let query = owners::Entity::find()
            .filter(last_name_starts_with(prefix))
            .order_by_asc(owners::Column::Id);

        let total = query.clone().count(&self.db).await?;
        let rows = match page_window(query, page, total) {
            Some(window) => window.all(&self.db).await?,
            None => Vec::new(),
        };
        let content = load_aggregates(&self.db, rows).await?;

        Ok(Page::new(content, *page, total))
    }

    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, DomainError> {
        let Some(row) = owners::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(load_aggregates(&self.db, vec![row]).await?.pop())
    }

    async fn save(&self, owner: &Owner) -> Result<Owner, DomainError> {
        let record = mapping::owner::to_record(owner);
        let txn = self.db.begin().await?;

        let owner_row = write_owner(&txn, &record).await?;
        for pet in &record.pets {
            let pet_row = write_pet(&txn, owner_row.id, pet).await?;
            for visit in &pet.visits {
                write_visit(&txn, pet_row.id, visit).await?;
            }
        }

        let saved = load_aggregates(&txn, vec![owner_row])
            .await?
            .pop()
            .ok_or_else(|| DomainError::Internal("saved owner vanished".to_string()))?;
        txn.commit().await?;

        Ok(saved)
    }
}

/// Literal prefix match on the last name; LIKE wildcards in `prefix` are escaped
fn last_name_starts_with(prefix: &str) -> SimpleExpr {
    Expr::col((owners::Entity, owners::Column::LastName))
        .like(LikeExpr::new(format!("{}%", escape_like(prefix))).escape('\\'))
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

async fn write_owner<C: ConnectionTrait>(
    db: &C,
    record: &OwnerRecord,
) -> Result<owners::Model, DbErr> {
    let mut model = owners::ActiveModel {
        id: NotSet,
        first_name: Set(record.first_name.clone()),
        last_name: Set(record.last_name.clone()),
        address: Set(record.address.clone()),
        city: Set(record.city.clone()),
        telephone: Set(record.telephone.clone()),
    };
    match record.id {
        Some(id) => {
            model.id = Set(id);
            model.update(db).await
        }
        None => model.insert(db).await,
    }
}

async fn write_pet<C: ConnectionTrait>(
    db: &C,
    owner_id: i32,
    record: &PetRecord,
) -> Result<pets::Model, DbErr> {
    let mut model = pets::ActiveModel {
        id: NotSet,
        name: Set(record.name.clone()),
        birth_date: Set(record.birth_date),
        type_id: Set(record.pet_type.as_ref().and_then(|t| t.id)),
        owner_id: Set(owner_id),
    };
    match record.id {
        Some(id) => {
            model.id = Set(id);
            model.update(db).await
        }
        None => model.insert(db).await,
    }
}

async fn write_visit<C: ConnectionTrait>(
    db: &C,
    pet_id: i32,
    record: &VisitRecord,
) -> Result<visits::Model, DbErr> {
    let mut model = visits::ActiveModel {
        id: NotSet,
        pet_id: Set(pet_id),
        visit_date: Set(record.date),
        description: Set(record.description.clone()),
    };
    match record.id {
        Some(id) => {
            model.id = Set(id);
            model.update(db).await
        }
        None => model.insert(db).await,
    }
}

/// Load pets and visits for `rows` and build the aggregates, keeping row order
async fn load_aggregates<C: ConnectionTrait>(
    db: &C,
    rows: Vec<owners::Model>,
) -> Result<Vec<Owner>, DbErr> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let owner_ids: Vec<i32> = rows.iter().map(|o| o.id).collect();
    let pet_rows = pets::Entity::find()
        .filter(pets::Column::OwnerId.is_in(owner_ids))
        .order_by_asc(pets::Column::Name)
        .find_also_related(types::Entity)
        .all(db)
        .await?;

    let pet_ids: Vec<i32> = pet_rows.iter().map(|(p, _)| p.id).collect();
    let visit_rows = if pet_ids.is_empty() {
        Vec::new()
    } else {
        visits::Entity::find()
            .filter(visits::Column::PetId.is_in(pet_ids))
            .order_by_asc(visits::Column::Id)
            .all(db)
            .await?
    };

    let mut visits_by_pet: HashMap<i32, Vec<VisitRecord>> = HashMap::new();
    for visit in visit_rows {
        visits_by_pet
            .entry(visit.pet_id)
            .or_default()
            .push(visit.into());
    }

    let mut pets_by_owner: HashMap<i32, Vec<PetRecord>> = HashMap::new();
    for (pet, pet_type) in pet_rows {
        let record = PetRecord {
            id: Some(pet.id),
            name: pet.name,
            birth_date: pet.birth_date,
            pet_type: pet_type.map(Into::into),
            visits: visits_by_pet.remove(&pet.id).unwrap_or_default(),
        };
        pets_by_owner.entry(pet.owner_id).or_default().push(record);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let pets = pets_by_owner.remove(&row.id).unwrap_or_default();
            mapping::owner::to_domain(OwnerRecord {
                id: Some(row.id),
                first_name: row.first_name,
                last_name: row.last_name,
                address: row.address,
                city: row.city,
                telephone: row.telephone,
                pets,
            })
        })
        .collect())
}

impl From<types::Model> for PetTypeRecord {
    fn from(m: types::Model) -> Self {
        PetTypeRecord {
            id: Some(m.id),
            name: m.name,
        }
    }
}

impl From<visits::Model> for VisitRecord {
    fn from(m: visits::Model) -> Self {
        VisitRecord {
            id: Some(m.id),
            date: m.visit_date,
            description: m.description,
        }
    }
}
