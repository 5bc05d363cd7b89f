//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod owner_repo;
pub mod pet_type_repo;
pub mod vet_repo;


pub use owner_repo::PostgresOwnerRepository;
pub use pet_type_repo::PostgresPetTypeRepository;
pub use vet_repo::PostgresVetRepository;

use sea_orm::{Database, DatabaseConnection, EntityTrait, QuerySelect, Select};

use crate::config::Config;
use crate::domain::pagination::PageRequest;
use crate::error::DomainError;

/// Open a connection pool to the configured database
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DomainError> {
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");
    Ok(db)
}

/// Limit `select` to the requested page.
///
/// Returns `None` when the page starts past the last of `total` rows, so
/// out-of-range page numbers never reach the database as an offset.
pub(crate) fn page_window<E: EntityTrait>(
    select: Select<E>,
    page: &PageRequest,
    total: u64,
) -> Option<Select<E>> {
    page.offset_within(total)
        .map(|offset| select.limit(page.size).offset(offset))
}
