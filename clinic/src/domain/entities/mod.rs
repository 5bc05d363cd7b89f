//! Domain entities
//!
//! Pure domain models for the clinic.
//! These are separate from the SeaORM table models in the `entity` module
//! and from the persistence records in `records`.

pub mod identity;
pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod vet;
pub mod visit;

pub use identity::{OwnerId, PersonName, PetId, PetTypeId, SpecialtyId, VetId, VisitId};
pub use owner::Owner;
pub use pet::Pet;
pub use pet_type::PetType;
pub use specialty::Specialty;
pub use vet::Vet;
pub use visit::Visit;
