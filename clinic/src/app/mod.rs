//! Application layer
//!
//! Use cases over the Owner aggregate and the reference data (vets, pet
//! types). Services are generic over the repository ports and take and
//! return domain entities only.

pub mod owner_service;
pub mod pet_service;
pub mod pet_type_service;
pub mod validation;
pub mod vet_service;
pub mod visit_service;

pub use owner_service::{OwnerSearch, OwnerService};
pub use pet_service::PetService;
pub use pet_type_service::PetTypeService;
pub use vet_service::VetService;
pub use visit_service::VisitService;
