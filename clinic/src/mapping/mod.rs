//! Mapping layer
//!
//! One module per entity, each with an explicit `to_domain` / `to_record`
//! pair. Composite converters delegate to the leaf converters for their
//! children. Leaf converters (pet type, specialty, visit) accept and return
//! `Option` so an absent record maps to an absent entity.

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod vet;
pub mod visit;
