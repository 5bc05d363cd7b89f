//! SeaORM table models for the clinic schema

pub mod owners;
pub mod pets;
pub mod specialties;
pub mod types;
pub mod vet_specialties;
pub mod vets;
pub mod visits;
