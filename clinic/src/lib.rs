//! Petclinic core
//!
//! Owners, their pets and the pets' visits, plus the clinic's vets and pet
//! types. Uses hexagonal (ports & adapters) architecture: the use cases in
//! `app` talk to storage only through the traits in `domain::ports`.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod mapping;
pub mod records;
pub mod telemetry;

#[cfg(test)]
mod test_utils;


pub use config::Config;
pub use error::{ConfigError, DomainError};
