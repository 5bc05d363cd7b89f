//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Owner/Pet/Visit aggregate, vets, specialties, pet types
//! - `pagination`: page requests and pages
//! - `ports`: Trait definitions for storage

pub mod entities;
pub mod pagination;
pub mod ports;
