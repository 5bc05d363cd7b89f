//! Persistence records
//!
//! Flat, storage-shaped mirrors of the domain entities. The Postgres adapter
//! assembles them from table rows, and a presentation layer binds form input
//! into them. Conversion to and from the domain lives in `mapping`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRecord {
    pub id: Option<i32>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
    #[serde(default)]
    pub pets: Vec<PetRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub pet_type: Option<PetTypeRecord>,
    #[serde(default)]
    pub visits: Vec<VisitRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetTypeRecord {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetRecord {
    pub id: Option<i32>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub specialties: Vec<SpecialtyRecord>,
}

impl VetRecord {
    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyRecord {
    pub id: Option<i32>,
    pub name: String,
}

/// Machine-readable vet listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetList {
    pub vet_list: Vec<VetListEntry>,
}

/// One vet in the listing, with its specialty count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetListEntry {
    #[serde(flatten)]
    pub vet: VetRecord,
    pub nr_of_specialties: usize,
}
