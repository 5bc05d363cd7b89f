//! Visit domain entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::VisitId;

/// A visit of a pet to the clinic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub id: Option<VisitId>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl Visit {
    /// A new (unsaved) visit
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id: None,
            date: Some(date),
            description: Some(description.into()),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
