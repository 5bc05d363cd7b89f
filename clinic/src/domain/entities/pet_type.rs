//! Pet type domain entity
//!
//! Referenced, not owned, by pets: the same type is shared across many pets.

use serde::{Deserialize, Serialize};

use super::PetTypeId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetType {
    pub id: Option<PetTypeId>,
    pub name: Option<String>,
}

impl PetType {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: Some(PetTypeId(id)),
            name: Some(name.into()),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Name as shown in selection lists; `<null>` when unset
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<null>")
    }
}
