use crate::domain::entities::{PetType, PetTypeId};
use crate::records::PetTypeRecord;

pub fn to_domain(record: Option<PetTypeRecord>) -> Option<PetType> {
    record.map(|r| PetType {
        id: r.id.map(PetTypeId),
        name: r.name,
    })
}

pub fn to_record(pet_type: Option<&PetType>) -> Option<PetTypeRecord> {
    pet_type.map(|t| PetTypeRecord {
        id: t.id.map(|id| id.0),
        name: t.name.clone(),
    })
}
