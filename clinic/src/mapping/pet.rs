use crate::domain::entities::{Pet, PetId};
use crate::records::PetRecord;

use super::{pet_type, visit};

pub fn to_domain(record: PetRecord) -> Pet {
    let mut pet = Pet::default();
    pet.id = record.id.map(PetId);
    pet.name = record.name;
    pet.birth_date = record.birth_date;
    pet.pet_type = pet_type::to_domain(record.pet_type);
    for v in record.visits {
        if let Some(v) = visit::to_domain(Some(v)) {
            pet.add_visit(v);
        }
    }
    pet
}

pub fn to_record(pet: &Pet) -> PetRecord {
    PetRecord {
        id: pet.id.map(|id| id.0),
        name: pet.name.clone(),
        birth_date: pet.birth_date,
        pet_type: pet_type::to_record(pet.pet_type.as_ref()),
        visits: pet
            .visits()
            .iter()
            .filter_map(|v| visit::to_record(Some(v)))
            .collect(),
    }
}
