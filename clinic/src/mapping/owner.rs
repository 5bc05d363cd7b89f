use crate::domain::entities::{Owner, OwnerId, PersonName};
use crate::records::OwnerRecord;

use super::pet;

pub fn to_domain(record: OwnerRecord) -> Owner {
    let mut owner = Owner::default();
    owner.id = record.id.map(OwnerId);
    owner.name = PersonName::new(record.first_name, record.last_name);
    owner.address = record.address;
    owner.city = record.city;
    owner.telephone = record.telephone;
    for p in record.pets {
        let p = pet::to_domain(p);
        if p.is_new() {
            owner.add_pet(p);
        } else {
            owner.restore_pet(p);
        }
    }
    owner
}

pub fn to_record(owner: &Owner) -> OwnerRecord {
    OwnerRecord {
        id: owner.id.map(|id| id.0),
        first_name: owner.name.first_name.clone(),
        last_name: owner.name.last_name.clone(),
        address: owner.address.clone(),
        city: owner.city.clone(),
        telephone: owner.telephone.clone(),
        pets: owner.pets().iter().map(pet::to_record).collect(),
    }
}
