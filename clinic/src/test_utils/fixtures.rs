//! Test fixtures
//!
//! Factory functions for the sample clinic data: owners, pets, pet types
//! and vets. Each fixture creates a valid entity that can be customized.

use chrono::NaiveDate;

use crate::domain::entities::{
    Owner, OwnerId, PersonName, Pet, PetId, PetType, Specialty, Vet, VetId,
};

pub fn cat() -> PetType {
    PetType::new(1, "cat")
}

pub fn dog() -> PetType {
    PetType::new(2, "dog")
}

/// The six sample pet types in id order
pub fn pet_types() -> Vec<PetType> {
    ["cat", "dog", "lizard", "snake", "bird", "hamster"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| PetType::new(id, name))
        .collect()
}

/// George Franklin (id 1) with no pets
pub fn george_franklin() -> Owner {
    let mut owner = Owner::new(
        PersonName::new("George", "Franklin"),
        "110 W. Liberty St.",
        "Madison",
        "6085551023",
    );
    owner.id = Some(OwnerId(1));
    owner
}

/// An unsaved owner with a placeholder address
pub fn owner_named(first: &str, last: &str) -> Owner {
    Owner::new(
        PersonName::new(first, last),
        "638 Cardinal Ave.",
        "Sun Prairie",
        "6085551749",
    )
}

/// Leo the cat, not yet saved
pub fn leo() -> Pet {
    Pet::new("Leo", NaiveDate::from_ymd_opt(2020, 9, 7).unwrap(), cat())
}

/// George Franklin owning Leo (pet id 1)
pub fn george_with_leo() -> Owner {
    let mut owner = george_franklin();
    owner.add_pet(leo());
    if let Some(pet) = owner.pets_mut().first_mut() {
        pet.id = Some(PetId(1));
    }
    owner
}

fn vet(id: i32, first: &str, last: &str, specialties: &[(i32, &str)]) -> Vet {
    let mut vet = Vet::new(PersonName::new(first, last));
    vet.id = Some(VetId(id));
    for (specialty_id, name) in specialties {
        vet.add_specialty(Specialty::new(*specialty_id, *name));
    }
    vet
}

/// The six sample vets in id order
pub fn clinic_vets() -> Vec<Vet> {
    vec![
        vet(1, "James", "Carter", &[]),
        vet(2, "Helen", "Leary", &[(1, "radiology")]),
        vet(3, "Linda", "Douglas", &[(2, "surgery"), (3, "dentistry")]),
        vet(4, "Rafael", "Ortega", &[(2, "surgery")]),
        vet(5, "Henry", "Stevens", &[(1, "radiology")]),
        vet(6, "Sharon", "Jenkins", &[]),
    ]
}
