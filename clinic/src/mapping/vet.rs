use crate::domain::entities::{PersonName, Vet, VetId};
use crate::records::{VetList, VetListEntry, VetRecord};

use super::specialty;

pub fn to_domain(record: VetRecord) -> Vet {
    let mut vet = Vet::new(PersonName::new(record.first_name, record.last_name));
    vet.id = record.id.map(VetId);
    for s in record.specialties {
        if let Some(s) = specialty::to_domain(Some(s)) {
            vet.add_specialty(s);
        }
    }
    vet
}

/// Specialties are written in the order they were added
pub fn to_record(vet: &Vet) -> VetRecord {
    VetRecord {
        id: vet.id.map(|id| id.0),
        first_name: vet.name.first_name.clone(),
        last_name: vet.name.last_name.clone(),
        specialties: vet
            .specialties_in_entry_order()
            .iter()
            .filter_map(|s| specialty::to_record(Some(s)))
            .collect(),
    }
}

/// Build the machine-readable vet listing, specialties in name order
pub fn to_listing(vets: &[Vet]) -> VetList {
    VetList {
        vet_list: vets
            .iter()
            .map(|vet| {
                let mut record = to_record(vet);
                record.specialties = vet
                    .specialties()
                    .into_iter()
                    .filter_map(|s| specialty::to_record(Some(s)))
                    .collect();
                VetListEntry {
                    vet: record,
                    nr_of_specialties: vet.specialty_count(),
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Specialty;
    use crate::records::SpecialtyRecord;

    fn douglas() -> Vet {
        let mut vet = Vet::new(PersonName::new("Linda", "Douglas"));
        vet.id = Some(VetId(3));
        vet.add_specialty(Specialty::new(2, "surgery"));
        vet.add_specialty(Specialty::new(3, "dentistry"));
        vet
    }

    #[test]
    fn record_to_domain() {
        let record = VetRecord {
            id: Some(1),
            first_name: "James".to_string(),
            last_name: "Carter".to_string(),
            specialties: vec![],
        };

        let vet = to_domain(record);

        assert_eq!(vet.id, Some(VetId(1)));
        assert_eq!(vet.name.to_string(), "James Carter");
        assert_eq!(vet.specialty_count(), 0);
    }

    #[test]
    fn record_keeps_entry_order() {
        let record = to_record(&douglas());
        let names: Vec<_> = record.specialties.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["surgery", "dentistry"]);
        assert_eq!(
            record.specialties[1],
            SpecialtyRecord {
                id: Some(3),
                name: "dentistry".to_string()
            }
        );
    }

    #[test]
    fn round_trip_with_unsorted_specialties() {
        let vet = douglas();

        assert_eq!(to_domain(to_record(&vet)), vet);
    }

    #[test]
    fn listing_orders_specialties_by_name() {
        let listing = to_listing(&[douglas()]);
        let names: Vec<_> = listing.vet_list[0]
            .vet
            .specialties
            .iter()
            .map(|s| s.name.as_str())
            .collect();

        assert_eq!(names, vec!["dentistry", "surgery"]);
    }

    #[test]
    fn listing_counts_specialties() {
        let listing = to_listing(&[douglas(), Vet::new(PersonName::new("James", "Carter"))]);

        assert_eq!(listing.vet_list.len(), 2);
        assert_eq!(listing.vet_list[0].nr_of_specialties, 2);
        assert_eq!(listing.vet_list[1].nr_of_specialties, 0);
        assert_eq!(listing.vet_list[1].vet.last_name, "Carter");
    }
}
