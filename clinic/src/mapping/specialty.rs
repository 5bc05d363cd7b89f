use crate::domain::entities::{Specialty, SpecialtyId};
use crate::records::SpecialtyRecord;

pub fn to_domain(record: Option<SpecialtyRecord>) -> Option<Specialty> {
    record.map(|r| Specialty {
        id: r.id.map(SpecialtyId),
        name: r.name,
    })
}

pub fn to_record(specialty: Option<&Specialty>) -> Option<SpecialtyRecord> {
    specialty.map(|s| SpecialtyRecord {
        id: s.id.map(|id| id.0),
        name: s.name.clone(),
    })
}
