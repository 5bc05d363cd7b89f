use crate::domain::entities::{Visit, VisitId};
use crate::records::VisitRecord;

pub fn to_domain(record: Option<VisitRecord>) -> Option<Visit> {
    record.map(|r| Visit {
        id: r.id.map(VisitId),
        date: r.date,
        description: r.description,
    })
}

pub fn to_record(visit: Option<&Visit>) -> Option<VisitRecord> {
    visit.map(|v| VisitRecord {
        id: v.id.map(|id| id.0),
        date: v.date,
        description: v.description.clone(),
    })
}
