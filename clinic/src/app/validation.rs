//! Form-level field checks
//!
//! Rejections are reported as `validator::ValidationErrors` keyed by the
//! form field name, each carrying a rejection code. They are expected
//! outcomes for user input, not `DomainError`s.

use validator::{ValidationError, ValidationErrors};

use crate::domain::entities::{Owner, OwnerId, Pet, Visit};

pub const REQUIRED: &str = "required";
pub const DUPLICATE: &str = "duplicate";
pub const BIRTH_DATE_MISMATCH: &str = "typeMismatch.birthDate";
pub const MISMATCH: &str = "mismatch";
pub const NOT_FOUND: &str = "notFound";
pub const PATTERN: &str = "pattern";

const TELEPHONE_DIGITS: usize = 10;

/// Collects rejections and turns them into a `Result`
#[derive(Debug)]
pub(crate) struct Rejections(ValidationErrors);

impl Default for Rejections {
    fn default() -> Self {
        Self(ValidationErrors::new())
    }
}

impl Rejections {
    pub(crate) fn reject(&mut self, field: &'static str, code: &'static str) {
        self.0.add(field, ValidationError::new(code));
    }

    pub(crate) fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.errors().is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Codes rejected on `field`, in the order they were added
#[cfg(test)]
pub(crate) fn codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .filter(|(name, _)| name.to_string() == field)
        .flat_map(|(_, errs)| errs.iter().map(|e| e.code.to_string()))
        .collect()
}

/// Name and birth date are required; the type only for a pet not yet saved
pub fn validate_pet_form(pet: &Pet) -> Result<(), ValidationErrors> {
    let mut rejections = Rejections::default();

    if is_blank(pet.name.as_deref()) {
        rejections.reject("name", REQUIRED);
    }
    if pet.is_new() && pet.pet_type.is_none() {
        rejections.reject("type", REQUIRED);
    }
    if pet.birth_date.is_none() {
        rejections.reject("birthDate", REQUIRED);
    }

    rejections.into_result()
}

pub fn validate_visit_form(visit: &Visit) -> Result<(), ValidationErrors> {
    let mut rejections = Rejections::default();
    if is_blank(visit.description.as_deref()) {
        rejections.reject("description", REQUIRED);
    }
    rejections.into_result()
}

/// Names, address and city are required. The telephone must be exactly
/// ten ASCII digits.
pub fn validate_owner_form(owner: &Owner) -> Result<(), ValidationErrors> {
    let mut rejections = Rejections::default();

    if is_blank(Some(owner.name.first_name.as_str())) {
        rejections.reject("firstName", REQUIRED);
    }
    if is_blank(Some(owner.name.last_name.as_str())) {
        rejections.reject("lastName", REQUIRED);
    }
    if is_blank(owner.address.as_deref()) {
        rejections.reject("address", REQUIRED);
    }
    if is_blank(owner.city.as_deref()) {
        rejections.reject("city", REQUIRED);
    }
    match owner.telephone.as_deref() {
        t if is_blank(t) => rejections.reject("telephone", REQUIRED),
        Some(t) if t.len() != TELEPHONE_DIGITS || !t.bytes().all(|b| b.is_ascii_digit()) => {
            rejections.reject("telephone", PATTERN)
        }
        _ => {}
    }

    rejections.into_result()
}

/// An edit form may omit the id, but must not name a different owner
pub fn validate_owner_id(form_id: Option<OwnerId>, path_id: OwnerId) -> Result<(), ValidationErrors> {
    let mut rejections = Rejections::default();
    if form_id.is_some_and(|id| id != path_id) {
        rejections.reject("id", MISMATCH);
    }
    rejections.into_result()
}

/// Rejection reported when an owner search finds nobody
pub fn owner_search_not_found() -> ValidationErrors {
    let mut rejections = Rejections::default();
    rejections.reject("lastName", NOT_FOUND);
    rejections.0
}
