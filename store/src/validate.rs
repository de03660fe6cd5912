//! Employee form validation: a pure function of the candidate record (plus
//! the store, for uniqueness checks) producing a field-keyed error map.
//! Every field is evaluated independently; there is no short-circuiting
//! between fields.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Utc};
use entity::EmployeeDraft;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::EmployeeStore;

const MIN_AGE: i32 = 18;
const MAX_AGE: i32 = 65;

// Loose text@text.text shape, matched anywhere in the value.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));
// Digits, spaces, dashes, parentheses, optional leading plus.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]+$").expect("valid regex"));

/// Form field a validation message attaches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    DateOfEmployment,
    Department,
    Position,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::DateOfBirth => "date_of_birth",
            Field::DateOfEmployment => "date_of_employment",
            Field::Department => "department",
            Field::Position => "position",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from field to a human-readable message; empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Validate a draft against the business rules. `exclude_id` is the record
/// being edited, so its own email/phone do not count as duplicates.
pub fn validate(
    draft: &EmployeeDraft,
    store: &EmployeeStore,
    exclude_id: Option<&str>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let today = Utc::now().date_naive();

    if draft.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, "First name is required");
    }

    if draft.last_name.trim().is_empty() {
        errors.insert(Field::LastName, "Last name is required");
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(&draft.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    } else if !store.is_email_unique(&draft.email, exclude_id) {
        errors.insert(Field::Email, "Email address already exists");
    }

    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    } else if !PHONE_RE.is_match(&draft.phone) {
        errors.insert(Field::Phone, "Please enter a valid phone number");
    } else if !store.is_phone_unique(&draft.phone, exclude_id) {
        errors.insert(Field::Phone, "Phone number already exists");
    }

    match draft.date_of_birth {
        None => errors.insert(Field::DateOfBirth, "Date of birth is required"),
        Some(born) => {
            // Calendar-year subtraction, deliberately not birthday-accurate.
            let age = today.year() - born.year();
            if !(MIN_AGE..=MAX_AGE).contains(&age) {
                errors.insert(
                    Field::DateOfBirth,
                    "Employee must be between 18 and 65 years old",
                );
            }
        }
    }

    match draft.date_of_employment {
        None => errors.insert(Field::DateOfEmployment, "Date of employment is required"),
        Some(employed) if employed > today => {
            errors.insert(
                Field::DateOfEmployment,
                "Employment date cannot be in the future",
            );
        }
        Some(_) => {}
    }

    if draft.department.is_none() {
        errors.insert(Field::Department, "Department is required");
    }

    if draft.position.is_none() {
        errors.insert(Field::Position, "Position is required");
    }

    errors
}
