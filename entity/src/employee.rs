use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One employee record. Identifier, email, and phone are unique across the
/// collection; the store enforces identifier uniqueness, the form validator
/// enforces the other two.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: Position,
    pub date_of_employment: NaiveDate,
    pub date_of_birth: NaiveDate,
}

/// Candidate record as submitted by a form: everything but the identifier,
/// with fields the user may have left blank still representable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Option<Department>,
    pub position: Option<Position>,
    pub date_of_employment: Option<NaiveDate>,
    pub date_of_birth: Option<NaiveDate>,
}

impl EmployeeDraft {
    /// Prefill a draft from an existing record (edit form).
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: Some(employee.department),
            position: Some(employee.position),
            date_of_employment: Some(employee.date_of_employment),
            date_of_birth: Some(employee.date_of_birth),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value {value:?}, expected one of: {expected}")]
pub struct ParseEnumError {
    value: String,
    expected: &'static str,
}

pub(crate) fn parse_enum_error(value: &str, expected: &'static str) -> ParseEnumError {
    ParseEnumError {
        value: value.to_string(),
        expected,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Analytics,
    Tech,
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Analytics, Department::Tech];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Analytics => "Analytics",
            Department::Tech => "Tech",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dept| dept.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError {
                value: s.to_string(),
                expected: "Analytics, Tech",
            })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Junior => "Junior",
            Position::Medior => "Medior",
            Position::Senior => "Senior",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError {
                value: s.to_string(),
                expected: "Junior, Medior, Senior",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_parses_case_insensitively() {
        assert_eq!("tech".parse::<Department>().unwrap(), Department::Tech);
        assert_eq!(
            "Analytics".parse::<Department>().unwrap(),
            Department::Analytics
        );
        assert!("HR".parse::<Department>().is_err());
    }

    #[test]
    fn position_round_trips_through_display() {
        for pos in Position::ALL {
            assert_eq!(pos.as_str().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn employee_serializes_dates_as_iso_strings() {
        let employee = Employee {
            id: "1".into(),
            first_name: "Elif".into(),
            last_name: "Kaya".into(),
            email: "elif.kaya@example.com".into(),
            phone: "+90 533 234 56 78".into(),
            department: Department::Tech,
            position: Position::Senior,
            date_of_employment: NaiveDate::from_ymd_opt(2021, 5, 15).unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1988, 3, 12).unwrap(),
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["date_of_employment"], "2021-05-15");
        assert_eq!(json["department"], "Tech");
    }
}
