//! Data model shared across the crewdesk crates.

mod date;
mod employee;
mod locale;
mod settings;

pub use date::format_date;
pub use employee::{Department, Employee, EmployeeDraft, ParseEnumError, Position};
pub use locale::Locale;
pub use settings::{PAGE_SIZE_OPTIONS, ViewMode, ViewSettings};
