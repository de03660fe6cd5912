//! Authoritative state for the employee directory.
//!
//! [`EmployeeStore`] owns the record collection, the persisted view
//! preferences, and the session-scoped selection set; every read and write
//! goes through it. [`AppStore`] owns the UI locale. Both mirror their
//! state to a [`platform_storage::Storage`] backend on each mutation and
//! notify subscribers through a closed set of typed events.

mod app_store;
mod employee_store;
mod error;
mod event;
mod persist;
mod seed;
pub mod validate;

pub use app_store::AppStore;
pub use employee_store::{EmployeeStore, PageWindow, SelectionState};
pub use error::{StoreError, StoreResult};
pub use event::{AppEvent, EmployeeEvent};
