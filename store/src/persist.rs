//! Versioned persistence envelopes for the three logical records.
//!
//! Every record carries a `schema_version` field so a future shape change
//! has somewhere to hang a migration. Malformed or unknown-version
//! preference records degrade to defaults with a warning; the employee
//! collection never does.

use entity::{Employee, Locale, ViewSettings};
use platform_storage::Storage;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{StoreError, StoreResult};

pub(crate) const EMPLOYEES_KEY: &str = "employees";
pub(crate) const VIEW_SETTINGS_KEY: &str = "employee_settings";
pub(crate) const APP_SETTINGS_KEY: &str = "app_settings";

pub(crate) const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct EmployeesRecord {
    schema_version: u32,
    employees: Vec<Employee>,
}

#[derive(Serialize, Deserialize)]
struct ViewSettingsRecord {
    schema_version: u32,
    #[serde(flatten)]
    settings: ViewSettings,
}

#[derive(Serialize, Deserialize)]
struct AppSettingsRecord {
    schema_version: u32,
    locale: Locale,
}

pub(crate) fn load_employees(storage: &dyn Storage) -> StoreResult<Vec<Employee>> {
    let Some(text) = storage.get(EMPLOYEES_KEY)? else {
        return Ok(Vec::new());
    };
    let record: EmployeesRecord =
        serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            key: EMPLOYEES_KEY,
            source,
        })?;
    if record.schema_version != SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            key: EMPLOYEES_KEY,
            version: record.schema_version,
        });
    }
    Ok(record.employees)
}

pub(crate) fn save_employees(storage: &mut dyn Storage, employees: &[Employee]) -> StoreResult<()> {
    let record = EmployeesRecord {
        schema_version: SCHEMA_VERSION,
        employees: employees.to_vec(),
    };
    let text = serde_json::to_string(&record).expect("employee collection serializes");
    storage.set(EMPLOYEES_KEY, &text)?;
    Ok(())
}

pub(crate) fn load_view_settings(storage: &dyn Storage) -> StoreResult<ViewSettings> {
    let Some(text) = storage.get(VIEW_SETTINGS_KEY)? else {
        return Ok(ViewSettings::default());
    };
    match serde_json::from_str::<ViewSettingsRecord>(&text) {
        Ok(record) if record.schema_version == SCHEMA_VERSION => Ok(record.settings),
        Ok(record) => {
            warn!(
                key = VIEW_SETTINGS_KEY,
                version = record.schema_version,
                "unknown settings schema version, using defaults"
            );
            Ok(ViewSettings::default())
        }
        Err(err) => {
            warn!(
                key = VIEW_SETTINGS_KEY,
                error = %err,
                "malformed settings record, using defaults"
            );
            Ok(ViewSettings::default())
        }
    }
}

pub(crate) fn save_view_settings(
    storage: &mut dyn Storage,
    settings: &ViewSettings,
) -> StoreResult<()> {
    let record = ViewSettingsRecord {
        schema_version: SCHEMA_VERSION,
        settings: settings.clone(),
    };
    let text = serde_json::to_string(&record).expect("view settings serialize");
    storage.set(VIEW_SETTINGS_KEY, &text)?;
    Ok(())
}

pub(crate) fn load_app_settings(storage: &dyn Storage) -> StoreResult<Locale> {
    let Some(text) = storage.get(APP_SETTINGS_KEY)? else {
        return Ok(Locale::default());
    };
    match serde_json::from_str::<AppSettingsRecord>(&text) {
        Ok(record) if record.schema_version == SCHEMA_VERSION => Ok(record.locale),
        Ok(record) => {
            warn!(
                key = APP_SETTINGS_KEY,
                version = record.schema_version,
                "unknown settings schema version, using defaults"
            );
            Ok(Locale::default())
        }
        Err(err) => {
            warn!(
                key = APP_SETTINGS_KEY,
                error = %err,
                "malformed settings record, using defaults"
            );
            Ok(Locale::default())
        }
    }
}

pub(crate) fn save_app_settings(storage: &mut dyn Storage, locale: Locale) -> StoreResult<()> {
    let record = AppSettingsRecord {
        schema_version: SCHEMA_VERSION,
        locale,
    };
    let text = serde_json::to_string(&record).expect("app settings serialize");
    storage.set(APP_SETTINGS_KEY, &text)?;
    Ok(())
}
