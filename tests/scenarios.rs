//! End-to-end scenarios exercising the stores through the public API,
//! including persistence through the file backend.

use chrono::NaiveDate;
use entity::{Department, EmployeeDraft, Locale, Position};
use platform_storage::{FileStorage, MemoryStorage, Storage};
use store::{AppStore, EmployeeStore, PageWindow, validate};

fn draft(n: usize) -> EmployeeDraft {
    EmployeeDraft {
        first_name: format!("First{n}"),
        last_name: format!("Last{n}"),
        email: format!("person{n}@example.com"),
        phone: format!("+90 555 000 {n:04}"),
        department: Some(if n % 2 == 0 {
            Department::Tech
        } else {
            Department::Analytics
        }),
        position: Some(Position::Medior),
        date_of_employment: NaiveDate::from_ymd_opt(2022, 9, 23),
        date_of_birth: NaiveDate::from_ymd_opt(1992, 4, 1),
    }
}

fn memory_store() -> EmployeeStore {
    EmployeeStore::load(Box::new(MemoryStorage::new())).unwrap()
}

#[test]
fn duplicate_email_fails_validation_for_the_second_record() {
    let mut store = memory_store();
    let mut first = draft(1);
    first.email = "a@x.com".into();
    store.add(first).unwrap();

    let mut second = draft(2);
    second.email = "a@x.com".into();
    let errors = validate::validate(&second, &store, None);
    assert!(!errors.is_valid());
    assert_eq!(
        errors.get(validate::Field::Email),
        Some("Email address already exists")
    );
}

#[test]
fn twenty_five_records_paginate_as_expected() {
    let mut store = memory_store();
    for n in 0..25 {
        store.add(draft(n)).unwrap();
    }
    store.set_items_per_page(10).unwrap();

    store.set_page(1).unwrap();
    assert_eq!(
        store.pagination_info(store.filtered().len()),
        PageWindow {
            start: 1,
            end: 10,
            total: 25
        }
    );

    store.set_page(3).unwrap();
    assert_eq!(
        store.pagination_info(store.filtered().len()),
        PageWindow {
            start: 21,
            end: 25,
            total: 25
        }
    );
    assert_eq!(store.paginated().len(), 5);
}

#[test]
fn searching_a_department_narrows_and_clearing_restores() {
    let mut store = memory_store();
    for n in 0..10 {
        store.add(draft(n)).unwrap();
    }

    store.set_search_query("analytics").unwrap();
    let hits = store.filtered();
    assert_eq!(hits.len(), 5);
    assert!(
        hits.iter()
            .all(|e| e.department == Department::Analytics)
    );

    store.set_search_query("").unwrap();
    assert_eq!(store.filtered().len(), 10);
}

#[test]
fn deleting_a_missing_record_changes_nothing() {
    let mut store = memory_store();
    store.add(draft(1)).unwrap();
    let before: Vec<_> = store.all().to_vec();

    assert!(store.delete("no-such-id").unwrap().is_none());
    assert_eq!(store.all(), before.as_slice());
}

#[test]
fn collection_and_settings_survive_a_reload_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let added = {
        let mut store = EmployeeStore::load(Box::new(FileStorage::new(dir.path()))).unwrap();
        let added = store.add(draft(7)).unwrap();
        store.set_search_query("first7").unwrap();
        store.set_items_per_page(20).unwrap();
        added
    };

    let store = EmployeeStore::load(Box::new(FileStorage::new(dir.path()))).unwrap();
    assert_eq!(store.get(&added.id), Some(&added));
    assert_eq!(store.search_query(), "first7");
    assert_eq!(store.items_per_page(), 20);
    // page size change after the search reset the page back to 1
    assert_eq!(store.current_page(), 1);
    // selection is session-scoped and must not survive
    assert_eq!(store.selected_count(), 0);
}

#[test]
fn seeded_dataset_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = EmployeeStore::load(Box::new(FileStorage::new(dir.path()))).unwrap();
        assert_eq!(store.seed().unwrap(), 20);
    }
    let store = EmployeeStore::load(Box::new(FileStorage::new(dir.path()))).unwrap();
    assert_eq!(store.len(), 20);
    assert!(store.all().iter().any(|e| e.first_name == "Ayşe"));

    // every seeded record passes its own validation when edited in place
    for employee in store.all() {
        let errors = validate::validate(
            &EmployeeDraft::from_employee(employee),
            &store,
            Some(employee.id.as_str()),
        );
        assert!(
            errors.is_valid(),
            "{} {}: {errors:?}",
            employee.first_name,
            employee.last_name
        );
    }
}

#[test]
fn a_corrupt_collection_fails_loudly_on_reload() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = EmployeeStore::load(Box::new(FileStorage::new(dir.path()))).unwrap();
        store.add(draft(1)).unwrap();
    }
    let mut raw = FileStorage::new(dir.path());
    raw.set("employees", "{truncated").unwrap();
    assert!(EmployeeStore::load(Box::new(raw)).is_err());
}

#[test]
fn locale_choice_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut app = AppStore::load(Box::new(FileStorage::new(dir.path()))).unwrap();
        app.set_locale(Locale::Tr).unwrap();
    }
    let app = AppStore::load(Box::new(FileStorage::new(dir.path()))).unwrap();
    assert_eq!(app.locale(), Locale::Tr);
    assert_eq!(app.locale().display_name(), "Türkçe");
}
