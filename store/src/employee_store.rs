use std::collections::HashSet;

use chrono::Utc;
use entity::{Employee, EmployeeDraft, PAGE_SIZE_OPTIONS, ViewMode, ViewSettings};
use platform_storage::Storage;
use rand::Rng;
use tracing::debug;

use crate::event::{EmployeeEvent, Subscribers};
use crate::{StoreError, StoreResult, persist, seed};

const ID_SUFFIX_LEN: usize = 9;
const ID_SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Selection status of the currently visible page.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionState {
    /// No visible row is selected (also reported for an empty page).
    None,
    /// At least one visible row is selected, but not all of them.
    Some,
    /// Every visible row is selected and at least one row is visible.
    All,
}

/// 1-based inclusive display range for the current page, e.g. "11-20 of 25".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

/// Authoritative collection of employee records plus view preferences and
/// the session-scoped selection set. Single choke point for all reads and
/// writes; every mutation persists before subscribers are notified.
pub struct EmployeeStore {
    storage: Box<dyn Storage>,
    employees: Vec<Employee>,
    settings: ViewSettings,
    selected: HashSet<String>,
    subscribers: Subscribers<EmployeeEvent>,
}

impl EmployeeStore {
    /// Read the persisted collection and view settings. An absent collection
    /// starts empty; malformed settings degrade to defaults, a malformed
    /// collection is an error.
    pub fn load(storage: Box<dyn Storage>) -> StoreResult<Self> {
        let employees = persist::load_employees(storage.as_ref())?;
        let settings = persist::load_view_settings(storage.as_ref())?;
        debug!(total = employees.len(), "employee store loaded");
        Ok(Self {
            storage,
            employees,
            settings,
            selected: HashSet::new(),
            subscribers: Subscribers::new(),
        })
    }

    /// Register a change-notification handler. Handlers run synchronously,
    /// in subscription order, after the triggering mutation has persisted.
    pub fn subscribe(&mut self, callback: impl Fn(&EmployeeEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Append a new record with a freshly generated identifier. No business
    /// validation happens here; run [`crate::validate::validate`] first.
    pub fn add(&mut self, draft: EmployeeDraft) -> StoreResult<Employee> {
        let employee = self.materialize(self.next_id(), draft)?;
        self.employees.push(employee.clone());
        self.save_employees()?;
        Ok(employee)
    }

    /// Replace the fields of the record with `id`, keeping the identifier.
    /// Returns `None` when no such record exists.
    pub fn update(&mut self, id: &str, draft: EmployeeDraft) -> StoreResult<Option<Employee>> {
        let Some(index) = self.employees.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let employee = self.materialize(id.to_string(), draft)?;
        self.employees[index] = employee.clone();
        self.save_employees()?;
        Ok(Some(employee))
    }

    /// Remove the record with `id`, returning it, or `None` when absent.
    /// A deleted record also leaves the selection set.
    pub fn delete(&mut self, id: &str) -> StoreResult<Option<Employee>> {
        let Some(index) = self.employees.iter().position(|e| e.id == id) else {
            return Ok(None);
        };
        let removed = self.employees.remove(index);
        let was_selected = self.selected.remove(&removed.id);
        self.save_employees()?;
        if was_selected {
            self.emit_selection();
        }
        Ok(Some(removed))
    }

    /// Delete every currently selected record and clear the selection.
    pub fn delete_selected(&mut self) -> StoreResult<Vec<Employee>> {
        if self.selected.is_empty() {
            return Ok(Vec::new());
        }
        let selected = std::mem::take(&mut self.selected);
        let mut removed = Vec::new();
        self.employees.retain(|employee| {
            if selected.contains(&employee.id) {
                removed.push(employee.clone());
                false
            } else {
                true
            }
        });
        self.save_employees()?;
        self.emit_selection();
        Ok(removed)
    }

    /// True iff no other record (id != `exclude_id`) has this exact email.
    pub fn is_email_unique(&self, email: &str, exclude_id: Option<&str>) -> bool {
        !self
            .employees
            .iter()
            .any(|e| e.email == email && Some(e.id.as_str()) != exclude_id)
    }

    /// True iff no other record (id != `exclude_id`) has this exact phone.
    pub fn is_phone_unique(&self, phone: &str, exclude_id: Option<&str>) -> bool {
        !self
            .employees
            .iter()
            .any(|e| e.phone == phone && Some(e.id.as_str()) != exclude_id)
    }

    /// Records matching the current search query as a case-insensitive
    /// substring of name, email, phone, department, or position. The whole
    /// collection when the query is blank.
    pub fn filtered(&self) -> Vec<&Employee> {
        if self.settings.search_query.trim().is_empty() {
            return self.employees.iter().collect();
        }
        // the blank test trims, the match does not: " last" only matches
        // values that contain the leading space
        let query = self.settings.search_query.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                e.first_name.to_lowercase().contains(&query)
                    || e.last_name.to_lowercase().contains(&query)
                    || e.email.to_lowercase().contains(&query)
                    || e.phone.to_lowercase().contains(&query)
                    || e.department.as_str().to_lowercase().contains(&query)
                    || e.position.as_str().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// The page-sized window of [`Self::filtered`] selected by the current
    /// page and page size.
    pub fn paginated(&self) -> Vec<&Employee> {
        let start = self
            .settings
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.settings.items_per_page);
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.settings.items_per_page)
            .collect()
    }

    /// 1-based inclusive display range for the current page, with `end`
    /// clamped to `filtered_count`. A window past the data reports
    /// `end < start`; an empty filter reports `start 1, end 0`.
    pub fn pagination_info(&self, filtered_count: usize) -> PageWindow {
        let page = self.settings.current_page;
        let size = self.settings.items_per_page;
        PageWindow {
            start: page.saturating_sub(1).saturating_mul(size) + 1,
            end: page.saturating_mul(size).min(filtered_count),
            total: filtered_count,
        }
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn current_page(&self) -> usize {
        self.settings.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.settings.items_per_page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.settings.view_mode
    }

    pub fn search_query(&self) -> &str {
        &self.settings.search_query
    }

    pub fn set_page(&mut self, page: usize) -> StoreResult<()> {
        self.settings.current_page = page.max(1);
        self.save_settings()
    }

    /// Change the page size and jump back to page 1. Sizes outside
    /// [`PAGE_SIZE_OPTIONS`] are ignored.
    pub fn set_items_per_page(&mut self, size: usize) -> StoreResult<()> {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return Ok(());
        }
        self.settings.items_per_page = size;
        self.settings.current_page = 1;
        self.save_settings()
    }

    /// Change the search query and jump back to page 1, so the view never
    /// lands on a page past the narrowed result set.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> StoreResult<()> {
        self.settings.search_query = query.into();
        self.settings.current_page = 1;
        self.save_settings()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> StoreResult<()> {
        self.settings.view_mode = mode;
        self.save_settings()
    }

    pub fn toggle_selection(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
        self.emit_selection();
    }

    /// Select every record on the current page (existing selections on
    /// other pages are kept).
    pub fn select_all_visible(&mut self) {
        let visible: Vec<String> = self.paginated().iter().map(|e| e.id.clone()).collect();
        self.selected.extend(visible);
        self.emit_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.emit_selection();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Selection status relative to the currently visible page.
    pub fn selection_state(&self) -> SelectionState {
        let visible = self.paginated();
        let selected = visible
            .iter()
            .filter(|e| self.selected.contains(&e.id))
            .count();
        if selected == 0 {
            SelectionState::None
        } else if selected == visible.len() {
            SelectionState::All
        } else {
            SelectionState::Some
        }
    }

    /// Replace the collection with the fixed demonstration dataset, going
    /// through the normal `add` path per record so identifiers, persistence,
    /// and notifications behave exactly as for user-created records.
    pub fn seed(&mut self) -> StoreResult<usize> {
        self.employees.clear();
        // the replaced records leave the selection set, like any delete
        if !self.selected.is_empty() {
            self.selected.clear();
            self.emit_selection();
        }
        let drafts = seed::demo_drafts();
        let count = drafts.len();
        for draft in drafts {
            self.add(draft)?;
        }
        Ok(count)
    }

    fn materialize(&self, id: String, draft: EmployeeDraft) -> StoreResult<Employee> {
        Ok(Employee {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            department: draft.department.ok_or(StoreError::IncompleteDraft)?,
            position: draft.position.ok_or(StoreError::IncompleteDraft)?,
            date_of_employment: draft
                .date_of_employment
                .ok_or(StoreError::IncompleteDraft)?,
            date_of_birth: draft.date_of_birth.ok_or(StoreError::IncompleteDraft)?,
        })
    }

    /// Millisecond timestamp plus a random base-36 suffix. Not a durable
    /// identity scheme, but collisions are regenerated so identifiers never
    /// repeat within a collection.
    fn next_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let millis = Utc::now().timestamp_millis();
            let suffix: String = (0..ID_SUFFIX_LEN)
                .map(|_| ID_SUFFIX_CHARSET[rng.gen_range(0..ID_SUFFIX_CHARSET.len())] as char)
                .collect();
            let id = format!("{millis}{suffix}");
            if !self.employees.iter().any(|e| e.id == id) {
                return id;
            }
        }
    }

    fn save_employees(&mut self) -> StoreResult<()> {
        persist::save_employees(self.storage.as_mut(), &self.employees)?;
        self.subscribers.emit(&EmployeeEvent::EmployeesChanged {
            total: self.employees.len(),
        });
        Ok(())
    }

    fn save_settings(&mut self) -> StoreResult<()> {
        persist::save_view_settings(self.storage.as_mut(), &self.settings)?;
        self.subscribers
            .emit(&EmployeeEvent::SettingsChanged(self.settings.clone()));
        Ok(())
    }

    fn emit_selection(&self) {
        self.subscribers.emit(&EmployeeEvent::SelectionChanged {
            selected: self.selected.len(),
        });
    }
}
