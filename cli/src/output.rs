//! Rendering for the list surface: a fixed-width table or a card list,
//! followed by the pagination line.

use entity::{Employee, Locale, ViewMode, format_date};
use store::{EmployeeStore, PageWindow};

pub fn render_list(store: &EmployeeStore, locale: Locale) -> String {
    let window = store.pagination_info(store.filtered().len());
    let page = store.paginated();
    let mut out = String::new();

    if page.is_empty() {
        if store.search_query().trim().is_empty() {
            out.push_str("No employees yet. Run `crewdesk seed` for demonstration data.\n");
        } else {
            out.push_str(&format!(
                "No employees match \"{}\".\n",
                store.search_query()
            ));
        }
        return out;
    }

    match store.view_mode() {
        ViewMode::Table => render_table(&mut out, &page, store, locale),
        ViewMode::List => render_cards(&mut out, &page, store, locale),
    }

    out.push_str(&render_window(window));
    out.push('\n');
    out
}

fn render_table(out: &mut String, page: &[&Employee], store: &EmployeeStore, locale: Locale) {
    let header = format!(
        "{:2} {:22} {:32} {:20} {:10} {:8} {:12} {:12}\n",
        "", "Name", "Email", "Phone", "Dept", "Position", "Employed", "Born"
    );
    out.push_str(&header);
    for employee in page {
        let mark = if store.is_selected(&employee.id) {
            "*"
        } else {
            " "
        };
        out.push_str(&format!(
            "{:2} {:22} {:32} {:20} {:10} {:8} {:12} {:12}\n",
            mark,
            format!("{} {}", employee.first_name, employee.last_name),
            employee.email,
            employee.phone,
            employee.department.as_str(),
            employee.position.as_str(),
            format_date(employee.date_of_employment, locale),
            format_date(employee.date_of_birth, locale),
        ));
    }
}

fn render_cards(out: &mut String, page: &[&Employee], store: &EmployeeStore, locale: Locale) {
    for employee in page {
        let mark = if store.is_selected(&employee.id) {
            " [selected]"
        } else {
            ""
        };
        out.push_str(&format!(
            "{} {}{mark}\n  {} | {}\n  {} {} | employed {}\n",
            employee.first_name,
            employee.last_name,
            employee.email,
            employee.phone,
            employee.department.as_str(),
            employee.position.as_str(),
            format_date(employee.date_of_employment, locale),
        ));
    }
}

fn render_window(window: PageWindow) -> String {
    format!("{}-{} of {}", window.start, window.end, window.total)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entity::{Department, EmployeeDraft, Position};
    use platform_storage::MemoryStorage;

    use super::*;

    fn seeded_store(count: usize) -> EmployeeStore {
        let mut store = EmployeeStore::load(Box::new(MemoryStorage::new())).unwrap();
        for n in 0..count {
            store
                .add(EmployeeDraft {
                    first_name: format!("First{n}"),
                    last_name: format!("Last{n}"),
                    email: format!("person{n}@example.com"),
                    phone: format!("+90 555 000 {n:04}"),
                    department: Some(Department::Tech),
                    position: Some(Position::Junior),
                    date_of_employment: NaiveDate::from_ymd_opt(2022, 9, 23),
                    date_of_birth: NaiveDate::from_ymd_opt(1995, 4, 1),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn empty_store_suggests_seeding() {
        let store = seeded_store(0);
        let text = render_list(&store, Locale::En);
        assert!(text.contains("crewdesk seed"));
    }

    #[test]
    fn table_output_ends_with_the_pagination_line() {
        let store = seeded_store(12);
        let text = render_list(&store, Locale::En);
        assert!(text.contains("person0@example.com"));
        assert!(text.trim_end().ends_with("1-10 of 12"));
    }

    #[test]
    fn card_list_renders_one_block_per_employee() {
        let mut store = seeded_store(3);
        store.set_view_mode(ViewMode::List).unwrap();
        let text = render_list(&store, Locale::En);
        assert_eq!(text.matches("example.com").count(), 3);
        assert!(text.trim_end().ends_with("1-3 of 3"));
    }

    #[test]
    fn no_match_message_quotes_the_query() {
        let mut store = seeded_store(2);
        store.set_search_query("zzz").unwrap();
        let text = render_list(&store, Locale::En);
        assert!(text.contains("\"zzz\""));
    }
}
