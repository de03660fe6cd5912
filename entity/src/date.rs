use chrono::NaiveDate;

use crate::Locale;

/// Render a date the way the selected locale writes short dates:
/// `MM/DD/YYYY` for English, `DD.MM.YYYY` for Turkish.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::En => date.format("%m/%d/%Y").to_string(),
        Locale::Tr => date.format("%d.%m.%Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_per_locale() {
        let date = NaiveDate::from_ymd_opt(2022, 9, 23).unwrap();
        assert_eq!(format_date(date, Locale::En), "09/23/2022");
        assert_eq!(format_date(date, Locale::Tr), "23.09.2022");
    }
}
