use serde::{Deserialize, Serialize};

/// Page sizes the list surface offers. Sizes outside this set are ignored
/// by the store's mutator.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// How the list surface renders the current page.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::List => "list",
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = crate::ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(ViewMode::Table),
            "list" => Ok(ViewMode::List),
            other => Err(crate::employee::parse_enum_error(other, "table, list")),
        }
    }
}

/// Persisted view preferences: which page is open, how many rows it shows,
/// table or card-list rendering, and the free-text filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub current_page: usize,
    pub items_per_page: usize,
    pub view_mode: ViewMode,
    pub search_query: String,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: 10,
            view_mode: ViewMode::Table,
            search_query: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_persists_as_lowercase() {
        assert_eq!(serde_json::to_string(&ViewMode::Table).unwrap(), "\"table\"");
        assert_eq!(
            serde_json::from_str::<ViewMode>("\"list\"").unwrap(),
            ViewMode::List
        );
    }

    #[test]
    fn defaults_match_a_fresh_session() {
        let settings = ViewSettings::default();
        assert_eq!(settings.current_page, 1);
        assert_eq!(settings.items_per_page, 10);
        assert_eq!(settings.view_mode, ViewMode::Table);
        assert!(settings.search_query.is_empty());
    }
}
