use std::path::PathBuf;

const DATA_DIR_ENV: &str = "CREWDESK_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".crewdesk";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Resolve the data directory: CLI flag, then `CREWDESK_DATA_DIR`,
    /// then `.crewdesk` under the working directory.
    pub fn load(override_dir: Option<PathBuf>) -> Self {
        let data_dir = override_dir
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self { data_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence() {
        let config = AppConfig::load(Some(PathBuf::from("/tmp/override")));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/override"));
    }

    #[test]
    fn default_is_relative_dot_dir() {
        // env lookup is process-global; only assert the fallback shape here
        if std::env::var_os(DATA_DIR_ENV).is_none() {
            let config = AppConfig::load(None);
            assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        }
    }
}
