//! Runtime configuration from environment variables.

use std::path::PathBuf;

pub const DATA_FILE_VAR: &str = "RHRH_DATA_FILE";
pub const DEFAULT_DATA_FILE: &str = "data/rhrh.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where records are loaded from and saved to.
    pub data_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(DATA_FILE_VAR).ok())
    }

    fn from_var(data_file: Option<String>) -> Self {
        let data_file = data_file.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| {
            tracing::warn!("{DATA_FILE_VAR} not set; using {DEFAULT_DATA_FILE}");
            DEFAULT_DATA_FILE.to_owned()
        });
        Self {
            data_file: data_file.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_file() {
        assert_eq!(
            AppConfig::from_var(None).data_file,
            PathBuf::from(DEFAULT_DATA_FILE)
        );
        assert_eq!(
            AppConfig::from_var(Some(" ".to_owned())).data_file,
            PathBuf::from(DEFAULT_DATA_FILE)
        );
    }

    #[test]
    fn variable_overrides_default() {
        assert_eq!(
            AppConfig::from_var(Some("/tmp/book.json".to_owned())).data_file,
            PathBuf::from("/tmp/book.json")
        );
    }
}
