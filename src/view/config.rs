//! Navigation between the entry view and the case view.
//!
//! The case view is configured from its query string (`name`, `db`); the
//! entry view builds that query string from the form.

use serde::Serialize;
use thiserror::Error;
use url::form_urlencoded;

use crate::case::UNKNOWN_CASE;

pub const CASE_PATH: &str = "/case";

/// Time the case view shows the loading screen before the graph appears.
pub const LOADING_DURATION_MS: u64 = 12_000;
pub const LOADING_DURATION_DB_MS: u64 = 15_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewConfigError {
    #[error("invalid value '{value}' for '{key}', expected 0 or 1")]
    InvalidFlag { key: String, value: String },
    #[error("a case needs a name and at least one document")]
    IncompleteForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseViewConfig {
    pub name: String,
    pub database_enhanced: bool,
}

impl Default for CaseViewConfig {
    fn default() -> Self {
        Self {
            name: UNKNOWN_CASE.to_string(),
            database_enhanced: false,
        }
    }
}

impl CaseViewConfig {
    /// Parse a case-view query string, with or without the leading `?`.
    /// Only the first occurrence of a key counts; unknown keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, ViewConfigError> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut name: Option<String> = None;
        let mut db: Option<String> = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "name" if name.is_none() => name = Some(value.into_owned()),
                "db" if db.is_none() => db = Some(value.into_owned()),
                _ => {}
            }
        }

        let database_enhanced = match db.as_deref() {
            None | Some("0") => false,
            Some("1") => true,
            Some(other) => {
                return Err(ViewConfigError::InvalidFlag {
                    key: "db".to_string(),
                    value: other.to_string(),
                });
            }
        };

        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => UNKNOWN_CASE.to_string(),
        };

        Ok(Self { name, database_enhanced })
    }

    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("name", &self.name)
            .append_pair("db", if self.database_enhanced { "1" } else { "0" })
            .finish()
    }

    pub fn loading_duration_ms(&self) -> u64 {
        if self.database_enhanced {
            LOADING_DURATION_DB_MS
        } else {
            LOADING_DURATION_MS
        }
    }
}

/// The "new investigation" form. Files are listed by name only; their
/// contents are never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub case_name: String,
    pub files: Vec<String>,
    pub database_enhanced: bool,
}

impl EntryForm {
    pub fn can_build(&self) -> bool {
        !self.case_name.trim().is_empty() && !self.files.is_empty()
    }

    /// URL of the case view for this form.
    pub fn build_url(&self) -> Result<String, ViewConfigError> {
        if !self.can_build() {
            return Err(ViewConfigError::IncompleteForm);
        }
        let config = CaseViewConfig {
            name: self.case_name.trim().to_string(),
            database_enhanced: self.database_enhanced,
        };
        Ok(format!("{CASE_PATH}?{}", config.to_query()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_flag() {
        let cfg = CaseViewConfig::from_query("?name=Harbor%20Fire&db=1").unwrap();
        assert_eq!(cfg.name, "Harbor Fire");
        assert!(cfg.database_enhanced);
    }

    #[test]
    fn test_missing_values_use_defaults() {
        assert_eq!(CaseViewConfig::from_query("").unwrap(), CaseViewConfig::default());
        let cfg = CaseViewConfig::from_query("name=&db=0").unwrap();
        assert_eq!(cfg.name, UNKNOWN_CASE);
        assert!(!cfg.database_enhanced);
    }

    #[test]
    fn test_invalid_flag_rejected() {
        assert_eq!(
            CaseViewConfig::from_query("name=X&db=yes").unwrap_err(),
            ViewConfigError::InvalidFlag { key: "db".to_string(), value: "yes".to_string() }
        );
        assert!(CaseViewConfig::from_query("db=2").is_err());
        assert!(CaseViewConfig::from_query("db=").is_err());
    }

    #[test]
    fn test_first_occurrence_wins_and_unknown_keys_ignored() {
        let cfg = CaseViewConfig::from_query("name=A&utm=x&name=B&db=1&db=zzz").unwrap();
        assert_eq!(cfg.name, "A");
        assert!(cfg.database_enhanced);
    }

    #[test]
    fn test_query_roundtrip() {
        let cfg = CaseViewConfig { name: "R&D / 9:11?".to_string(), database_enhanced: true };
        assert_eq!(CaseViewConfig::from_query(&cfg.to_query()).unwrap(), cfg);
    }

    #[test]
    fn test_loading_duration() {
        assert_eq!(CaseViewConfig::default().loading_duration_ms(), 12_000);
        let db = CaseViewConfig { database_enhanced: true, ..CaseViewConfig::default() };
        assert_eq!(db.loading_duration_ms(), 15_000);
    }

    #[test]
    fn test_entry_form_requires_name_and_files() {
        let mut form = EntryForm { case_name: "  ".to_string(), files: vec!["a.pdf".to_string()], ..Default::default() };
        assert!(!form.can_build());
        assert_eq!(form.build_url().unwrap_err(), ViewConfigError::IncompleteForm);

        form.case_name = "Case".to_string();
        form.files.clear();
        assert!(!form.can_build());
    }

    #[test]
    fn test_entry_form_url() {
        let form = EntryForm {
            case_name: "Bomb Threat".to_string(),
            files: vec!["report.pdf".to_string()],
            database_enhanced: false,
        };
        let url = form.build_url().unwrap();
        assert_eq!(url, "/case?name=Bomb+Threat&db=0");

        let cfg = CaseViewConfig::from_query(url.trim_start_matches(CASE_PATH)).unwrap();
        assert_eq!(cfg.name, "Bomb Threat");
    }
}
