//! Settings structures for the issue search service

use crate::locales::{Formatter, DEFAULT_LOCALE};
use crate::search::{PaginationPolicy, DEFAULT_MAX_RESULTS, DEFAULT_PAGE_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure, read from `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub search: SearchSettings,
    pub storage: StorageSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read settings {}", path.display()))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid settings {}", path.display()))?;
        Ok(settings)
    }

    /// Merge with environment variables (ISSUES_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("ISSUES_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = var("ISSUES_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("ISSUES_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("ISSUES_DATASET") {
            self.storage.dataset = Some(PathBuf::from(val));
        }
        if let Some(val) = var("ISSUES_MAX_RESULTS") {
            if let Ok(max) = val.parse() {
                self.search.max_results = max;
            }
        }
    }

    /// Page size rules derived from the search settings
    pub fn policy(&self) -> PaginationPolicy {
        PaginationPolicy::new(self.search.default_page_size, self.search.max_results)
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.search.hours_per_day)
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "issue-search".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub port: u16,
    pub bind_address: String,
    /// Header carrying the login of the authenticated caller
    pub login_header: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 9000,
            bind_address: "127.0.0.1".to_string(),
            login_header: "x-user-login".to_string(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Page size when the request names none
    pub default_page_size: usize,
    /// Hard cap on the number of matches a search may return
    pub max_results: usize,
    /// Working hours in a day of technical debt
    pub hours_per_day: i64,
    /// Locale used when the request does not negotiate one
    pub default_locale: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_results: DEFAULT_MAX_RESULTS,
            hours_per_day: 8,
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// YAML dataset loaded into the in-memory index
    pub dataset: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.login_header, "x-user-login");
        assert!(!settings.general.debug);
        assert_eq!(settings.policy(), PaginationPolicy::default());
        assert!(settings.storage.dataset.is_none());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 9100\nsearch:\n  max_results: 500").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.search.max_results, 500);
        assert_eq!(settings.search.default_page_size, 100);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ISSUES_DEBUG", "true"),
            ("ISSUES_PORT", "not-a-port"),
            ("ISSUES_DATASET", "/data/issues.yml"),
            ("ISSUES_MAX_RESULTS", "20"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|name| vars.get(name).map(|v| v.to_string()));

        assert!(settings.general.debug);
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.storage.dataset, Some(PathBuf::from("/data/issues.yml")));
        assert_eq!(settings.policy().max_results, 20);
    }
}
