//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "ISSUES_SETTINGS_PATH";

/// Settings files probed in order when no explicit path is given
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/issue-search/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("issue-search/settings.yml"));
    }
    paths
}

/// First existing settings file, the explicit path taking precedence
pub fn locate() -> Option<PathBuf> {
    let explicit = std::env::var(SETTINGS_PATH_ENV).ok().map(PathBuf::from);
    explicit.into_iter().chain(default_paths()).find(|path| path.exists())
}

/// Load settings from a file, or use defaults without one.
///
/// Environment overrides are applied in every case.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.merge_env();
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = default_paths();
        assert_eq!(paths[0], PathBuf::from("settings.yml"));
        assert!(paths.contains(&PathBuf::from("/etc/issue-search/settings.yml")));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load(Some(Path::new("/nonexistent/settings.yml"))).is_err());
    }
}
