//! Dataset file backing the in-memory index

use crate::issues::{ActionPlan, Component, Issue, Rule, User};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Access list of a project. Projects without one are public.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPermission {
    pub project: String,
    /// Logins allowed to browse the project
    pub users: Vec<String>,
    /// Logins allowed to administer the project's issues
    pub issue_admins: Vec<String>,
}

/// Issues and every entity they may reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub components: Vec<Component>,
    pub rules: Vec<Rule>,
    pub users: Vec<User>,
    pub action_plans: Vec<ActionPlan>,
    pub issues: Vec<Issue>,
    pub permissions: Vec<ProjectPermission>,
}

impl Dataset {
    /// Load a dataset from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read dataset {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid dataset {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
components:
  - { id: 1, key: org.struts, qualifier: TRK, name: Struts }
  - { id: 2, key: "org.struts:Action.java", qualifier: FIL, name: Action.java, project_id: 1, sub_project_id: 1 }
rules:
  - { key: "squid:AvoidCycles", name: Avoid cycles, language: java }
users:
  - { login: simon, name: Simon }
issues:
  - key: ABCD
    component_key: "org.struts:Action.java"
    project_key: org.struts
    rule: "squid:AvoidCycles"
    status: OPEN
    severity: MAJOR
    creation_date: 2013-05-01T13:00:00Z
permissions:
  - { project: org.struts, users: [simon] }
"#;

    #[test]
    fn test_from_yaml() {
        let dataset = Dataset::from_yaml(YAML).unwrap();
        assert_eq!(dataset.components.len(), 2);
        assert_eq!(dataset.rules[0].status, "READY");
        assert!(dataset.users[0].active);
        assert_eq!(dataset.issues.len(), 1);
        assert!(dataset.action_plans.is_empty());
        assert!(dataset.permissions[0].issue_admins.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();
        let dataset = Dataset::from_file(file.path()).unwrap();
        assert_eq!(dataset.issues[0].key, "ABCD");
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::from_file("/nonexistent/dataset.yml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dataset.yml"));
    }
}
