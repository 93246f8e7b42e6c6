//! Issue and referenced entity definitions

use super::RuleKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Issue severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Self::Info,
        Self::Minor,
        Self::Major,
        Self::Critical,
        Self::Blocker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
            Self::Blocker => "BLOCKER",
        }
    }
}

/// Workflow status of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Open,
    Confirmed,
    Reopened,
    Resolved,
    Closed,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Self::Open,
        Self::Confirmed,
        Self::Reopened,
        Self::Resolved,
        Self::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Confirmed => "CONFIRMED",
            Self::Reopened => "REOPENED",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        }
    }
}

/// Resolution of a resolved or closed issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "FALSE-POSITIVE")]
    FalsePositive,
    #[serde(rename = "FIXED")]
    Fixed,
    #[serde(rename = "REMOVED")]
    Removed,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Self::FalsePositive, Self::Fixed, Self::Removed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FalsePositive => "FALSE-POSITIVE",
            Self::Fixed => "FIXED",
            Self::Removed => "REMOVED",
        }
    }
}

/// Value outside of an enumerated set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown value '{value}', possible values are: {expected}")]
pub struct UnknownValue {
    pub value: String,
    pub expected: String,
}

macro_rules! enumerated {
    ($($ty:ty),*) => {
        $(
            impl FromStr for $ty {
                type Err = UnknownValue;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::ALL
                        .iter()
                        .find(|v| v.as_str() == s)
                        .copied()
                        .ok_or_else(|| UnknownValue {
                            value: s.to_string(),
                            expected: Self::ALL
                                .iter()
                                .map(|v| v.as_str())
                                .collect::<Vec<_>>()
                                .join(", "),
                        })
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

enumerated!(Severity, Status, Resolution);

/// An issue record as stored by the index.
///
/// Identity is `key`, globally unique and immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    pub component_key: String,
    pub project_key: String,
    pub rule: RuleKey,
    pub status: Status,
    #[serde(default)]
    pub resolution: Option<Resolution>,
    pub severity: Severity,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub line: Option<u32>,
    /// Remediation effort in minutes
    #[serde(default)]
    pub debt: Option<i64>,
    #[serde(default)]
    pub reporter: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub action_plan: Option<String>,
    pub creation_date: DateTime<Utc>,
    #[serde(default)]
    pub update_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub close_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Issue {
    /// Create an open issue with the minimum set of fields
    pub fn new(
        key: impl Into<String>,
        component_key: impl Into<String>,
        project_key: impl Into<String>,
        rule: RuleKey,
        creation_date: DateTime<Utc>,
    ) -> Self {
        Self {
            key: key.into(),
            component_key: component_key.into(),
            project_key: project_key.into(),
            rule,
            status: Status::Open,
            resolution: None,
            severity: Severity::Major,
            message: None,
            line: None,
            debt: None,
            reporter: None,
            assignee: None,
            author: None,
            action_plan: None,
            creation_date,
            update_date: None,
            close_date: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_assignee(mut self, login: impl Into<String>) -> Self {
        self.assignee = Some(login.into());
        self
    }

    pub fn with_reporter(mut self, login: impl Into<String>) -> Self {
        self.reporter = Some(login.into());
        self
    }

    pub fn with_action_plan(mut self, plan_key: impl Into<String>) -> Self {
        self.action_plan = Some(plan_key.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn resolved(mut self, resolution: Resolution) -> Self {
        self.status = Status::Resolved;
        self.resolution = Some(resolution);
        self
    }

    /// Logins referenced by this issue, in reporter, assignee, author order
    pub fn user_logins(&self) -> impl Iterator<Item = &str> {
        [&self.reporter, &self.assignee, &self.author]
            .into_iter()
            .filter_map(|login| login.as_deref())
    }
}

/// A scanned artifact: project, module, directory or file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: i64,
    pub key: String,
    /// Kind of component: TRK, BRC, DIR, PAC, FIL, CLA, UTS, VW, SVW
    pub qualifier: String,
    pub name: String,
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    /// Id of the root project
    #[serde(default)]
    pub project_id: Option<i64>,
    /// Id of the closest module
    #[serde(default)]
    pub sub_project_id: Option<i64>,
}

/// Qualifiers of components rendered as projects
pub const ROOT_QUALIFIERS: &[&str] = &["TRK", "VW", "SVW", "DEV"];

impl Component {
    pub fn new(id: i64, key: impl Into<String>, qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            qualifier: qualifier.into(),
            name: name.into(),
            long_name: None,
            path: None,
            project_id: None,
            sub_project_id: None,
        }
    }

    pub fn with_parents(mut self, project_id: i64, sub_project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self.sub_project_id = Some(sub_project_id);
        self
    }

    /// Whether this component is a root of the component tree
    pub fn is_root(&self) -> bool {
        ROOT_QUALIFIERS.contains(&self.qualifier.as_str())
    }
}

/// A coding rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub key: RuleKey,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_rule_status")]
    pub status: String,
    #[serde(default)]
    pub language: Option<String>,
}

fn default_rule_status() -> String {
    "READY".to_string()
}

impl Rule {
    pub fn new(key: RuleKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            description: None,
            status: default_rule_status(),
            language: None,
        }
    }
}

/// A user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub email: Option<String>,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn new(login: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: name.into(),
            active: true,
            email: None,
        }
    }
}

/// A named grouping used to schedule remediation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub key: String,
    pub name: String,
}

impl ActionPlan {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}
