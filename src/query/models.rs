//! The issue query value object

use crate::issues::{Resolution, RuleKey, Severity, Status, UnknownValue};
use crate::search::PageRequest;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Sort fields accepted by the `sort` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueSort {
    CreationDate,
    UpdateDate,
    CloseDate,
    Assignee,
    Severity,
    Status,
}

impl IssueSort {
    pub const ALL: [IssueSort; 6] = [
        Self::CreationDate,
        Self::UpdateDate,
        Self::CloseDate,
        Self::Assignee,
        Self::Severity,
        Self::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreationDate => "CREATION_DATE",
            Self::UpdateDate => "UPDATE_DATE",
            Self::CloseDate => "CLOSE_DATE",
            Self::Assignee => "ASSIGNEE",
            Self::Severity => "SEVERITY",
            Self::Status => "STATUS",
        }
    }
}

impl FromStr for IssueSort {
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

impl fmt::Display for IssueSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated, normalized issue query.
///
/// `None` filters mean "no filter"; an empty list is kept as given. The page
/// request is always resolved to positive values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueQuery {
    pub issue_keys: Option<Vec<String>>,
    pub severities: Option<Vec<Severity>>,
    pub statuses: Option<Vec<Status>>,
    pub resolutions: Option<Vec<Resolution>>,
    pub components: Option<Vec<String>>,
    pub component_roots: Option<Vec<String>>,
    pub rules: Option<Vec<RuleKey>>,
    pub action_plans: Option<Vec<String>>,
    pub reporters: Option<Vec<String>>,
    pub assignees: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub resolved: Option<bool>,
    pub assigned: Option<bool>,
    pub planned: Option<bool>,
    pub hide_rules: Option<bool>,
    /// Exact creation date
    pub created_at: Option<DateTime<Utc>>,
    /// Inclusive
    pub created_after: Option<DateTime<Utc>>,
    /// Exclusive
    pub created_before: Option<DateTime<Utc>>,
    pub page: PageRequest,
    pub sort: Option<IssueSort>,
    /// Only set together with `sort`
    pub asc: Option<bool>,
}

impl IssueQuery {
    /// Query without any filter, first page of the default size
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the query is scoped to explicit components
    pub fn has_component_filter(&self) -> bool {
        let non_empty = |v: &Option<Vec<String>>| v.as_ref().is_some_and(|v| !v.is_empty());
        non_empty(&self.components) || non_empty(&self.component_roots)
    }

    /// Whether the `rules` collection must be left out of the response
    pub fn hides_rules(&self) -> bool {
        self.hide_rules == Some(true)
    }

    /// Ascending flag of the sort, descending when unspecified
    pub fn is_ascending(&self) -> bool {
        self.asc.unwrap_or(false)
    }

    pub fn with_severities(mut self, severities: Vec<Severity>) -> Self {
        self.severities = Some(severities);
        self
    }

    pub fn with_components(mut self, components: Vec<String>) -> Self {
        self.components = Some(components);
        self
    }

    pub fn with_component_roots(mut self, roots: Vec<String>) -> Self {
        self.component_roots = Some(roots);
        self
    }

    pub fn with_rules(mut self, rules: Vec<RuleKey>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    pub fn with_sort(mut self, sort: IssueSort, asc: Option<bool>) -> Self {
        self.sort = Some(sort);
        self.asc = asc;
        self
    }

    pub fn hiding_rules(mut self) -> Self {
        self.hide_rules = Some(true);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_values() {
        assert_eq!("UPDATE_DATE".parse::<IssueSort>(), Ok(IssueSort::UpdateDate));
        assert!("RANDOM".parse::<IssueSort>().is_err());
    }

    #[test]
    fn test_component_filter_ignores_empty_lists() {
        let query = IssueQuery::new().with_components(vec![]);
        assert!(!query.has_component_filter());

        let query = IssueQuery::new().with_component_roots(vec!["org.struts".to_string()]);
        assert!(query.has_component_filter());
    }

    #[test]
    fn test_default_query() {
        let query = IssueQuery::new();
        assert_eq!(query.page, PageRequest::default());
        assert!(query.sort.is_none());
        assert!(!query.hides_rules());
        assert!(!query.is_ascending());
    }
}
