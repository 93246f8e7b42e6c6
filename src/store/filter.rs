//! Query matching and sorting over issue records

use super::memory::MemoryIndex;
use crate::issues::Issue;
use crate::query::{IssueQuery, IssueSort};
use std::cmp::Ordering;

/// Whether `values` is unset, empty, or contains `value`
fn in_filter<T: PartialEq + ?Sized, U: AsRef<T>>(values: &Option<Vec<U>>, value: &T) -> bool {
    match values {
        Some(values) if !values.is_empty() => values.iter().any(|v| v.as_ref() == value),
        _ => true,
    }
}

fn in_optional_filter(values: &Option<Vec<String>>, value: Option<&str>) -> bool {
    match values {
        Some(values) if !values.is_empty() => value.is_some_and(|v| values.iter().any(|x| x == v)),
        _ => true,
    }
}

fn tri_state(filter: Option<bool>, actual: bool) -> bool {
    filter.map_or(true, |expected| expected == actual)
}

/// Whether an issue matches every filter of the query
pub fn matches(index: &MemoryIndex, query: &IssueQuery, issue: &Issue) -> bool {
    let severities_ok = query
        .severities
        .as_ref()
        .map_or(true, |s| s.is_empty() || s.contains(&issue.severity));
    let statuses_ok = query
        .statuses
        .as_ref()
        .map_or(true, |s| s.is_empty() || s.contains(&issue.status));
    let resolutions_ok = query.resolutions.as_ref().map_or(true, |r| {
        r.is_empty() || issue.resolution.is_some_and(|res| r.contains(&res))
    });
    let rules_ok = query
        .rules
        .as_ref()
        .map_or(true, |r| r.is_empty() || r.contains(&issue.rule));

    in_filter(&query.issue_keys, issue.key.as_str())
        && severities_ok
        && statuses_ok
        && resolutions_ok
        && rules_ok
        && in_filter(&query.components, issue.component_key.as_str())
        && matches_component_roots(index, query, issue)
        && in_optional_filter(&query.action_plans, issue.action_plan.as_deref())
        && in_optional_filter(&query.reporters, issue.reporter.as_deref())
        && in_optional_filter(&query.assignees, issue.assignee.as_deref())
        && in_optional_filter(&query.languages, index.language_of(issue))
        && tri_state(query.resolved, issue.resolution.is_some())
        && tri_state(query.assigned, issue.assignee.is_some())
        && tri_state(query.planned, issue.action_plan.is_some())
        && query.created_at.map_or(true, |at| issue.creation_date == at)
        && query.created_after.map_or(true, |after| issue.creation_date >= after)
        && query.created_before.map_or(true, |before| issue.creation_date < before)
}

/// A root matches itself, its files and directories, and every component of
/// the project or module it designates
fn matches_component_roots(index: &MemoryIndex, query: &IssueQuery, issue: &Issue) -> bool {
    let roots = match &query.component_roots {
        Some(roots) if !roots.is_empty() => roots,
        _ => return true,
    };

    let component = index.component_entity(&issue.component_key);
    roots.iter().any(|root| {
        if issue.component_key == *root || issue.project_key == *root {
            return true;
        }
        if issue.component_key.starts_with(&format!("{}/", root)) {
            return true;
        }
        match (index.component_entity(root), component) {
            (Some(root), Some(component)) => {
                component.project_id == Some(root.id) || component.sub_project_id == Some(root.id)
            }
            _ => false,
        }
    })
}

/// Compare two issues on a sort field, ascending
fn compare(sort: IssueSort, a: &Issue, b: &Issue) -> Ordering {
    match sort {
        IssueSort::CreationDate => a.creation_date.cmp(&b.creation_date),
        IssueSort::UpdateDate => a.update_date.cmp(&b.update_date),
        IssueSort::CloseDate => a.close_date.cmp(&b.close_date),
        IssueSort::Assignee => a.assignee.cmp(&b.assignee),
        IssueSort::Severity => a.severity.cmp(&b.severity),
        IssueSort::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

/// Sort issues in place; without a sort field the natural order is kept
pub fn sort(issues: &mut [&Issue], query: &IssueQuery) {
    if let Some(field) = query.sort {
        if query.is_ascending() {
            issues.sort_by(|a, b| compare(field, a, b));
        } else {
            issues.sort_by(|a, b| compare(field, b, a));
        }
    }
}
