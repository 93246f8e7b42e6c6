//! Raw parameters to [`IssueQuery`]

use super::models::{IssueQuery, IssueSort};
use super::params::*;
use crate::error::QueryError;
use crate::search::PaginationPolicy;

/// Builds validated issue queries from request parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryBuilder {
    policy: PaginationPolicy,
}

impl QueryBuilder {
    pub fn new(policy: PaginationPolicy) -> Self {
        Self { policy }
    }

    /// Parse and validate every parameter.
    ///
    /// Unset lists and booleans stay unset. `asc` is only read when `sort`
    /// is non-blank.
    pub fn build(&self, params: &SearchParams) -> Result<IssueQuery, QueryError> {
        let mut query = IssueQuery {
            issue_keys: parse_list(ISSUES, params.issues.as_deref())?,
            severities: parse_enum_list(SEVERITIES, params.severities.as_deref())?,
            statuses: parse_enum_list(STATUSES, params.statuses.as_deref())?,
            resolutions: parse_enum_list(RESOLUTIONS, params.resolutions.as_deref())?,
            components: parse_list(COMPONENTS, params.components.as_deref())?,
            component_roots: parse_list(COMPONENT_ROOTS, params.component_roots.as_deref())?,
            rules: parse_rule_keys(RULES, params.rules.as_deref())?,
            action_plans: parse_list(ACTION_PLANS, params.action_plans.as_deref())?,
            reporters: parse_list(REPORTERS, params.reporters.as_deref())?,
            assignees: parse_list(ASSIGNEES, params.assignees.as_deref())?,
            languages: parse_list(LANGUAGES, params.languages.as_deref())?,
            resolved: parse_bool(RESOLVED, params.resolved.as_deref())?,
            assigned: parse_bool(ASSIGNED, params.assigned.as_deref())?,
            planned: parse_bool(PLANNED, params.planned.as_deref())?,
            hide_rules: parse_bool(HIDE_RULES, params.hide_rules.as_deref())?,
            created_at: parse_date(CREATED_AT, params.created_at.as_deref())?,
            created_after: parse_date(CREATED_AFTER, params.created_after.as_deref())?,
            created_before: parse_date(CREATED_BEFORE, params.created_before.as_deref())?,
            ..IssueQuery::default()
        };

        query.page = self.policy.resolve(
            parse_int(PAGE_SIZE, params.page_size.as_deref())?,
            parse_int(PAGE_INDEX, params.page_index.as_deref())?,
            query.has_component_filter(),
        )?;

        if let Some(sort) = params.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let sort = sort
                .parse::<IssueSort>()
                .map_err(|e| QueryError::invalid(SORT, sort, e.to_string()))?;
            query.sort = Some(sort);
            query.asc = parse_bool(ASC, params.asc.as_deref())?;
        }

        Ok(query)
    }
}
