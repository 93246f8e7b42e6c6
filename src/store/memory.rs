//! In-memory issue index

use super::dataset::{Dataset, ProjectPermission};
use super::filter;
use crate::context::{Caller, RequestContext};
use crate::error::SearchError;
use crate::issues::{ActionPlan, Component, Issue, Rule, RuleKey, User};
use crate::lookup::*;
use crate::query::IssueQuery;
use crate::search::{IssueResultSet, PaginationPolicy, SearchExecutor};
use async_trait::async_trait;
use indexmap::IndexSet;
use std::collections::HashMap;
use tracing::{debug, info};

/// Issue index held in memory, loaded from a [`Dataset`]
pub struct MemoryIndex {
    /// Issues in natural order
    issues: Vec<Issue>,
    components: HashMap<String, Component>,
    /// Component key by id
    component_ids: HashMap<i64, String>,
    rules: HashMap<RuleKey, Rule>,
    users: HashMap<String, User>,
    action_plans: HashMap<String, ActionPlan>,
    permissions: HashMap<String, ProjectPermission>,
    policy: PaginationPolicy,
}

impl MemoryIndex {
    pub fn new(dataset: Dataset, policy: PaginationPolicy) -> Self {
        let component_ids = dataset
            .components
            .iter()
            .map(|c| (c.id, c.key.clone()))
            .collect();

        let index = Self {
            issues: dataset.issues,
            components: dataset.components.into_iter().map(|c| (c.key.clone(), c)).collect(),
            component_ids,
            rules: dataset.rules.into_iter().map(|r| (r.key.clone(), r)).collect(),
            users: dataset.users.into_iter().map(|u| (u.login.clone(), u)).collect(),
            action_plans: dataset
                .action_plans
                .into_iter()
                .map(|p| (p.key.clone(), p))
                .collect(),
            permissions: dataset
                .permissions
                .into_iter()
                .map(|p| (p.project.clone(), p))
                .collect(),
            policy,
        };

        info!(
            "Indexed {} issues, {} components, {} rules",
            index.issues.len(),
            index.components.len(),
            index.rules.len()
        );
        index
    }

    pub(crate) fn component_entity(&self, key: &str) -> Option<&Component> {
        self.components.get(key)
    }

    /// Language of the rule that raised the issue
    pub(crate) fn language_of(&self, issue: &Issue) -> Option<&str> {
        self.rules.get(&issue.rule)?.language.as_deref()
    }

    /// Key of the project a component belongs to
    fn project_of(&self, component_key: &str) -> Option<&str> {
        let component = self.components.get(component_key)?;
        if component.is_root() {
            return Some(component.key.as_str());
        }
        component
            .project_id
            .and_then(|id| self.component_ids.get(&id))
            .map(String::as_str)
    }

    fn can_browse(&self, caller: &Caller, project_key: &str) -> bool {
        self.has_project_role(caller, project_key, ProjectRole::User)
    }

    /// Fail when the query addresses components and none of them is browsable
    fn check_addressed_components(&self, query: &IssueQuery, caller: &Caller) -> Result<(), SearchError> {
        let addressed: Vec<&str> = query
            .components
            .iter()
            .chain(query.component_roots.iter())
            .flatten()
            .filter_map(|key| self.project_of(key))
            .collect();

        if !addressed.is_empty() && !addressed.iter().any(|p| self.can_browse(caller, p)) {
            return Err(SearchError::PermissionDenied(format!(
                "user {} cannot browse project(s) {}",
                caller.login.as_deref().unwrap_or("anonymous"),
                addressed.join(", ")
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SearchExecutor for MemoryIndex {
    async fn find(&self, query: &IssueQuery, ctx: &RequestContext) -> Result<IssueResultSet, SearchError> {
        self.check_addressed_components(query, &ctx.caller)?;

        let mut matches: Vec<&Issue> = self
            .issues
            .iter()
            .filter(|issue| self.can_browse(&ctx.caller, &issue.project_key))
            .filter(|issue| filter::matches(self, query, issue))
            .collect();
        filter::sort(&mut matches, query);

        let max_results = self.policy.max_results;
        let truncated = matches.len() > max_results;
        matches.truncate(max_results);
        let total = matches.len();

        let page: Vec<Issue> = matches
            .into_iter()
            .skip(query.page.offset(max_results))
            .take(query.page.size.limit(max_results))
            .cloned()
            .collect();

        let logins: IndexSet<&str> = page.iter().flat_map(Issue::user_logins).collect();
        let users = logins
            .into_iter()
            .filter_map(|login| self.users.get(login).cloned())
            .collect();

        debug!(
            "Memory index matched {} issues (truncated: {}), returning {}",
            total,
            truncated,
            page.len()
        );

        let result = IssueResultSet::new(page, total).with_users(users);
        Ok(if truncated { result.truncated() } else { result })
    }
}

impl ComponentLookup for MemoryIndex {
    fn component(&self, key: &str) -> Option<Component> {
        self.components.get(key).cloned()
    }
}

impl RuleLookup for MemoryIndex {
    fn rule(&self, key: &RuleKey) -> Option<Rule> {
        self.rules.get(key).cloned()
    }
}

impl UserLookup for MemoryIndex {
    fn user(&self, login: &str) -> Option<User> {
        self.users.get(login).cloned()
    }
}

impl ActionPlanLookup for MemoryIndex {
    fn action_plan(&self, key: &str) -> Option<ActionPlan> {
        self.action_plans.get(key).cloned()
    }
}

impl ProjectPermissions for MemoryIndex {
    fn has_project_role(&self, caller: &Caller, project_key: &str, role: ProjectRole) -> bool {
        let permission = self.permissions.get(project_key);
        let login = caller.login.as_deref();
        let listed = |logins: &[String]| login.is_some_and(|l| logins.iter().any(|x| x == l));

        match (role, permission) {
            (ProjectRole::User, None) => true,
            (ProjectRole::User, Some(p)) => listed(p.users.as_slice()) || listed(p.issue_admins.as_slice()),
            (ProjectRole::IssueAdmin, None) => false,
            (ProjectRole::IssueAdmin, Some(p)) => listed(p.issue_admins.as_slice()),
        }
    }
}
