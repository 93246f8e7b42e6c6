//! Result set to composite response

use super::references::ReferenceSet;
use super::views::*;
use crate::actions::ActionsCollaborator;
use crate::context::RequestContext;
use crate::issues::{ActionPlan, Component, Issue, Rule, User};
use crate::locales::Formatter;
use crate::lookup::Lookups;
use crate::query::{ExtraField, ExtraFields, IssueQuery};
use crate::search::{IssueResultSet, PaginationPolicy};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Builds the response of a search from its result set.
///
/// Referenced entities are resolved on a best-effort basis: a reference that
/// cannot be resolved is left out, it never fails the response.
#[derive(Clone)]
pub struct ResultAssembler {
    policy: PaginationPolicy,
    formatter: Formatter,
    lookups: Lookups,
    actions: Arc<dyn ActionsCollaborator>,
}

/// Reference collections of one response
#[derive(Default)]
struct References {
    components: ReferenceSet<Component>,
    projects: ReferenceSet<Component>,
    rules: ReferenceSet<Rule>,
    users: ReferenceSet<User>,
    action_plans: ReferenceSet<ActionPlan>,
}

impl ResultAssembler {
    pub fn new(
        policy: PaginationPolicy,
        formatter: Formatter,
        lookups: Lookups,
        actions: Arc<dyn ActionsCollaborator>,
    ) -> Self {
        Self {
            policy,
            formatter,
            lookups,
            actions,
        }
    }

    /// Assemble the response for one page of issues.
    ///
    /// Issues keep the order of the result set. Only the first page-size
    /// issues are emitted if the executor returned more.
    pub fn assemble(
        &self,
        query: &IssueQuery,
        result: &IssueResultSet,
        extra_fields: ExtraFields,
        ctx: &RequestContext,
    ) -> IssueSearchResponse {
        let paging = self.policy.paging(query.page, result.total);
        let snapshot: HashMap<&str, &User> = result
            .users
            .iter()
            .map(|user| (user.login.as_str(), user))
            .collect();

        let mut refs = References::default();
        let issues: Vec<IssueView> = result
            .issues
            .iter()
            .take(paging.page_size)
            .map(|issue| {
                self.register_references(issue, query, &snapshot, &mut refs);
                self.issue_view(issue, extra_fields, &mut refs, ctx)
            })
            .collect();

        for key in refs.components.missing().chain(refs.projects.missing()) {
            debug!("Component {} referenced by an issue was not found", key);
        }

        IssueSearchResponse {
            max_results_reached: self
                .policy
                .max_results_reached(result.max_results_reached, result.total),
            paging: PagingView {
                paging,
                f_total: self.formatter.format_integer(paging.total, &ctx.locale),
            },
            issues,
            components: refs.components.values().map(ComponentView::of).collect(),
            projects: refs.projects.values().map(ProjectView::of).collect(),
            rules: refs.rules.values().map(RuleView::from).collect(),
            users: refs.users.values().map(UserView::from).collect(),
        }
    }

    fn register_references(
        &self,
        issue: &Issue,
        query: &IssueQuery,
        snapshot: &HashMap<&str, &User>,
        refs: &mut References,
    ) {
        let components = &self.lookups.components;
        refs.components
            .register(&issue.component_key, |key| components.component(key));
        refs.projects.register(&issue.project_key, |key| {
            components.component(key).filter(|c| {
                if !c.is_root() {
                    debug!("Project {} has qualifier {}, not rendered as a project", key, c.qualifier);
                }
                c.is_root()
            })
        });

        if !query.hides_rules() {
            let rule_key = issue.rule.to_string();
            refs.rules
                .register(&rule_key, |_| self.lookups.rules.rule(&issue.rule));
        }

        for login in issue.user_logins() {
            refs.users.register(login, |login| {
                snapshot
                    .get(login)
                    .map(|user| (*user).clone())
                    .or_else(|| self.lookups.users.user(login))
            });
        }
    }

    fn issue_view(
        &self,
        issue: &Issue,
        extra_fields: ExtraFields,
        refs: &mut References,
        ctx: &RequestContext,
    ) -> IssueView {
        let f = &self.formatter;
        let mut view = IssueView {
            key: issue.key.clone(),
            component: issue.component_key.clone(),
            project: issue.project_key.clone(),
            rule: issue.rule.to_string(),
            status: issue.status,
            resolution: issue.resolution,
            severity: issue.severity,
            message: issue.message.clone(),
            line: issue.line,
            debt: issue.debt.map(|minutes| f.format_debt(minutes)),
            reporter: issue.reporter.clone(),
            assignee: issue.assignee.clone(),
            author: issue.author.clone(),
            action_plan: issue.action_plan.clone(),
            creation_date: f.format_datetime(issue.creation_date),
            update_date: issue.update_date.map(|d| f.format_datetime(d)),
            f_update_age: issue.update_date.map(|d| f.format_age(d, ctx.now)),
            close_date: issue.close_date.map(|d| f.format_datetime(d)),
            attr: issue.attributes.clone(),
            actions: None,
            transitions: None,
            assignee_name: None,
            action_plan_name: None,
        };

        if extra_fields.contains(ExtraField::Actions) {
            view.actions = Some(self.actions.list_actions(issue, &ctx.caller));
        }
        if extra_fields.contains(ExtraField::Transitions) {
            view.transitions = Some(self.actions.list_transitions(issue, &ctx.caller));
        }
        if extra_fields.contains(ExtraField::AssigneeName) {
            // Already registered with the issue's users, never looked up again
            view.assignee_name = issue
                .assignee
                .as_deref()
                .and_then(|login| refs.users.get(login))
                .map(|user| user.name.clone());
        }
        if let Some(plan_key) = issue.action_plan.as_deref() {
            if extra_fields.contains(ExtraField::ActionPlanName) {
                let action_plans = &self.lookups.action_plans;
                view.action_plan_name = refs
                    .action_plans
                    .register(plan_key, |key| action_plans.action_plan(key))
                    .map(|plan| plan.name.clone());
            }
        }

        view
    }
}
