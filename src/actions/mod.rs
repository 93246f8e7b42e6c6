//! Actions and workflow transitions available on an issue
//!
//! The assembler only forwards `actions`/`transitions` requests to an
//! [`ActionsCollaborator`]; [`WorkflowActions`] is the default one.

use crate::context::Caller;
use crate::issues::{Issue, Status};
use crate::lookup::{ProjectPermissions, ProjectRole};
use std::sync::Arc;

/// Computes what a caller may do with an issue
pub trait ActionsCollaborator: Send + Sync {
    /// Names of the actions available to the caller
    fn list_actions(&self, issue: &Issue, caller: &Caller) -> Vec<String>;

    /// Names of the workflow transitions available to the caller
    fn list_transitions(&self, issue: &Issue, caller: &Caller) -> Vec<String>;
}

/// Actions and transitions of the standard issue workflow
pub struct WorkflowActions {
    permissions: Arc<dyn ProjectPermissions>,
}

impl WorkflowActions {
    pub fn new(permissions: Arc<dyn ProjectPermissions>) -> Self {
        Self { permissions }
    }

    fn is_issue_admin(&self, issue: &Issue, caller: &Caller) -> bool {
        self.permissions
            .has_project_role(caller, &issue.project_key, ProjectRole::IssueAdmin)
    }
}

impl ActionsCollaborator for WorkflowActions {
    fn list_actions(&self, issue: &Issue, caller: &Caller) -> Vec<String> {
        if !caller.is_logged_in() {
            return Vec::new();
        }

        let mut actions = vec!["comment"];
        if issue.resolution.is_none() {
            actions.push("assign");
            if !caller.is(issue.assignee.as_deref()) {
                actions.push("assign_to_me");
            }
            actions.push("plan");
            if self.is_issue_admin(issue, caller) {
                actions.push("set_severity");
            }
        }
        actions.into_iter().map(String::from).collect()
    }

    fn list_transitions(&self, issue: &Issue, caller: &Caller) -> Vec<String> {
        if !caller.is_logged_in() {
            return Vec::new();
        }

        let transitions: &[&str] = match issue.status {
            Status::Open | Status::Reopened => &["confirm", "resolve", "falsepositive"],
            Status::Confirmed => &["unconfirm", "resolve", "falsepositive"],
            Status::Resolved => &["reopen"],
            Status::Closed => &[],
        };

        transitions
            .iter()
            .filter(|t| **t != "falsepositive" || self.is_issue_admin(issue, caller))
            .map(|t| t.to_string())
            .collect()
    }
}
