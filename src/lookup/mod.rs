//! Entity lookups used while assembling a response
//!
//! Lookups never fail: an entity that cannot be found (deleted after the
//! issue was indexed, for instance) is reported as `None`.

use crate::context::Caller;
use crate::issues::{ActionPlan, Component, Rule, RuleKey, User};
use std::sync::Arc;

pub trait ComponentLookup: Send + Sync {
    fn component(&self, key: &str) -> Option<Component>;
}

pub trait RuleLookup: Send + Sync {
    fn rule(&self, key: &RuleKey) -> Option<Rule>;
}

pub trait UserLookup: Send + Sync {
    fn user(&self, login: &str) -> Option<User>;
}

pub trait ActionPlanLookup: Send + Sync {
    fn action_plan(&self, key: &str) -> Option<ActionPlan>;
}

/// Roles a caller may hold on a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectRole {
    /// Browse the project and its issues
    User,
    /// Administer the project's issues
    IssueAdmin,
}

/// Permission checks on projects
pub trait ProjectPermissions: Send + Sync {
    fn has_project_role(&self, caller: &Caller, project_key: &str, role: ProjectRole) -> bool;
}

/// All entity lookups needed by the result assembler
#[derive(Clone)]
pub struct Lookups {
    pub components: Arc<dyn ComponentLookup>,
    pub rules: Arc<dyn RuleLookup>,
    pub users: Arc<dyn UserLookup>,
    pub action_plans: Arc<dyn ActionPlanLookup>,
}

impl Lookups {
    /// Use a single backend for every lookup
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: ComponentLookup + RuleLookup + UserLookup + ActionPlanLookup + 'static,
    {
        Self {
            components: backend.clone(),
            rules: backend.clone(),
            users: backend.clone(),
            action_plans: backend,
        }
    }
}
