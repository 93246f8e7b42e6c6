//! Search executor contract and its result set

use crate::context::RequestContext;
use crate::error::SearchError;
use crate::issues::{Issue, User};
use crate::query::IssueQuery;
use async_trait::async_trait;

/// Issues matching a query, as returned by a [`SearchExecutor`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueResultSet {
    /// Issues of the requested page, in result order
    pub issues: Vec<Issue>,
    /// Authoritative number of matches over all pages
    pub total: usize,
    /// Whether matches were dropped by the hard cap
    pub max_results_reached: bool,
    /// Users already loaded with the issues
    pub users: Vec<User>,
}

impl IssueResultSet {
    pub fn new(issues: Vec<Issue>, total: usize) -> Self {
        Self {
            issues,
            total,
            max_results_reached: false,
            users: Vec::new(),
        }
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn truncated(mut self) -> Self {
        self.max_results_reached = true;
        self
    }
}

/// Storage or index able to resolve an [`IssueQuery`].
///
/// Executors own the hard cap, enforce permissions and apply no retry or
/// timeout policy on behalf of the caller.
#[async_trait]
pub trait SearchExecutor: Send + Sync {
    async fn find(&self, query: &IssueQuery, ctx: &RequestContext) -> Result<IssueResultSet, SearchError>;
}
