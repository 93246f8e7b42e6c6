//! Wire shape of a search response

use crate::issues::{Component, Resolution, Rule, Severity, Status, User};
use crate::search::Paging;
use serde::Serialize;
use std::collections::BTreeMap;

/// Issues of a page plus every entity they reference
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSearchResponse {
    pub max_results_reached: bool,
    pub paging: PagingView,
    pub issues: Vec<IssueView>,
    pub components: Vec<ComponentView>,
    pub projects: Vec<ProjectView>,
    pub rules: Vec<RuleView>,
    pub users: Vec<UserView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingView {
    #[serde(flatten)]
    pub paging: Paging,
    /// Total formatted for the request locale
    pub f_total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueView {
    pub key: String,
    pub component: String,
    pub project: String,
    pub rule: String,
    pub status: Status,
    pub resolution: Option<Resolution>,
    pub severity: Severity,
    pub message: Option<String>,
    pub line: Option<u32>,
    pub debt: Option<String>,
    pub reporter: Option<String>,
    pub assignee: Option<String>,
    pub author: Option<String>,
    pub action_plan: Option<String>,
    pub creation_date: String,
    pub update_date: Option<String>,
    pub f_update_age: Option<String>,
    pub close_date: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attr: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_plan_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentView {
    pub key: String,
    pub id: i64,
    pub qualifier: String,
    pub name: String,
    pub long_name: Option<String>,
    pub path: Option<String>,
    pub project_id: Option<i64>,
    pub sub_project_id: Option<i64>,
}

impl ComponentView {
    pub fn of(component: &Component) -> Self {
        // A root project has no sub-project and a project id pointing at itself
        let project_id = component
            .project_id
            .filter(|_| component.sub_project_id.is_some());

        Self {
            key: component.key.clone(),
            id: component.id,
            qualifier: component.qualifier.clone(),
            name: component.name.clone(),
            long_name: component.long_name.clone(),
            path: component.path.clone(),
            project_id,
            sub_project_id: component.sub_project_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub key: String,
    pub id: i64,
    pub qualifier: String,
    pub name: String,
    pub long_name: Option<String>,
}

impl ProjectView {
    pub fn of(project: &Component) -> Self {
        Self {
            key: project.key.clone(),
            id: project.id,
            qualifier: project.qualifier.clone(),
            name: project.name.clone(),
            long_name: project.long_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleView {
    pub key: String,
    pub name: String,
    pub desc: Option<String>,
    pub status: String,
}

impl From<&Rule> for RuleView {
    fn from(rule: &Rule) -> Self {
        Self {
            key: rule.key.to_string(),
            name: rule.name.clone(),
            desc: rule.description.clone(),
            status: rule.status.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub login: String,
    pub name: String,
    pub active: bool,
    pub email: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            login: user.login.clone(),
            name: user.name.clone(),
            active: user.active,
            email: user.email.clone(),
        }
    }
}
