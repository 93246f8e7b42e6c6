//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/issues/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::store::{Dataset, MemoryIndex};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    const DATASET: &str = r#"
components:
  - { id: 1, key: org.struts, qualifier: TRK, name: Struts }
  - { id: 2, key: "org.struts:Action.java", qualifier: FIL, name: Action.java, project_id: 1, sub_project_id: 1 }
  - { id: 10, key: org.secret, qualifier: TRK, name: Secret }
rules:
  - { key: "squid:AvoidCycles", name: Avoid cycles, language: java }
users:
  - { login: simon, name: Simon }
action_plans:
  - { key: PLAN-1, name: "3.6" }
issues:
  - key: ABCD
    component_key: "org.struts:Action.java"
    project_key: org.struts
    rule: "squid:AvoidCycles"
    status: OPEN
    severity: MAJOR
    assignee: simon
    action_plan: PLAN-1
    debt: 150
    creation_date: 2013-05-01T13:00:00Z
  - key: EFGH
    component_key: "org.struts:Action.java"
    project_key: org.struts
    rule: "squid:AvoidCycles"
    status: CLOSED
    resolution: FIXED
    severity: BLOCKER
    creation_date: 2013-05-02T13:00:00Z
permissions:
  - { project: org.secret, users: [simon] }
"#;

    fn app() -> Router {
        let settings = Settings::default();
        let dataset = Dataset::from_yaml(DATASET).unwrap();
        let index = Arc::new(MemoryIndex::new(dataset, settings.policy()));
        create_router(AppState::new(settings, index))
    }

    async fn get_json(uri: &str, login: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri(uri).header("accept-language", "fr-FR,fr;q=0.9");
        if let Some(login) = login {
            request = request.header("x-user-login", login);
        }
        let response = app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_search_response_shape() {
        let uri = "/api/issues/search?sort=CREATION_DATE&asc=true&extra_fields=actions,assigneeName,actionPlanName";
        let (status, body) = get_json(uri, Some("simon")).await;
        assert_eq!(status, StatusCode::OK);

        assert_eq!(body["maxResultsReached"], false);
        assert_eq!(body["paging"]["pageIndex"], 1);
        assert_eq!(body["paging"]["pageSize"], 100);
        assert_eq!(body["paging"]["total"], 2);
        assert_eq!(body["paging"]["pages"], 1);
        assert_eq!(body["paging"]["fTotal"], "2");

        let first = &body["issues"][0];
        assert_eq!(first["key"], "ABCD");
        assert_eq!(first["rule"], "squid:AvoidCycles");
        assert_eq!(first["debt"], "2h 30min");
        assert_eq!(first["assigneeName"], "Simon");
        assert_eq!(first["actionPlanName"], "3.6");
        assert!(first["actions"].as_array().unwrap().iter().any(|a| a == "comment"));
        assert!(first.get("transitions").is_none());

        assert_eq!(body["components"].as_array().unwrap().len(), 1);
        assert_eq!(body["projects"][0]["key"], "org.struts");
        assert_eq!(body["rules"][0]["key"], "squid:AvoidCycles");
        assert_eq!(body["users"][0]["login"], "simon");
    }

    #[tokio::test]
    async fn test_hide_rules() {
        let (status, body) = get_json("/api/issues/search?hideRules=true", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["rules"].as_array().unwrap().is_empty());
        assert_eq!(body["issues"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_parameter() {
        let (status, body) = get_json("/api/issues/search?pageSize=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"][0]["msg"].as_str().unwrap().contains("pageSize"));

        let (status, _) = get_json("/api/issues/search?severities=HUGE", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json("/api/issues/search?createdAfter=yesterday", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_repeated_parameter_is_a_json_error() {
        let (status, body) = get_json("/api/issues/search?pageSize=10&pageSize=20", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"][0]["msg"].as_str().unwrap().contains("pageSize"));
    }

    #[tokio::test]
    async fn test_forbidden_component() {
        let uri = "/api/issues/search?componentRoots=org.secret";
        let (status, _) = get_json(uri, None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = get_json(uri, Some("simon")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["paging"]["total"], 0);
    }
}
