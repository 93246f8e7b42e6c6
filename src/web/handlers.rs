//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::context::{Caller, RequestContext};
use crate::locales::parse_accept_language;
use crate::query::SearchParams;
use crate::results::IssueSearchResponse;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};

/// Build the request context from the request headers
fn request_context(state: &AppState, headers: &HeaderMap) -> RequestContext {
    let login = headers
        .get(state.settings.server.login_header.as_str())
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());
    let caller = login.map_or_else(Caller::anonymous, Caller::user);

    let locale = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_accept_language)
        .unwrap_or_else(|| state.settings.search.default_locale.clone());

    RequestContext::new(caller, locale)
}

/// Issue search handler
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<IssueSearchResponse>, ApiError> {
    let Query(params) = params?;
    let ctx = request_context(&state, &headers);
    let response = state.search.execute(&params, &ctx).await?;
    Ok(Json(response))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION
    }))
}
