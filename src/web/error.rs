//! HTTP mapping of search failures

use crate::error::{Error, QueryError, SearchError};
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Request failure rendered as a JSON error response
#[derive(Debug)]
pub enum ApiError {
    Search(Error),
    /// Query string that does not deserialize into search parameters
    MalformedQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Search(Error::Query(_)) | Self::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            Self::Search(Error::Search(SearchError::PermissionDenied(_))) => StatusCode::FORBIDDEN,
            Self::Search(Error::Search(SearchError::Storage(_))) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Search(e) => e.to_string(),
            Self::MalformedQuery(reason) => format!("Malformed query string: {}", reason),
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError::Search(e)
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        ApiError::Search(e.into())
    }
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        ApiError::Search(e.into())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = if status.is_server_error() {
            tracing::error!(error = %self.message(), "Issue search failed");
            "An error occurred while searching issues".to_string()
        } else {
            self.message()
        };
        (status, Json(json!({ "errors": [{ "msg": msg }] }))).into_response()
    }
}
